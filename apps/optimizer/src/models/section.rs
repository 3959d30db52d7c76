/// The five template fragments a resume is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Heading,
    Education,
    Skills,
    Experience,
    Projects,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Heading,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Projects,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            SectionKind::Heading => "heading.tex",
            SectionKind::Education => "education.tex",
            SectionKind::Skills => "skills.tex",
            SectionKind::Experience => "experience.tex",
            SectionKind::Projects => "projects.tex",
        }
    }
}

/// Loaded fragment text, trimmed. Immutable once read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    pub heading: String,
    pub education: String,
    pub skills: String,
    pub experience: String,
    pub projects: String,
}

impl Sections {
    pub(crate) fn set(&mut self, kind: SectionKind, text: String) {
        let slot = match kind {
            SectionKind::Heading => &mut self.heading,
            SectionKind::Education => &mut self.education,
            SectionKind::Skills => &mut self.skills,
            SectionKind::Experience => &mut self.experience,
            SectionKind::Projects => &mut self.projects,
        };
        *slot = text;
    }
}
