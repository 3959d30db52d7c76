//! Resume Generation: runs the full templating pipeline for one job posting.
//!
//! Flow: extract keywords → classify → skills block → rewrite experience →
//!       build projects → assemble document.
//!
//! Nothing is written here. The caller receives the complete document and
//! decides where it goes, so a failure never leaves a partial file behind.

use chrono::{DateTime, Local};
use tracing::info;

use crate::analysis::{classify, KeywordExtractor};
use crate::errors::Result;
use crate::generation::projects::{build_projects_section, ProjectMode};
use crate::generation::rewrite::ContentRewriter;
use crate::generation::skills::skills_block;
use crate::models::{JobCategory, JobPosting, Sections};
use crate::render::{assemble_document, output_filename, render_preamble, DocumentParts};

/// A fully rendered resume, ready to write.
#[derive(Debug, Clone)]
pub struct GeneratedResume {
    pub filename: String,
    pub category: JobCategory,
    pub keywords: Vec<String>,
    pub content: String,
}

pub struct ResumeGenerator {
    sections: Sections,
    extractor: KeywordExtractor,
    rewriter: ContentRewriter,
    project_mode: ProjectMode,
}

impl ResumeGenerator {
    /// Compiles every lexicon and rewrite rule up front.
    pub fn new(sections: Sections, project_mode: ProjectMode) -> Result<Self> {
        Ok(Self {
            sections,
            extractor: KeywordExtractor::new()?,
            rewriter: ContentRewriter::new()?,
            project_mode,
        })
    }

    pub fn generate(&self, posting: &JobPosting) -> GeneratedResume {
        self.generate_at(posting, Local::now())
    }

    /// Same as [`generate`](Self::generate) with a fixed timestamp.
    pub fn generate_at(&self, posting: &JobPosting, generated_at: DateTime<Local>) -> GeneratedResume {
        let keywords = self.extractor.extract(&posting.description);
        let category = classify(&keywords);
        info!(
            category = category.id(),
            keyword_count = keywords.len(),
            mode = ?self.project_mode,
            "job analysed"
        );

        let preamble = render_preamble(&generated_at, category, keywords.len());
        let skills = skills_block(category, &self.sections.skills);
        let experience = self.rewriter.rewrite(&self.sections.experience, category);
        let projects = build_projects_section(
            &self.sections.projects,
            category,
            self.project_mode,
            &self.rewriter,
        );

        let content = assemble_document(&DocumentParts {
            preamble: &preamble,
            heading: &self.sections.heading,
            education: &self.sections.education,
            skills,
            experience: &experience,
            projects: &projects,
        });

        GeneratedResume {
            filename: output_filename(posting, category),
            category,
            keywords,
            content,
        }
    }
}
