//! Project Selector: splits the projects fragment into entries, ranks them by
//! category keywords, and rebuilds a Projects section from the top entries.
//!
//! No fuzzy matching: a priority keyword scores when it occurs as a substring
//! of the lowercased entry text.

use tracing::debug;

use crate::generation::rewrite::ContentRewriter;
use crate::models::JobCategory;

/// Number of projects kept in the generated section.
pub const PROJECT_LIMIT: usize = 3;

const ENTRY_START: &str = "\\resumeProjectHeading";
const ENTRY_END: &str = "\\resumeItemListEnd";

const SECTION_HEADER: &str = "%-----------PROJECTS-----------%\n\\section{Projects}\n\\resumeSubHeadingListStart";
const SECTION_FOOTER: &str = "\\resumeSubHeadingListEnd";

/// Relevance keywords per category. Categories not listed score every entry 0.
pub const PRIORITY_KEYWORDS: &[(JobCategory, &[&str])] = &[
    (
        JobCategory::SoftwareEngineer,
        &["react", "node", "web", "api", "full-stack", "javascript", "typescript"],
    ),
    (
        JobCategory::DataEngineering,
        &["dask", "aws", "data", "analytics", "cloud", "distributed"],
    ),
    (
        JobCategory::DataAnalyst,
        &["analysis", "analytics", "data", "visualization", "pandas", "svm"],
    ),
];

/// How the projects fragment is turned into the Projects section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectMode {
    /// Rank entries and keep the top [`PROJECT_LIMIT`].
    #[default]
    Select,
    /// Rewrite the whole fragment without selecting.
    PassThrough,
}

/// One project block, as it appeared in the fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectEntry {
    /// Position in the fragment, from 0.
    pub index: usize,
    pub text: String,
}

/// A project entry with its relevance score for the current category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredProject {
    pub entry: ProjectEntry,
    pub score: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Parsing
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanState {
    Outside,
    Inside,
}

/// Splits the projects fragment into entries.
///
/// A line containing `\resumeProjectHeading` closes the open entry and starts
/// a new one. Lines inside an entry are kept; a line that is exactly
/// `\resumeItemListEnd` (after trimming) is kept and closes the scan state.
/// Lines outside any entry are dropped.
pub fn parse_entries(projects: &str) -> Vec<ProjectEntry> {
    let mut entries = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut state = ScanState::Outside;

    for line in projects.split('\n') {
        if line.contains(ENTRY_START) {
            if !current.is_empty() {
                push_entry(&mut entries, &current);
            }
            current = vec![line];
            state = ScanState::Inside;
        } else if state == ScanState::Inside {
            current.push(line);
            if line.trim() == ENTRY_END {
                state = ScanState::Outside;
            }
        }
    }

    if !current.is_empty() {
        push_entry(&mut entries, &current);
    }
    entries
}

fn push_entry(entries: &mut Vec<ProjectEntry>, lines: &[&str]) {
    entries.push(ProjectEntry {
        index: entries.len(),
        text: lines.join("\n"),
    });
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring and selection
// ────────────────────────────────────────────────────────────────────────────

pub fn priority_keywords(category: JobCategory) -> &'static [&'static str] {
    PRIORITY_KEYWORDS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

/// Counts the category's priority keywords present in the entry.
pub fn score_entry(entry: &ProjectEntry, category: JobCategory) -> u32 {
    let text = entry.text.to_lowercase();
    priority_keywords(category)
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count() as u32
}

/// Ranks entries by descending score, stable on ties, and keeps the top
/// [`PROJECT_LIMIT`]. With fewer entries than the limit, all of them are
/// kept in their original order with score 0.
pub fn select_projects(entries: Vec<ProjectEntry>, category: JobCategory) -> Vec<ScoredProject> {
    if entries.len() < PROJECT_LIMIT {
        return entries
            .into_iter()
            .map(|entry| ScoredProject { entry, score: 0 })
            .collect();
    }

    let mut ranked: Vec<ScoredProject> = entries
        .into_iter()
        .map(|entry| {
            let score = score_entry(&entry, category);
            ScoredProject { entry, score }
        })
        .collect();

    // `sort_by` is stable, so equal scores keep fragment order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(PROJECT_LIMIT);

    for project in &ranked {
        debug!(index = project.entry.index, score = project.score, "project selected");
    }
    ranked
}

// ────────────────────────────────────────────────────────────────────────────
// Section assembly
// ────────────────────────────────────────────────────────────────────────────

/// Builds the Projects section from the fragment according to `mode`.
pub fn build_projects_section(
    projects: &str,
    category: JobCategory,
    mode: ProjectMode,
    rewriter: &ContentRewriter,
) -> String {
    match mode {
        ProjectMode::PassThrough => rewriter.rewrite(projects, category),
        ProjectMode::Select => {
            let selected = select_projects(parse_entries(projects), category);
            render_selected(&selected, category, rewriter)
        }
    }
}

/// Header, then each entry rewritten independently and preceded by a blank
/// line, then a blank line and the list terminator.
fn render_selected(
    selected: &[ScoredProject],
    category: JobCategory,
    rewriter: &ContentRewriter,
) -> String {
    let mut section = String::from(SECTION_HEADER);
    for project in selected {
        section.push_str("\n\n");
        section.push_str(&rewriter.rewrite(&project.entry.text, category));
    }
    section.push_str("\n\n");
    section.push_str(SECTION_FOOTER);
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, body: &str) -> String {
        format!(
            "    \\resumeProjectHeading\n      {{\\textbf{{{name}}}}}{{2024}}\n      \\resumeItemListStart\n        \\resumeItem{{{body}}}\n      \\resumeItemListEnd"
        )
    }

    fn fragment(projects: &[String]) -> String {
        format!(
            "%-----------PROJECTS-----------%\n\\section{{Projects}}\n\\resumeSubHeadingListStart\n\n{}\n\n\\resumeSubHeadingListEnd",
            projects.join("\n\n")
        )
    }

    fn entries(names: &[(&str, &str)]) -> Vec<ProjectEntry> {
        let projects: Vec<String> = names.iter().map(|(n, b)| project(n, b)).collect();
        parse_entries(&fragment(&projects))
    }

    #[test]
    fn test_parse_splits_on_heading_and_drops_outside_lines() {
        let parsed = entries(&[("Alpha", "first"), ("Beta", "second")]);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].index, 0);
        assert!(parsed[0].text.starts_with("    \\resumeProjectHeading"));
        assert!(parsed[0].text.ends_with("\\resumeItemListEnd"));
        assert!(parsed[1].text.contains("Beta"));
        assert!(
            parsed.iter().all(|e| !e.text.contains("\\section{Projects}")),
            "section header lies outside every entry"
        );
    }

    #[test]
    fn test_parse_unterminated_entry_runs_to_next_heading() {
        let text = "\\resumeProjectHeading{A}{1}\n  line a\n\\resumeProjectHeading{B}{2}\n  line b";
        let parsed = parse_entries(text);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].text, "\\resumeProjectHeading{A}{1}\n  line a");
        assert_eq!(parsed[1].text, "\\resumeProjectHeading{B}{2}\n  line b");
    }

    #[test]
    fn test_parse_without_headings_is_empty() {
        assert!(parse_entries("\\section{Projects}\nno entries here").is_empty());
        assert!(parse_entries("").is_empty());
    }

    #[test]
    fn test_score_counts_distinct_keywords_as_substrings() {
        let entry = ProjectEntry {
            index: 0,
            text: "React web app with a REST API; React again, Webpack".to_string(),
        };
        // react, web, api; repeats do not count twice.
        assert_eq!(score_entry(&entry, JobCategory::SoftwareEngineer), 3);
        assert_eq!(score_entry(&entry, JobCategory::NetworkEngineer), 0);
        assert_eq!(score_entry(&entry, JobCategory::General), 0);
    }

    #[test]
    fn test_select_top_three_by_score() {
        let parsed = entries(&[
            ("Plain", "a cooking blog"),
            ("Dash", "Dask on AWS cloud, distributed data analytics"),
            ("Viz", "data visualization"),
            ("Pipe", "AWS data lake"),
        ]);
        let selected = select_projects(parsed, JobCategory::DataEngineering);
        let order: Vec<usize> = selected.iter().map(|p| p.entry.index).collect();
        assert_eq!(order, vec![1, 3, 2]);
        assert!(selected.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ties_keep_original_order() {
        let parsed = entries(&[
            ("One", "alpha"),
            ("Two", "beta"),
            ("Three", "gamma"),
            ("Four", "delta"),
            ("Five", "epsilon"),
        ]);
        let selected = select_projects(parsed, JobCategory::General);
        let order: Vec<usize> = selected.iter().map(|p| p.entry.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
        assert!(selected.iter().all(|p| p.score == 0));
    }

    #[test]
    fn test_exactly_three_when_more_exist() {
        let parsed = entries(&[("A", "react"), ("B", "web"), ("C", "api"), ("D", "node"), ("E", "x")]);
        assert_eq!(select_projects(parsed, JobCategory::SoftwareEngineer).len(), PROJECT_LIMIT);
    }

    #[test]
    fn test_fewer_than_three_kept_in_order_with_zero_score() {
        let parsed = entries(&[("Low", "notes"), ("High", "React web api")]);
        let selected = select_projects(parsed, JobCategory::SoftwareEngineer);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].entry.index, 0);
        assert_eq!(selected[1].entry.index, 1);
        assert!(selected.iter().all(|p| p.score == 0));
    }

    #[test]
    fn test_selected_section_layout() {
        let rewriter = ContentRewriter::new().unwrap();
        let text = fragment(&[project("Solo", "Deployed on aws")]);
        let section = build_projects_section(&text, JobCategory::General, ProjectMode::Select, &rewriter);

        assert!(section.starts_with(SECTION_HEADER));
        assert!(section.ends_with("\n\n\\resumeSubHeadingListEnd"));
        assert!(section.contains("\\resumeItem{Deployed on AWS cloud services}"));
        assert_eq!(section.matches("\\resumeProjectHeading").count(), 1);
    }

    #[test]
    fn test_pass_through_rewrites_whole_fragment() {
        let rewriter = ContentRewriter::new().unwrap();
        let projects: Vec<String> = (0..5).map(|i| project(&format!("P{i}"), "agile work")).collect();
        let text = fragment(&projects);
        let section =
            build_projects_section(&text, JobCategory::General, ProjectMode::PassThrough, &rewriter);

        assert_eq!(section.matches("\\resumeProjectHeading").count(), 5);
        assert_eq!(section.matches("Agile methodology").count(), 5);
    }

    #[test]
    fn test_priority_keywords_table() {
        assert!(priority_keywords(JobCategory::NetworkEngineer).is_empty());
        assert!(priority_keywords(JobCategory::General).is_empty());
        assert_eq!(priority_keywords(JobCategory::DataAnalyst).len(), 6);
    }
}
