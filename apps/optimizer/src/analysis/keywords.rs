//! Keyword Extractor: matches fixed technical lexicons against a job description.

use std::collections::BTreeSet;

use regex::Regex;
use tracing::debug;

use crate::errors::Result;

/// Lexicons applied in order. Each pattern has exactly one capture group holding the term.
pub const LEXICONS: &[(&str, &str)] = &[
    (
        "languages",
        r"\b(python|java|javascript|typescript|sql|r|scala|go|c\+\+)\b",
    ),
    (
        "frameworks",
        r"\b(react|angular|vue|node\.?js|django|flask|spring|express)\b",
    ),
    ("cloud", r"\b(aws|azure|gcp|docker|kubernetes|jenkins|git)\b"),
    (
        "databases",
        r"\b(postgresql|mysql|mongodb|redis|snowflake|oracle)\b",
    ),
    ("data_tools", r"\b(spark|hadoop|kafka|tableau|power bi|looker)\b"),
    (
        "networking",
        r"\b(cisco|routing|switching|tcp/ip|dns|dhcp|network|connectivity|service desk|troubleshooting|configuration|documentation)\b",
    ),
    (
        "concepts",
        r"\b(machine learning|data science|devops|microservices|ci/cd|agile|scrum)\b",
    ),
];

/// Compiled lexicon set. Build once per run.
pub struct KeywordExtractor {
    lexicons: Vec<(&'static str, Regex)>,
}

impl KeywordExtractor {
    pub fn new() -> Result<Self> {
        let lexicons = LEXICONS
            .iter()
            .map(|(name, pattern)| Ok((*name, Regex::new(pattern)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { lexicons })
    }

    /// Returns the distinct matched terms, lowercase and sorted.
    /// An empty result is valid.
    pub fn extract(&self, job_description: &str) -> Vec<String> {
        let text = job_description.to_lowercase();
        let mut keywords = BTreeSet::new();

        for (name, pattern) in &self.lexicons {
            let before = keywords.len();
            for caps in pattern.captures_iter(&text) {
                if let Some(term) = caps.get(1) {
                    keywords.insert(term.as_str().to_string());
                }
            }
            debug!(lexicon = name, new_terms = keywords.len() - before, "lexicon applied");
        }

        keywords.into_iter().collect()
    }
}
