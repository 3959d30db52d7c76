//! Content Rewriter: ordered, category-conditioned find/replace over LaTeX text.
//!
//! Rules run once each, in table order, and each substitutes over the text the
//! previous rules produced. There is no fixpoint iteration, so table order is
//! observable and must not change.

use regex::{NoExpand, Regex, RegexBuilder};
use tracing::debug;

use crate::errors::Result;
use crate::layout::BulletLimiter;
use crate::models::JobCategory;

/// Replacement text for a rule, optionally depending on the job category.
#[derive(Debug, Clone, Copy)]
pub enum Replacement {
    Always(&'static str),
    When {
        category: JobCategory,
        then: &'static str,
        otherwise: &'static str,
    },
}

impl Replacement {
    pub fn resolve(self, category: JobCategory) -> &'static str {
        match self {
            Replacement::Always(text) => text,
            Replacement::When {
                category: wanted,
                then,
                otherwise,
            } => {
                if category == wanted {
                    then
                } else {
                    otherwise
                }
            }
        }
    }
}

/// `(pattern, replacement)` in application order. Patterns match case-insensitively.
pub const REWRITE_RULES: &[(&str, Replacement)] = &[
    (
        r"\bsql\b",
        Replacement::When {
            category: JobCategory::DataAnalyst,
            then: "Advanced SQL",
            otherwise: "SQL",
        },
    ),
    (
        r"\banalytics platform\b",
        Replacement::When {
            category: JobCategory::DataEngineering,
            then: "data engineering platform",
            otherwise: "analytics platform",
        },
    ),
    (
        r"\bpython scripts\b",
        Replacement::When {
            category: JobCategory::DataEngineering,
            then: "data pipelines",
            otherwise: "Python automation",
        },
    ),
    (
        r"\bdashboards\b",
        Replacement::Always("business intelligence dashboards"),
    ),
    (r"\baws\b", Replacement::Always("AWS cloud services")),
    (r"\bagile\b", Replacement::Always("Agile methodology")),
    (
        r"\bweb applications?\b",
        Replacement::Always("frontend applications"),
    ),
    (
        r"\bapi development\b",
        Replacement::Always("RESTful API development"),
    ),
    (r"\bscalable\b", Replacement::Always("highly scalable")),
    (r"\breliable\b", Replacement::Always("highly reliable")),
    (r"\bresilient\b", Replacement::Always("highly resilient")),
    (r"\bcross functional\b", Replacement::Always("cross-functional")),
    (
        r"\bproduct challenges\b",
        Replacement::Always("technical and product challenges"),
    ),
    (
        r"\bcommunication skills\b",
        Replacement::Always("written and verbal communication skills"),
    ),
];

/// Compiled rewrite rules plus the bullet heuristic that always runs after them.
pub struct ContentRewriter {
    rules: Vec<(Regex, Replacement)>,
    bullets: BulletLimiter,
}

impl ContentRewriter {
    pub fn new() -> Result<Self> {
        let rules = REWRITE_RULES
            .iter()
            .map(|(pattern, replacement)| {
                let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
                Ok((regex, *replacement))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            bullets: BulletLimiter::new()?,
        })
    }

    /// Applies every rule once, in order, then the bullet heuristic.
    pub fn rewrite(&self, content: &str, category: JobCategory) -> String {
        let rewritten = self.apply_rules(content, category);
        self.bullets.enforce(&rewritten)
    }

    fn apply_rules(&self, content: &str, category: JobCategory) -> String {
        let mut text = content.to_string();
        for (regex, replacement) in &self.rules {
            if !regex.is_match(&text) {
                continue;
            }
            debug!(rule = regex.as_str(), "rewrite rule applied");
            text = regex
                .replace_all(&text, NoExpand(replacement.resolve(category)))
                .into_owned();
        }
        text
    }
}
