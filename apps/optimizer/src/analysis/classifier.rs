//! Job Classifier: first-match priority mapping from keywords to a [`JobCategory`].

use crate::models::JobCategory;

/// Indicator lists in priority order. The first category with any indicator
/// present wins, even when later categories also match.
pub const CATEGORY_INDICATORS: &[(JobCategory, &[&str])] = &[
    (
        JobCategory::NetworkEngineer,
        &[
            "network engineer",
            "cisco",
            "routing",
            "switching",
            "tcp/ip",
            "dns",
            "dhcp",
            "network connectivity",
            "service desk",
            "troubleshooting",
        ],
    ),
    (
        JobCategory::DataEngineering,
        &["data engineer", "etl", "pipeline", "spark", "hadoop", "kafka"],
    ),
    (
        JobCategory::DataAnalyst,
        &["data analyst", "analytics", "bi", "tableau", "power bi"],
    ),
    (
        JobCategory::SoftwareEngineer,
        &["software engineer", "full stack", "react", "frontend", "backend"],
    ),
];

/// Classifies by substring search over the space-joined, lowercased keywords.
/// Falls back to [`JobCategory::General`].
pub fn classify(keywords: &[String]) -> JobCategory {
    let joined = keywords.join(" ").to_lowercase();

    CATEGORY_INDICATORS
        .iter()
        .find(|(_, indicators)| indicators.iter().any(|term| joined.contains(term)))
        .map(|(category, _)| *category)
        .unwrap_or(JobCategory::General)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::KeywordExtractor;

    fn classify_text(text: &str) -> JobCategory {
        let keywords = KeywordExtractor::new().unwrap().extract(text);
        classify(&keywords)
    }

    fn kw(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_keywords_is_general() {
        assert_eq!(classify(&[]), JobCategory::General);
    }

    #[test]
    fn test_unmatched_keywords_are_general() {
        assert_eq!(classify(&kw(&["java", "python"])), JobCategory::General);
        assert_eq!(classify_text("Looking for a pastry chef"), JobCategory::General);
    }

    /// Network indicators outrank data-engineering indicators.
    #[test]
    fn test_network_beats_data_engineering() {
        assert_eq!(
            classify_text("Build Spark and Kafka jobs; Cisco experience required"),
            JobCategory::NetworkEngineer
        );
    }

    #[test]
    fn test_data_engineering_beats_analyst_and_software() {
        assert_eq!(
            classify(&kw(&["hadoop", "react", "tableau"])),
            JobCategory::DataEngineering
        );
    }

    #[test]
    fn test_analyst_beats_software() {
        assert_eq!(
            classify(&kw(&["power bi", "react"])),
            JobCategory::DataAnalyst
        );
    }

    #[test]
    fn test_software_engineer_from_react() {
        assert_eq!(
            classify_text("Frontend work in React and TypeScript"),
            JobCategory::SoftwareEngineer
        );
    }

    #[test]
    fn test_network_from_description() {
        assert_eq!(
            classify_text("Cisco, routing and DNS administration"),
            JobCategory::NetworkEngineer
        );
    }

    #[test]
    fn test_priority_table_order_is_fixed() {
        let order: Vec<JobCategory> = CATEGORY_INDICATORS.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                JobCategory::NetworkEngineer,
                JobCategory::DataEngineering,
                JobCategory::DataAnalyst,
                JobCategory::SoftwareEngineer,
            ]
        );
    }
}
