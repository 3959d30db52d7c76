use std::fmt;

/// Closed set of job buckets a description can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobCategory {
    DataEngineering,
    DataAnalyst,
    SoftwareEngineer,
    NetworkEngineer,
    General,
}

impl JobCategory {
    #[cfg(test)]
    pub const ALL: [JobCategory; 5] = [
        JobCategory::DataEngineering,
        JobCategory::DataAnalyst,
        JobCategory::SoftwareEngineer,
        JobCategory::NetworkEngineer,
        JobCategory::General,
    ];

    /// Snake-case identifier, e.g. `network_engineer`.
    pub fn id(self) -> &'static str {
        match self {
            JobCategory::DataEngineering => "data_engineering",
            JobCategory::DataAnalyst => "data_analyst",
            JobCategory::SoftwareEngineer => "software_engineer",
            JobCategory::NetworkEngineer => "network_engineer",
            JobCategory::General => "general",
        }
    }

    /// Human-readable label, e.g. `Network Engineer`.
    pub fn label(self) -> &'static str {
        match self {
            JobCategory::DataEngineering => "Data Engineering",
            JobCategory::DataAnalyst => "Data Analyst",
            JobCategory::SoftwareEngineer => "Software Engineer",
            JobCategory::NetworkEngineer => "Network Engineer",
            JobCategory::General => "General",
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Label is the id with underscores as spaces and each word capitalised.
    #[test]
    fn test_label_derives_from_id() {
        for category in JobCategory::ALL {
            let expected: Vec<String> = category
                .id()
                .split('_')
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect(),
                        None => String::new(),
                    }
                })
                .collect();
            assert_eq!(category.label(), expected.join(" "), "label for {category}");
        }
    }

    #[test]
    fn test_display_is_snake_case_id() {
        assert_eq!(JobCategory::DataAnalyst.to_string(), "data_analyst");
    }
}
