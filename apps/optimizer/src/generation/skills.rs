//! Category-specific Technical Skills blocks.
//!
//! The block is a pure function of the category. `General` keeps the user's own
//! skills fragment verbatim.

use crate::models::JobCategory;

pub const DATA_ENGINEERING_SKILLS: &str = r"%----------TECHNICAL SKILLS----------%
\section{Technical Skills}
\begin{itemize}[leftmargin=0.15in, label={}]
\small{\item{
\textbf{Programming}{: Python, SQL, R, JavaScript, Java, C/C++, HTML, CSS} \\
\textbf{Data Engineering}{: Data pipelines, ETL/ELT, Data modeling, Schema design, Pipeline development} \\
\textbf{Big Data \& Analytics}{: Spark, Hadoop, Kafka, Databricks, Distributed systems, Data quality} \\
\textbf{Cloud \& Infrastructure}{: AWS, Azure, Docker, Kubernetes, Git, CI/CD pipelines} \\
\textbf{Databases}{: PostgreSQL, MySQL, MongoDB, Snowflake, NoSQL, Database optimization} \\
\textbf{Tools \& Frameworks}{: Tableau, Power BI, Jupyter, VS Code, Agile, Technical testing}
}}
\end{itemize}";

pub const DATA_ANALYST_SKILLS: &str = r"%----------TECHNICAL SKILLS----------%
\section{Technical Skills}
\begin{itemize}[leftmargin=0.15in, label={}]
\small{\item{
\textbf{Programming}{: Python, Advanced SQL, R, JavaScript, Java, HTML, CSS} \\
\textbf{Business Analytics}{: Data analytics, Business intelligence, Statistical analysis, Data visualization} \\
\textbf{BI Tools}{: Power BI, Tableau, Looker, Excel, Spreadsheet programs, Dashboard development} \\
\textbf{Databases}{: Advanced SQL, PostgreSQL, MySQL, Data modeling, Query optimization} \\
\textbf{Cloud \& Tools}{: AWS, Git, Jupyter, Python libraries, Data processing} \\
\textbf{Skills}{: Machine learning, Data mining, Reporting, Analytics, Business processes}
}}
\end{itemize}";

pub const SOFTWARE_ENGINEER_SKILLS: &str = r"%----------TECHNICAL SKILLS----------%
\section{Technical Skills}
\begin{itemize}[leftmargin=0.15in, label={}]
\small{\item{
\textbf{Programming}{: Python, JavaScript, TypeScript, Java, C/C++, HTML, CSS, React.js, Node.js} \\
\textbf{Web Development}{: React, Angular, Vue, Express.js, RESTful APIs, GraphQL, Frontend applications} \\
\textbf{Cloud \& Infrastructure}{: AWS, Docker, Kubernetes, Git, CI/CD pipelines, Microservices} \\
\textbf{Databases}{: SQL, MySQL, PostgreSQL, MongoDB, NoSQL, Database design, API development} \\
\textbf{Tools \& Frameworks}{: Git, Jira, VS Code, Postman, Django, Flask, Agile methodology}
}}
\end{itemize}";

pub const NETWORK_ENGINEER_SKILLS: &str = r"%----------TECHNICAL SKILLS----------%
\section{Technical Skills}
\begin{itemize}[leftmargin=0.15in, label={}]
\small{\item{
\textbf{Networking}{: TCP/IP, OSI Model, Routing \& Switching, DNS, DHCP, HTTP, NAT, BGP, Subnetting, Network Connectivity} \\
\textbf{Network Tools}{: Cisco IOS, Network Diagnostics, ping, traceroute, Wireshark, Service Desk Management} \\
\textbf{Programming}{: Python, Bash/Shell Scripting, Network Automation, Configuration Management} \\
\textbf{Operating Systems}{: Linux, Windows, MacOS, Network Troubleshooting, System Administration} \\
\textbf{Tools \& Documentation}{: Git, Jira, Network Documentation, Inventory Management, Ticket Resolution}
}}
\end{itemize}";

/// Returns the skills block for `category`; `loaded_skills` only for `General`.
pub fn skills_block(category: JobCategory, loaded_skills: &str) -> &str {
    match category {
        JobCategory::DataEngineering => DATA_ENGINEERING_SKILLS,
        JobCategory::DataAnalyst => DATA_ANALYST_SKILLS,
        JobCategory::SoftwareEngineer => SOFTWARE_ENGINEER_SKILLS,
        JobCategory::NetworkEngineer => NETWORK_ENGINEER_SKILLS,
        JobCategory::General => loaded_skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOADED: &str = "\\section{Skills} my own list";

    #[test]
    fn test_general_returns_loaded_fragment_verbatim() {
        assert_eq!(skills_block(JobCategory::General, LOADED), LOADED);
    }

    #[test]
    fn test_lookup_is_pure() {
        for category in JobCategory::ALL {
            assert_eq!(
                skills_block(category, LOADED),
                skills_block(category, LOADED),
                "skills for {category} must be stable"
            );
        }
    }

    #[test]
    fn test_fixed_blocks_ignore_loaded_fragment() {
        assert_eq!(
            skills_block(JobCategory::NetworkEngineer, LOADED),
            NETWORK_ENGINEER_SKILLS
        );
        assert_eq!(skills_block(JobCategory::NetworkEngineer, ""), NETWORK_ENGINEER_SKILLS);
    }

    #[test]
    fn test_fixed_blocks_are_distinct_latex() {
        let blocks = [
            DATA_ENGINEERING_SKILLS,
            DATA_ANALYST_SKILLS,
            SOFTWARE_ENGINEER_SKILLS,
            NETWORK_ENGINEER_SKILLS,
        ];
        for (i, block) in blocks.iter().enumerate() {
            assert!(block.starts_with("%----------TECHNICAL SKILLS----------%"));
            assert!(block.ends_with("\\end{itemize}"));
            assert!(blocks[i + 1..].iter().all(|other| other != block));
        }
    }
}
