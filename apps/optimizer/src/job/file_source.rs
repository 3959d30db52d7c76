//! Structured job file: two string fields, `description` and `title`.
//!
//! ```toml
//! title = "Network Engineer I"
//! description = """
//! Audit network connectivity across multiple locations...
//! """
//! ```
//!
//! Files ending in `.json` are read as JSON with the same two fields.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::errors::{OptimizerError, Result};
use crate::job::JobSource;
use crate::models::JobPosting;

pub struct JobFileSource {
    path: PathBuf,
}

impl JobFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl JobSource for JobFileSource {
    async fn fetch(&mut self) -> Result<Option<JobPosting>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                println!(
                    "📖 {} not found, using interactive mode",
                    self.path.display()
                );
                return Ok(None);
            }
            Err(e) => return Err(job_file_error(&self.path, e)),
        };

        let posting = parse_job_file(&self.path, &raw)?;
        if posting.description.is_empty() {
            println!(
                "📖 {} has no job description, using interactive mode",
                self.path.display()
            );
            return Ok(None);
        }

        println!("📖 Read job description from {}", self.path.display());
        println!("🎯 Job Title: {}", posting.title);
        println!(
            "📝 Description length: {} characters",
            posting.description.chars().count()
        );
        Ok(Some(posting))
    }
}

/// Parses by extension: `.json` as JSON, anything else as TOML.
/// Both fields are trimmed; either may be absent.
pub fn parse_job_file(path: &Path, raw: &str) -> Result<JobPosting> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    debug!(path = %path.display(), is_json, "parsing job file");

    let parsed: JobPosting = if is_json {
        serde_json::from_str(raw).map_err(|e| job_file_error(path, e))?
    } else {
        toml::from_str(raw).map_err(|e| job_file_error(path, e))?
    };

    Ok(JobPosting::new(
        parsed.description.trim(),
        parsed.title.trim(),
    ))
}

fn job_file_error(path: &Path, reason: impl std::fmt::Display) -> OptimizerError {
    OptimizerError::JobFile {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
