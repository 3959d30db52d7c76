use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::generation::ProjectMode;

/// Run configuration: environment (and `.env`) first, CLI flags on top.
#[derive(Debug, Clone)]
pub struct Config {
    pub sections_dir: PathBuf,
    pub job_file: PathBuf,
    pub output_dir: PathBuf,
    pub project_mode: ProjectMode,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable lookup. Unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let basic = match lookup("RESUME_BASIC_MODE") {
            Some(value) => value
                .trim()
                .parse::<bool>()
                .with_context(|| format!("RESUME_BASIC_MODE must be true or false, got '{value}'"))?,
            None => false,
        };

        Ok(Config {
            sections_dir: PathBuf::from(var_or("RESUME_SECTIONS_DIR", "src")),
            job_file: PathBuf::from(var_or("RESUME_JOB_FILE", "job.toml")),
            output_dir: PathBuf::from(var_or("RESUME_OUTPUT_DIR", ".")),
            project_mode: if basic {
                ProjectMode::PassThrough
            } else {
                ProjectMode::Select
            },
            rust_log: var_or("RUST_LOG", "info"),
        })
    }

    /// Applies CLI overrides. Flags that were not given leave the value alone.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.sections_dir {
            self.sections_dir = dir.clone();
        }
        if let Some(path) = &cli.job_file {
            self.job_file = path.clone();
        }
        if let Some(dir) = &cli.output_dir {
            self.output_dir = dir.clone();
        }
        if cli.basic {
            self.project_mode = ProjectMode::PassThrough;
        }
        if cli.verbose {
            self.rust_log = "debug".to_string();
        }
        self
    }
}
