use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(name = "resume-optimizer")]
#[command(version, about = "Tailor a LaTeX resume to a job description")]
pub struct Cli {
    /// Directory holding heading.tex, education.tex, skills.tex, experience.tex and projects.tex
    #[arg(long)]
    pub sections_dir: Option<PathBuf>,

    /// Job file with `description` and `title` fields (TOML, or JSON for *.json)
    #[arg(long)]
    pub job_file: Option<PathBuf>,

    /// Directory the generated .tex file is written to
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Job title; overrides the job file and skips the title prompt
    #[arg(long, short)]
    pub title: Option<String>,

    /// Rewrite every project instead of selecting the three most relevant
    #[arg(long)]
    pub basic: bool,

    /// Debug-level logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}
