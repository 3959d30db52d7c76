mod analysis;
mod cli;
mod config;
mod errors;
mod generation;
mod job;
mod layout;
mod models;
mod render;
mod sections;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::errors::{OptimizerError, Result};
use crate::generation::ResumeGenerator;
use crate::job::{resolve_posting, InteractiveSource, JobFileSource, JobSource};
use crate::models::JobCategory;
use crate::render::WrittenDocument;

/// What a successful run produced, for the closing summary.
struct RunReport {
    written: WrittenDocument,
    filename: String,
    category: JobCategory,
    keyword_count: usize,
}

fn main() -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("❌ Error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let code = runtime.block_on(run_cli());
    // A cancelled prompt leaves tokio's stdin reader blocked in read(2) on a
    // blocking-pool thread; shutting down must not wait for it.
    runtime.shutdown_background();
    code
}

async fn run_cli() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config.with_cli(&cli),
        Err(e) => {
            eprintln!("❌ Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // RUST_LOG, when set, takes precedence over --verbose.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume optimizer v{}", env!("CARGO_PKG_VERSION"));

    println!("🎯 ATS Resume Optimizer");
    println!("{}", "=".repeat(50));

    match run(&config, cli.title.as_deref()).await {
        Ok(report) => {
            print_summary(&report);
            ExitCode::SUCCESS
        }
        Err(OptimizerError::Cancelled) => {
            println!("\n\nExiting...");
            ExitCode::from(OptimizerError::Cancelled.exit_code())
        }
        Err(e) => {
            error!(error = %e, "run failed");
            println!("❌ Error: {e}");
            if matches!(e, OptimizerError::MissingSections { .. }) {
                println!("Please ensure all LaTeX files are in the sections directory");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

/// Load sections → resolve the job → generate → write. The file is written last.
async fn run(config: &Config, title_override: Option<&str>) -> Result<RunReport> {
    let sections = sections::load_sections(&config.sections_dir)?;

    let mut sources: Vec<Box<dyn JobSource>> = vec![
        Box::new(JobFileSource::new(config.job_file.clone())),
        Box::new(InteractiveSource::stdin(title_override.is_none())),
    ];
    let mut posting = resolve_posting(&mut sources).await?;
    if let Some(title) = title_override {
        posting.title = title.trim().to_string();
    }

    let generator = ResumeGenerator::new(sections, config.project_mode)?;

    println!("\n🔍 Analyzing job description...");
    let resume = generator.generate(&posting);
    println!("📊 Found {} keywords", resume.keywords.len());
    println!("🎯 Job type: {}", resume.category.label());

    let written = render::write_document(&config.output_dir, &resume.filename, &resume.content)?;

    Ok(RunReport {
        written,
        filename: resume.filename,
        category: resume.category,
        keyword_count: resume.keywords.len(),
    })
}

fn print_summary(report: &RunReport) {
    println!(
        "\n✅ Generated: {} ({} bytes)",
        report.written.path.display(),
        report.written.bytes
    );
    println!(
        "📄 {} resume with {} matched keywords, ready for Overleaf!",
        report.category.label(),
        report.keyword_count
    );
    println!("\n🎉 SUCCESS!");
    println!("\n📋 Next steps:");
    println!("1. Go to Overleaf.com");
    println!("2. Upload {} or copy its contents", report.filename);
    println!("3. Compile to PDF");
    println!("4. Submit your optimized resume!");
}
