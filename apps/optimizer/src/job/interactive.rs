//! Interactive job input on the console.
//!
//! The description is read line by line until two consecutive empty lines or
//! end of input. Ctrl-C while waiting aborts with `Cancelled`.

use std::future::Future;
use std::io::Write;
use std::pin::Pin;

use async_trait::async_trait;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tracing::debug;

use crate::errors::{OptimizerError, Result};
use crate::job::JobSource;
use crate::models::JobPosting;

/// Consecutive empty lines that end the description.
const END_SENTINEL_BLANKS: usize = 2;

/// Resolves when the user asks to stop waiting for input.
type CancelSignal = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Ctrl-C. If the handler cannot be installed the signal never fires.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        debug!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
}

pub struct InteractiveSource<R> {
    reader: R,
    ask_title: bool,
    cancel: CancelSignal,
}

impl InteractiveSource<BufReader<Stdin>> {
    /// Reads from standard input. `ask_title` controls the optional title prompt.
    pub fn stdin(ask_title: bool) -> Self {
        Self::new(BufReader::new(io::stdin()), ask_title, ctrl_c())
    }
}

impl<R> InteractiveSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    /// Reading stops with `Cancelled` as soon as `cancel` resolves.
    pub fn new(
        reader: R,
        ask_title: bool,
        cancel: impl Future<Output = ()> + Send + 'static,
    ) -> Self {
        Self {
            reader,
            ask_title,
            cancel: Box::pin(cancel),
        }
    }
}

/// Reads one line without its terminator. `None` at end of input.
async fn next_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Collects lines up to the double-blank sentinel. Blank lines inside the
/// text are kept; the joined result is trimmed.
async fn read_description<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<String> {
    let mut lines = Vec::new();
    let mut blank_run = 0;

    while let Some(line) = next_line(reader).await? {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run >= END_SENTINEL_BLANKS {
                break;
            }
        } else {
            blank_run = 0;
        }
        lines.push(line);
    }

    debug!(lines = lines.len(), "interactive description read");
    Ok(lines.join("\n").trim().to_string())
}

async fn read_title<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<String> {
    Ok(next_line(reader)
        .await?
        .map(|line| line.trim().to_string())
        .unwrap_or_default())
}

#[async_trait]
impl<R> JobSource for InteractiveSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn fetch(&mut self) -> Result<Option<JobPosting>> {
        println!("\n📋 Instructions:");
        println!("1. Paste your job description below");
        println!("2. Press Enter twice to finish");
        println!("3. Get your optimized resume!");
        println!("\n{}", "-".repeat(50));
        println!("PASTE JOB DESCRIPTION:");

        let description = tokio::select! {
            read = read_description(&mut self.reader) => read?,
            _ = self.cancel.as_mut() => return Err(OptimizerError::Cancelled),
        };
        if description.is_empty() {
            return Err(OptimizerError::MissingJobDescription);
        }

        let title = if self.ask_title {
            print!("\nJob title (optional): ");
            std::io::stdout().flush()?;
            tokio::select! {
                read = read_title(&mut self.reader) => read?,
                _ = self.cancel.as_mut() => return Err(OptimizerError::Cancelled),
            }
        } else {
            String::new()
        };

        Ok(Some(JobPosting::new(description, title)))
    }
}
