//! Job sources: where the job description and title come from.
//!
//! Sources are tried in order; the first one that yields a posting wins.
//! `JobFileSource` comes first, `InteractiveSource` is the fallback.

pub mod file_source;
pub mod interactive;

use async_trait::async_trait;
use tracing::warn;

use crate::errors::{OptimizerError, Result};
use crate::models::JobPosting;

pub use file_source::JobFileSource;
pub use interactive::InteractiveSource;

/// A place a job posting can be read from.
///
/// `Ok(None)` means "nothing here, try the next source". A `JobFile` error is
/// reported and also moves on; every other error ends the run.
#[async_trait]
pub trait JobSource: Send {
    async fn fetch(&mut self) -> Result<Option<JobPosting>>;
}

/// Returns the first posting any source provides.
pub async fn resolve_posting(sources: &mut [Box<dyn JobSource>]) -> Result<JobPosting> {
    for source in sources.iter_mut() {
        match source.fetch().await {
            Ok(Some(posting)) => return Ok(posting),
            Ok(None) => continue,
            Err(e @ OptimizerError::JobFile { .. }) => {
                warn!(error = %e, "job file unusable, falling back");
                println!("📖 {e}");
            }
            Err(e) => return Err(e),
        }
    }
    Err(OptimizerError::MissingJobDescription)
}
