//! Section Loader: reads the five required LaTeX fragments from one directory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::{OptimizerError, Result};
use crate::models::{SectionKind, Sections};

/// Loads every fragment in [`SectionKind::ALL`] from `dir`.
///
/// A missing file does not stop the scan: all absent names are collected and
/// returned together as `MissingSections`. Any other read failure is an `Io` error.
pub fn load_sections(dir: &Path) -> Result<Sections> {
    let mut sections = Sections::default();
    let mut missing = Vec::new();

    for kind in SectionKind::ALL {
        let path = dir.join(kind.file_name());
        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path = %path.display(), bytes = text.len(), "loaded section");
                println!("✅ Loaded {}", kind.file_name());
                sections.set(kind, text.trim().to_string());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "section file missing");
                missing.push(kind.file_name().to_string());
            }
            Err(e) => return Err(OptimizerError::io(path, e)),
        }
    }

    if !missing.is_empty() {
        return Err(OptimizerError::MissingSections {
            dir: dir.to_path_buf(),
            files: missing,
        });
    }

    Ok(sections)
}
