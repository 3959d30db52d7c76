//! Document Assembler: joins preamble and sections, derives the filename, writes the file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::{OptimizerError, Result};
use crate::models::{JobCategory, JobPosting};
use crate::render::preamble::DOCUMENT_END;

const FILENAME_SUFFIX: &str = "_Resume.tex";

/// Parts of a document in output order, before joining.
pub struct DocumentParts<'a> {
    pub preamble: &'a str,
    pub heading: &'a str,
    pub education: &'a str,
    pub skills: &'a str,
    pub experience: &'a str,
    pub projects: &'a str,
}

/// Joins every part with a blank line and closes the document.
pub fn assemble_document(parts: &DocumentParts<'_>) -> String {
    [
        parts.preamble,
        parts.heading,
        parts.education,
        parts.skills,
        parts.experience,
        parts.projects,
        DOCUMENT_END,
    ]
    .join("\n\n")
}

/// Keeps `[A-Za-z0-9 ]`, then turns spaces into underscores.
pub fn sanitize_filename_stem(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// `<Title>_Resume.tex` when a title was supplied, else `<Category_Label>_Resume.tex`.
pub fn output_filename(posting: &JobPosting, category: JobCategory) -> String {
    let stem = if posting.has_title() {
        sanitize_filename_stem(&posting.title)
    } else {
        sanitize_filename_stem(category.label())
    };
    format!("{stem}{FILENAME_SUFFIX}")
}

/// Where a document landed and how large it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenDocument {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Writes `content` to `dir/filename`, creating `dir` if needed.
/// An existing file with the same name is overwritten.
pub fn write_document(dir: &Path, filename: &str, content: &str) -> Result<WrittenDocument> {
    fs::create_dir_all(dir).map_err(|e| OptimizerError::io(dir, e))?;

    let path = dir.join(filename);
    fs::write(&path, content).map_err(|e| OptimizerError::io(&path, e))?;
    let bytes = content.len();
    info!(path = %path.display(), bytes, "resume written");
    Ok(WrittenDocument { path, bytes })
}
