// Job description analysis: lexicon keyword extraction and category classification.
// Deterministic and regex-only; nothing here reads files or the console.

pub mod classifier;
pub mod keywords;

pub use classifier::classify;
pub use keywords::KeywordExtractor;
