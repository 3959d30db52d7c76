// Resume content generation: skills lookup, rule-based rewriting,
// project selection, and the pipeline that ties them together.
// No network or LLM calls; every transform is table-driven.

pub mod generator;
pub mod projects;
pub mod rewrite;
pub mod skills;

pub use generator::ResumeGenerator;
pub use projects::ProjectMode;
