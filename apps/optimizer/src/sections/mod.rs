// Template fragments on disk: heading, education, skills, experience, projects.

pub mod loader;

pub use loader::load_sections;
