pub mod category;
pub mod job;
pub mod section;

pub use category::JobCategory;
pub use job::JobPosting;
pub use section::{SectionKind, Sections};
