pub mod filters;
pub mod loader;

pub use filters::{FilterCriteria, list_check};
pub use loader::CorpusLoader;
