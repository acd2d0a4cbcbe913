pub mod analysis;
pub mod control;

pub use analysis::AnalysisService;
pub use control::CardControlService;
