// ============================================================================
// Domain Models Module
// Session settings, menu modes and calculation results
// ============================================================================

pub mod config;
pub mod mode;
pub mod report;

pub use config::SessionConfig;
pub use mode::Mode;
pub use report::{PipelineReport, StageValue, INLINE_STAGES};
