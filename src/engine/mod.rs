// ============================================================================
// Engine Module
// Calculators for every mode and the interactive session driving them
// ============================================================================

pub mod pipeline;
pub mod single_valve;

mod session;

pub use session::Session;
