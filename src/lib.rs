// ============================================================================
// Valve Bypass Calculator Library
// Bypass percentages for single junctions and linear machine pipelines
// ============================================================================

//! # Bypass Calculator
//!
//! Computes what share of a stream a bypass valve should divert, either at a
//! single junction or at every position of a linear pipeline of machines.
//!
//! ## Features
//!
//! - **Single valve** by machine counts or by flow rates
//! - **Linear pipelines** with equal or per-machine consumption rates
//! - **Session-wide rounding** to 0..=9 decimal places, half away from zero
//! - **Interactive console session** that works over any `BufRead`/`Write` pair
//!
//! ## Example
//!
//! ```rust
//! use bypass_calculator::engine::{pipeline, single_valve};
//!
//! let pct = single_valve::by_count(1, 3, 3).unwrap();
//! assert_eq!(pct.to_string(), "25.000");
//!
//! let stages = pipeline::equal_rates(4, 0).unwrap();
//! let values: Vec<String> = stages.map(|s| s.to_string()).collect();
//! assert_eq!(values, ["25", "33", "50", "100"]);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Mode, PipelineReport, SessionConfig, StageValue};
    pub use crate::engine::{pipeline, single_valve, Session};
    pub use crate::interfaces::{
        Console, EventHandler, LoggingEventHandler, NoOpEventHandler, SessionEvent,
    };
    pub use crate::numeric::{round_to, CalcError, CalcResult, Percentage};
}
