// ============================================================================
// Numeric Module
// Rounding and error types shared by every calculator
// ============================================================================
//
// This module provides:
// - round_to: round-half-away-from-zero at a fixed number of decimals
// - Percentage: a rounded value that prints in fixed-point notation
// - CalcError: domain rejections with their user-facing messages

mod errors;
mod rounding;

pub use errors::{CalcError, CalcResult};
pub use rounding::{round_to, Percentage};
