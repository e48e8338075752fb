// ============================================================================
// Calculation Errors
// Domain rejections raised by the bypass calculators
// ============================================================================

use std::fmt;

/// Errors raised when calculator input is well-formed but outside the domain.
///
/// The `Display` text of each variant is the message shown to the user at the
/// console, so it is written as a full sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalcError {
    /// A machine count was below zero
    NegativeCount,
    /// Bypass and main machine counts add up to zero
    ZeroTotalMachines,
    /// A flow or consumption rate was below zero
    NegativeRate,
    /// Bypass and main flow add up to zero (or less)
    ZeroTotalFlow,
    /// Pipeline machine count was zero or negative
    EmptyPipeline,
    /// Every machine in the pipeline consumes nothing
    ZeroPipelineConsumption,
    /// Requested decimal places outside 0..=9
    PrecisionOutOfRange(i64),
    /// Menu selection that names no mode
    UnknownMode(i64),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::NegativeCount => write!(f, "Counts must be non-negative."),
            CalcError::ZeroTotalMachines => write!(f, "Total machines cannot be 0."),
            CalcError::NegativeRate => write!(f, "Rates must be non-negative."),
            CalcError::ZeroTotalFlow => write!(f, "Total flow cannot be 0."),
            CalcError::EmptyPipeline => write!(f, "Machine count must be > 0."),
            CalcError::ZeroPipelineConsumption => write!(
                f,
                "Total consumption is 0. Cannot compute percentages."
            ),
            CalcError::PrecisionOutOfRange(_) => {
                write!(f, "Keeping default (3). Valid range is 0..9.")
            },
            CalcError::UnknownMode(_) => write!(f, "Please select a correct mode."),
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
