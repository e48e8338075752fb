// ============================================================================
// Single Valve Calculators
// Bypass share at one junction, by machine count or by flow rate
// ============================================================================

use crate::numeric::{CalcError, CalcResult, Percentage};

/// Bypass percentage from machine counts on each side of the valve.
///
/// ```text
/// bypass = 1, main = 3
/// pct    = 1 / (1 + 3) * 100 = 25
/// ```
///
/// # Errors
/// - `NegativeCount` if either count is negative
/// - `ZeroTotalMachines` if both counts are zero
pub fn by_count(bypass: i64, main: i64, decimals: u8) -> CalcResult<Percentage> {
    let (Ok(bypass), Ok(main)) = (u64::try_from(bypass), u64::try_from(main)) else {
        return Err(CalcError::NegativeCount);
    };

    // Two non-negative i64 values always fit in a u64 sum
    let total = bypass + main;
    if total == 0 {
        return Err(CalcError::ZeroTotalMachines);
    }

    Ok(Percentage::from_ratio(bypass as f64, total as f64, decimals))
}

/// Bypass percentage from the flow consumed on each side of the valve.
///
/// # Errors
/// - `NegativeRate` if either flow is below zero
/// - `ZeroTotalFlow` if the combined flow is not positive
pub fn by_rate(bypass: f64, main: f64, decimals: u8) -> CalcResult<Percentage> {
    if bypass < 0.0 || main < 0.0 {
        return Err(CalcError::NegativeRate);
    }

    let total = bypass + main;
    if total <= 0.0 {
        return Err(CalcError::ZeroTotalFlow);
    }

    Ok(Percentage::from_ratio(bypass, total, decimals))
}
