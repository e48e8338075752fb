// ============================================================================
// Rounding
// Decimal rounding and fixed-point display of percentages
// ============================================================================

use std::fmt;

/// Round `value` to `decimals` places after the decimal point.
///
/// The value is scaled by 10^decimals, rounded half away from zero and scaled
/// back. Negative zero is folded into positive zero.
///
/// # Example
/// ```
/// use bypass_calculator::numeric::round_to;
///
/// assert_eq!(round_to(33.33333, 3), 33.333);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// ```
#[inline]
pub fn round_to(value: f64, decimals: u8) -> f64 {
    let scale = 10f64.powi(i32::from(decimals));
    (value * scale).round() / scale + 0.0
}

/// A bypass percentage already rounded to the session precision.
///
/// Displays in fixed-point notation with exactly `decimals` digits after the
/// point and no `%` sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentage {
    value: f64,
    decimals: u8,
}

impl Percentage {
    /// Round a raw percentage to `decimals` places.
    #[inline]
    pub fn rounded(raw: f64, decimals: u8) -> Self {
        Self {
            value: round_to(raw, decimals),
            decimals,
        }
    }

    /// `part / whole * 100`, rounded. Callers guarantee `whole > 0`.
    #[inline]
    pub fn from_ratio(part: f64, whole: f64, decimals: u8) -> Self {
        Self::rounded(part / whole * 100.0, decimals)
    }

    /// The rounded value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    #[inline]
    pub const fn decimals(self) -> u8 {
        self.decimals
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", usize::from(self.decimals), self.value)
    }
}
