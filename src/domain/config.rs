// ============================================================================
// Session Configuration
// Rounding precision chosen once at startup
// ============================================================================

use crate::numeric::{CalcError, CalcResult};

/// Settings that stay fixed for the whole interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Digits printed after the decimal point for every result
    decimals: u8,
}

impl SessionConfig {
    /// Precision used when the requested one is unusable
    pub const DEFAULT_DECIMALS: u8 = 3;

    /// Largest accepted precision
    pub const MAX_DECIMALS: u8 = 9;

    /// Create a configuration with the default precision
    pub fn new() -> Self {
        Self {
            decimals: Self::DEFAULT_DECIMALS,
        }
    }

    /// Builder method: Set decimal places
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    /// Build from the raw integer the user typed at the precision prompt.
    ///
    /// # Errors
    /// Returns `PrecisionOutOfRange` when `requested` is outside 0..=9.
    pub fn from_requested(requested: i64) -> CalcResult<Self> {
        let out_of_range = CalcError::PrecisionOutOfRange(requested);
        let decimals = u8::try_from(requested).map_err(|_| out_of_range)?;

        let config = Self::new().with_decimals(decimals);
        config.validate().map_err(|_| out_of_range)?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns `PrecisionOutOfRange` when the precision exceeds `MAX_DECIMALS`.
    pub fn validate(&self) -> CalcResult<()> {
        if self.decimals > Self::MAX_DECIMALS {
            return Err(CalcError::PrecisionOutOfRange(i64::from(self.decimals)));
        }
        Ok(())
    }

    #[inline]
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
