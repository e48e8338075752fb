// ============================================================================
// Calculation Modes
// Menu entries and their numeric selectors
// ============================================================================

use crate::numeric::CalcError;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Leave the calculator
    Exit,
    /// Single valve, bypass and main given as machine counts
    ValveByCount,
    /// Single valve, bypass and main given as flow rates
    ValveByRate,
    /// Linear pipeline where every machine draws the same rate
    PipelineEqualRates,
    /// Linear pipeline with a consumption rate per machine
    PipelineUnequalRates,
}

impl Mode {
    /// Menu order: calculators first, exit last
    pub const MENU: [Mode; 5] = [
        Mode::ValveByCount,
        Mode::ValveByRate,
        Mode::PipelineEqualRates,
        Mode::PipelineUnequalRates,
        Mode::Exit,
    ];

    /// The number the user types to pick this mode
    pub const fn selector(self) -> i64 {
        match self {
            Mode::Exit => 0,
            Mode::ValveByCount => 1,
            Mode::ValveByRate => 2,
            Mode::PipelineEqualRates => 3,
            Mode::PipelineUnequalRates => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Mode::Exit => "Exit",
            Mode::ValveByCount => "Single valve (machine counts)   [Algorithm 1/2 count form]",
            Mode::ValveByRate => "Single valve (flow rates)       [Algorithm 3 general form]",
            Mode::PipelineEqualRates => "Linear pipeline (equal rates)   [Algorithm 1 linear]",
            Mode::PipelineUnequalRates => "Linear pipeline (unequal rates) [Algorithm 3 linear]",
        }
    }
}

impl TryFrom<i64> for Mode {
    type Error = CalcError;

    fn try_from(selector: i64) -> Result<Self, Self::Error> {
        match selector {
            0 => Ok(Mode::Exit),
            1 => Ok(Mode::ValveByCount),
            2 => Ok(Mode::ValveByRate),
            3 => Ok(Mode::PipelineEqualRates),
            4 => Ok(Mode::PipelineUnequalRates),
            other => Err(CalcError::UnknownMode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_round_trip() {
        for mode in Mode::MENU {
            assert_eq!(Mode::try_from(mode.selector()), Ok(mode));
        }
    }

    #[test]
    fn test_unknown_selector() {
        assert_eq!(Mode::try_from(5), Err(CalcError::UnknownMode(5)));
        assert_eq!(Mode::try_from(-1), Err(CalcError::UnknownMode(-1)));
    }

    #[test]
    fn test_menu_ends_with_exit() {
        assert_eq!(Mode::MENU[Mode::MENU.len() - 1], Mode::Exit);
    }
}
