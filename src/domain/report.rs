// ============================================================================
// Pipeline Report
// Per-position bypass values for a linear pipeline
// ============================================================================

use crate::numeric::Percentage;
use smallvec::SmallVec;
use std::fmt;

/// Inline capacity for pipeline stages; longer pipelines spill to the heap
pub const INLINE_STAGES: usize = 16;

/// Bypass value at one pipeline position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StageValue {
    /// Share of the remaining stream this position takes
    Percentage(Percentage),
    /// Nothing remains to divide at this position
    Undefined,
}

impl StageValue {
    /// The percentage, if defined
    pub fn percentage(&self) -> Option<Percentage> {
        match self {
            StageValue::Percentage(pct) => Some(*pct),
            StageValue::Undefined => None,
        }
    }
}

impl fmt::Display for StageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageValue::Percentage(pct) => write!(f, "{}", pct),
            StageValue::Undefined => write!(f, "(undefined: remaining total is 0)"),
        }
    }
}

/// Heading printed above the per-position lines of a `stages`-long pipeline
pub fn heading(stages: usize) -> String {
    format!("Bypass values (C1..C{}):", stages)
}

/// Labelled line `  Ci = <value>` for the 0-based `position`
pub fn stage_line(position: usize, stage: &StageValue) -> String {
    format!("  C{} = {}", position + 1, stage)
}

/// Bypass values `C1..Cn` for every position of a pipeline, in order
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    stages: SmallVec<[StageValue; INLINE_STAGES]>,
}

impl PipelineReport {
    pub fn new(stages: SmallVec<[StageValue; INLINE_STAGES]>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[StageValue] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl FromIterator<StageValue> for PipelineReport {
    fn from_iter<I: IntoIterator<Item = StageValue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
