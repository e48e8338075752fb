// ============================================================================
// Linear Pipeline Calculators
// Bypass values along a chain of machines fed by one stream
// ============================================================================

use crate::domain::{PipelineReport, StageValue, INLINE_STAGES};
use crate::numeric::{CalcError, CalcResult, Percentage};
use smallvec::SmallVec;

/// Check a pipeline machine count and convert it to a length.
///
/// # Errors
/// Returns `EmptyPipeline` when `machines <= 0`.
pub fn machine_count(machines: i64) -> CalcResult<usize> {
    match usize::try_from(machines) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CalcError::EmptyPipeline),
    }
}

/// Check a single consumption rate.
///
/// # Errors
/// Returns `NegativeRate` when `rate < 0.0`.
#[inline]
pub fn check_rate(rate: f64) -> CalcResult<f64> {
    if rate < 0.0 {
        Err(CalcError::NegativeRate)
    } else {
        Ok(rate)
    }
}

/// Bypass values when every machine draws the same rate.
///
/// Position `i` (1-indexed) takes an equal share of what is still undivided:
///
/// ```text
/// n = 4:  C1 = 100/4, C2 = 100/3, C3 = 100/2, C4 = 100/1
/// ```
///
/// Stages are produced lazily, so the count may be arbitrarily large without
/// allocating anything proportional to it.
///
/// # Errors
/// Returns `EmptyPipeline` when `machines <= 0`.
pub fn equal_rates(
    machines: i64,
    decimals: u8,
) -> CalcResult<impl ExactSizeIterator<Item = StageValue>> {
    let n = machine_count(machines)?;

    Ok((0..n).map(move |i| {
        let remaining = (n - i) as f64;
        StageValue::Percentage(Percentage::rounded(100.0 / remaining, decimals))
    }))
}

/// Suffix sums of `rates`: `sums[i] = rates[i..].sum()`, with `sums[n] = 0`.
pub fn suffix_sums(rates: &[f64]) -> SmallVec<[f64; INLINE_STAGES]> {
    let mut sums: SmallVec<[f64; INLINE_STAGES]> = SmallVec::from_elem(0.0, rates.len() + 1);
    for (i, rate) in rates.iter().enumerate().rev() {
        sums[i] = sums[i + 1] + rate;
    }
    sums
}

/// Bypass values for a pipeline with a consumption rate per machine.
///
/// Position `i` takes `rates[i] / sum(rates[i..]) * 100` percent of the stream
/// that reaches it. Positions where nothing remains downstream are
/// `StageValue::Undefined`.
///
/// # Errors
/// - `EmptyPipeline` if `rates` is empty
/// - `NegativeRate` if any rate is below zero
/// - `ZeroPipelineConsumption` if the whole pipeline consumes nothing
pub fn unequal_rates(rates: &[f64], decimals: u8) -> CalcResult<PipelineReport> {
    if rates.is_empty() {
        return Err(CalcError::EmptyPipeline);
    }
    for &rate in rates {
        check_rate(rate)?;
    }

    let sums = suffix_sums(rates);
    if sums[0] <= 0.0 {
        return Err(CalcError::ZeroPipelineConsumption);
    }

    Ok(rates
        .iter()
        .zip(sums.iter())
        .map(|(&rate, &remaining)| {
            if remaining <= 0.0 {
                StageValue::Undefined
            } else {
                StageValue::Percentage(Percentage::from_ratio(rate, remaining, decimals))
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;

    fn rendered(report: &PipelineReport) -> Vec<String> {
        report.stages().iter().map(|s| s.to_string()).collect()
    }

    fn equal_rendered(machines: i64, decimals: u8) -> Vec<String> {
        equal_rates(machines, decimals)
            .unwrap()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_machine_count() {
        assert_eq!(machine_count(4), Ok(4));
        assert_eq!(machine_count(0), Err(CalcError::EmptyPipeline));
        assert_eq!(machine_count(-3), Err(CalcError::EmptyPipeline));
    }

    #[test]
    fn test_check_rate() {
        assert_eq!(check_rate(0.0), Ok(0.0));
        assert_eq!(check_rate(12.5), Ok(12.5));
        assert_eq!(check_rate(-0.5), Err(CalcError::NegativeRate));
    }

    #[test]
    fn test_equal_rates_whole_percentages() {
        assert_eq!(equal_rendered(4, 0), vec!["25", "33", "50", "100"]);
    }

    #[test]
    fn test_equal_rates_single_machine() {
        assert_eq!(equal_rendered(1, 3), vec!["100.000"]);
    }

    #[test]
    fn test_equal_rates_rejects_empty() {
        assert_eq!(equal_rates(0, 3).err(), Some(CalcError::EmptyPipeline));
        assert_eq!(equal_rates(-1, 3).err(), Some(CalcError::EmptyPipeline));
    }

    #[test]
    fn test_equal_rates_long_pipeline() {
        let stages = equal_rendered(40, 2);
        assert_eq!(stages.len(), 40);
        assert_eq!(stages[0], "2.50");
        assert_eq!(stages[39], "100.00");
    }

    #[test]
    fn test_equal_rates_huge_count_is_lazy() {
        let mut stages = equal_rates(i64::MAX, 3).unwrap();
        assert_eq!(stages.len() as u64, i64::MAX as u64);
        assert_eq!(stages.next().map(|s| s.to_string()).as_deref(), Some("0.000"));
        assert_eq!(stages.len() as u64, i64::MAX as u64 - 1);
    }

    #[test]
    fn test_suffix_sums() {
        let sums = suffix_sums(&[1.0, 2.0, 3.0]);
        assert_eq!(sums.as_slice(), &[6.0, 5.0, 3.0, 0.0]);

        let empty = suffix_sums(&[]);
        assert_eq!(empty.as_slice(), &[0.0]);
    }

    #[test]
    fn test_unequal_rates_matches_equal_case() {
        let report = unequal_rates(&[10.0, 10.0, 10.0, 10.0], 3).unwrap();
        assert_eq!(
            rendered(&report),
            vec!["25.000", "33.333", "50.000", "100.000"]
        );
    }

    #[test]
    fn test_unequal_rates_leading_zeros() {
        let report = unequal_rates(&[0.0, 0.0, 5.0], 3).unwrap();
        assert_eq!(rendered(&report), vec!["0.000", "0.000", "100.000"]);
    }

    #[test]
    fn test_unequal_rates_trailing_zeros_undefined() {
        let report = unequal_rates(&[5.0, 0.0, 0.0], 3).unwrap();
        assert_eq!(report.stages()[0].to_string(), "100.000");
        assert_eq!(report.stages()[1], StageValue::Undefined);
        assert_eq!(report.stages()[2], StageValue::Undefined);
        assert_eq!(
            report.stages()[1].to_string(),
            "(undefined: remaining total is 0)"
        );
    }

    #[test]
    fn test_unequal_rates_rejects_zero_total() {
        assert_eq!(
            unequal_rates(&[0.0, 0.0], 3),
            Err(CalcError::ZeroPipelineConsumption)
        );
    }

    #[test]
    fn test_unequal_rates_rejects_bad_input() {
        assert_eq!(unequal_rates(&[], 3), Err(CalcError::EmptyPipeline));
        assert_eq!(
            unequal_rates(&[1.0, -1.0], 3),
            Err(CalcError::NegativeRate)
        );
    }

    #[test]
    fn test_unequal_rates_stream_is_conserved() {
        // Taking Ci percent of what reaches position i hands each machine its rate
        let rates = [4.0, 1.0, 3.0, 2.0];
        let report = unequal_rates(&rates, 9).unwrap();

        let mut stream: f64 = rates.iter().sum();
        for (rate, stage) in rates.iter().zip(report.stages()) {
            let pct = stage.percentage().unwrap().value();
            let taken = stream * pct / 100.0;
            assert!((taken - rate).abs() < 1e-6);
            stream -= taken;
        }
        assert!(stream.abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_equal_rates_formula(n in 1i64..200) {
            let stages: Vec<StageValue> = equal_rates(n, 9).unwrap().collect();
            prop_assert_eq!(stages.len(), n as usize);
            for (i, stage) in stages.iter().enumerate() {
                let expected = Percentage::rounded(100.0 / (n as f64 - i as f64), 9);
                prop_assert_eq!(*stage, StageValue::Percentage(expected));
            }
            let last = stages[n as usize - 1].percentage().unwrap();
            prop_assert_eq!(last.value(), 100.0);
        }
    }

    quickcheck! {
        fn qc_last_consumer_takes_everything(raw: Vec<u16>) -> bool {
            let rates: Vec<f64> = raw.iter().map(|&r| f64::from(r)).collect();
            match unequal_rates(&rates, 3) {
                Ok(report) => {
                    // The last machine with a non-zero rate always takes the full remainder
                    let last = rates.iter().rposition(|&r| r > 0.0).unwrap();
                    report.stages()[last].to_string() == "100.000"
                        && report.stages()[last + 1..]
                            .iter()
                            .all(|s| *s == StageValue::Undefined)
                }
                Err(CalcError::EmptyPipeline) => rates.is_empty(),
                Err(CalcError::ZeroPipelineConsumption) => rates.iter().all(|&r| r == 0.0),
                Err(_) => false,
            }
        }
    }
}
