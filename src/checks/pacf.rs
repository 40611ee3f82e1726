//! checks::pacf — partial-autocorrelation decision procedure.
//!
//! Purpose
//! -------
//! Classify a series by scanning its partial autocorrelation sequence
//! for the highest lag whose coefficient magnitude still exceeds the
//! significance threshold. A series whose only surviving peak is lag 0
//! is taken as stationary; any higher surviving lag as non-stationary.
//!
//! Key behaviors
//! -------------
//! - Obtain PACF coefficients indexed by lag from 0 up to the
//!   estimator's default maximum.
//! - Scan from the highest lag downward with an explicit integer lag
//!   cursor and a separate boolean stop-flag: while the current
//!   coefficient's magnitude is below the threshold and the cursor is
//!   positive, step down; otherwise stop.
//! - The scan terminates at lag 0 unconditionally — the cursor never
//!   runs off the start of the sequence, even when every coefficient
//!   clears the threshold check.
//! - Final cursor at lag 0 → stationary without trend; any positive
//!   final lag → non-stationary.
//!
//! Invariants & assumptions
//! ------------------------
//! - The coefficient sequence is non-empty and starts at lag 0, where
//!   the coefficient is 1 by definition; the procedure still guards the
//!   boundary rather than relying on that value.
//! - The lag cursor and the stop-flag are deliberately two distinct
//!   values of two distinct types; the verdict compares the integer
//!   lag, never the flag.
//! - No trended variant exists — a documented limitation of this
//!   procedure.
//!
//! Testing notes
//! -------------
//! - Unit tests script coefficient sequences to cover the length-1
//!   boundary, the only-lag-0-survives case, a surviving interior lag,
//!   and an all-surviving sequence that must stop at the top lag.

use crate::checks::errors::CheckResult;
use crate::checks::validation::validate_input;
use crate::checks::verdict::Verdict;
use crate::primitives::traits::StatisticalPrimitives;
use crate::primitives::NativePrimitives;

/// Classify `series` with the partial-autocorrelation procedure and the
/// default statistical backend.
///
/// Parameters
/// ----------
/// - `series`: `&[f64]`
///   Input observations; must be finite. The PACF estimator enforces
///   its own minimum length.
/// - `significance`: `f64`
///   Threshold in (0, 1) a coefficient magnitude must reach to count as
///   a surviving peak.
///
/// Returns
/// -------
/// `CheckResult<Verdict>`
///   - `Ok(Verdict::StationaryNoTrend)` when lag 0 is the highest
///     surviving lag.
///   - `Ok(Verdict::NonStationary)` when any higher lag survives.
///   - `Err(CheckError)` for invalid inputs or a failed estimation; no
///     verdict is fabricated on failure.
pub fn decide_by_pacf(series: &[f64], significance: f64) -> CheckResult<Verdict> {
    decide_by_pacf_with(&NativePrimitives, series, significance)
}

/// Classify `series` with the partial-autocorrelation procedure against
/// an explicit backend.
///
/// See [`decide_by_pacf`] for the decision rule.
pub fn decide_by_pacf_with<P: StatisticalPrimitives>(
    primitives: &P, series: &[f64], significance: f64,
) -> CheckResult<Verdict> {
    validate_input(series, significance)?;

    let coefficients = primitives.pacf(series, None)?;
    let peak = highest_surviving_lag(&coefficients, significance);

    if peak == 0 {
        Ok(Verdict::StationaryNoTrend)
    } else {
        Ok(Verdict::NonStationary)
    }
}

/// Find the highest lag whose coefficient magnitude reaches the
/// threshold, scanning downward from the end of the sequence.
///
/// The lag cursor is an integer and the termination condition a
/// separate boolean, so the boundary case is explicit: the scan stops
/// at lag 0 even when no coefficient on the way down reaches the
/// threshold.
fn highest_surviving_lag(coefficients: &[f64], threshold: f64) -> usize {
    let mut lag = coefficients.len().saturating_sub(1);
    let mut found = false;

    while !found {
        if lag > 0 && coefficients[lag].abs() < threshold {
            lag -= 1;
        } else {
            found = true;
        }
    }

    lag
}
