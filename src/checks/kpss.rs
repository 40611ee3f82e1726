//! checks::kpss — KPSS decision procedure.
//!
//! Purpose
//! -------
//! Classify a series by running the KPSS test under both regression
//! specifications. The structure mirrors the ADF procedure, but the
//! KPSS null hypothesis is stationarity, so the interpretation
//! direction inverts: *higher* p-values support stationarity.
//!
//! Key behaviors
//! -------------
//! - Run the test twice: detrended (constant) and trended
//!   (constant + linear trend).
//! - Prefer the specification with the *higher* p-value; the detrended
//!   one wins ties. The preferred specification alone decides.
//! - Preferred p-value at or above the significance level → stationary,
//!   tagged by which specification won; otherwise non-stationary.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both test runs must succeed; any primitive failure propagates
//!   immediately and no verdict is produced.
//! - Note both inversions relative to the ADF procedure: the preference
//!   comparison (≥ instead of ≤) and the threshold comparison (≥
//!   instead of <).
//!
//! Testing notes
//! -------------
//! - Unit tests drive the branch structure through a scripted backend,
//!   including the tie case and error propagation; real-series behavior
//!   lives in the integration suite.

use crate::checks::errors::CheckResult;
use crate::checks::validation::validate_input;
use crate::checks::verdict::Verdict;
use crate::primitives::traits::{Regression, StatisticalPrimitives};
use crate::primitives::NativePrimitives;

/// Classify `series` with the KPSS procedure and the default statistical
/// backend.
///
/// Parameters
/// ----------
/// - `series`: `&[f64]`
///   Input observations; must be finite. The KPSS test enforces its own
///   minimum length.
/// - `significance`: `f64`
///   Decision threshold in (0, 1). The preferred specification's
///   p-value must be at or above it for a stationary verdict.
///
/// Returns
/// -------
/// `CheckResult<Verdict>`
///   - `Ok(Verdict::StationaryNoTrend)` when the detrended
///     specification is preferred and its p-value is ≥ the threshold.
///   - `Ok(Verdict::StationaryWithTrend)` when the trended
///     specification is preferred and its p-value is ≥ the threshold.
///   - `Ok(Verdict::NonStationary)` otherwise.
///   - `Err(CheckError)` for invalid inputs or a failed test run.
pub fn decide_kpss(series: &[f64], significance: f64) -> CheckResult<Verdict> {
    decide_kpss_with(&NativePrimitives, series, significance)
}

/// Classify `series` with the KPSS procedure against an explicit
/// backend.
///
/// See [`decide_kpss`] for the decision rule.
pub fn decide_kpss_with<P: StatisticalPrimitives>(
    primitives: &P, series: &[f64], significance: f64,
) -> CheckResult<Verdict> {
    validate_input(series, significance)?;

    let detrended = primitives.kpss_test(series, Regression::Constant)?;
    let trended = primitives.kpss_test(series, Regression::ConstantAndTrend)?;

    if detrended.p_value >= trended.p_value {
        // The detrended specification fits at least as well; it decides.
        if detrended.p_value >= significance {
            Ok(Verdict::StationaryNoTrend)
        } else {
            Ok(Verdict::NonStationary)
        }
    } else if trended.p_value >= significance {
        Ok(Verdict::StationaryWithTrend)
    } else {
        Ok(Verdict::NonStationary)
    }
}
