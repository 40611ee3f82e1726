//! checks::validation — shared input guards for the decision procedures.
//!
//! Purpose
//! -------
//! Centralize the input validation every decision procedure performs
//! before invoking any statistical primitive. This avoids duplicating
//! checks on data finiteness and the significance range across the four
//! procedures.
//!
//! Key behaviors
//! -------------
//! - Reject non-finite observations and out-of-range significance
//!   levels before any statistics run.
//! - Map invalid inputs into structured [`CheckError`] values for
//!   consistent error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - All data values must be finite (no NaN, no ±∞).
//! - The significance level must lie strictly between 0 and 1.
//! - Series-length requirements are *not* enforced here: each
//!   statistical primitive knows its own minimum and reports
//!   `TooFewObservations` itself, which the procedures pass through.
//!
//! Conventions
//! -----------
//! - This module is purely about validation; it performs no I/O and no
//!   allocation.
//! - Callers treat a successful return as a guarantee that the data and
//!   threshold are usable by any of the four procedures.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the success path and every error branch of
//!   [`validate_input`].

use crate::checks::errors::{CheckError, CheckResult};

/// Validate basic input constraints for the decision procedures.
///
/// Parameters
/// ----------
/// - `series`: `&[f64]`
///   Input observations. Every value must be finite; length
///   requirements are enforced by the statistical primitives.
/// - `significance`: `f64`
///   Decision threshold. Must satisfy `0.0 < significance < 1.0`.
///
/// Returns
/// -------
/// `CheckResult<()>`
///   - `Ok(())` if all constraints are satisfied.
///   - `Err(CheckError)` identifying the violated constraint and the
///     offending value.
///
/// Errors
/// ------
/// - `CheckError::InvalidData(value)`
///   Returned when any element of `series` is not finite, with `value`
///   set to the offending entry.
/// - `CheckError::InvalidSignificance(level)`
///   Returned when `significance` lies outside the open interval (0, 1).
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `CheckError`.
///
/// Examples
/// --------
/// ```rust
/// # use stationarity_checks::checks::validation::validate_input;
/// # use stationarity_checks::checks::errors::CheckError;
/// let series = vec![0.1_f64, -0.2, 0.3];
///
/// // Valid inputs succeed:
/// assert!(validate_input(&series, 0.05).is_ok());
///
/// // An out-of-range significance level is rejected:
/// match validate_input(&series, 1.0) {
///     Err(CheckError::InvalidSignificance(_)) => (),
///     other => panic!("expected InvalidSignificance, got {other:?}"),
/// }
/// ```
pub fn validate_input(series: &[f64], significance: f64) -> CheckResult<()> {
    for &value in series {
        if !value.is_finite() {
            return Err(CheckError::InvalidData(value));
        }
    }

    if !(significance > 0.0 && significance < 1.0) {
        return Err(CheckError::InvalidSignificance(significance));
    }

    Ok(())
}
