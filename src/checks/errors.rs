//! checks::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the four
//! stationarity decision procedures, together with a conversion layer to
//! Python exceptions for PyO3-based bindings. This keeps input
//! validation failures, primitive-layer failures, and the model-search
//! exhaustion case in one taxonomy with a clean surface for both Rust
//! and Python callers.
//!
//! Key behaviors
//! -------------
//! - Define [`CheckResult`] and [`CheckError`] as the canonical result
//!   and error types for the decision procedures and their validation
//!   helpers.
//! - Wrap [`PrimitiveError`] values so primitive-layer failures travel
//!   through the decision layer unchanged, via `From` and `?`.
//! - Attach human-readable `Display` messages to each variant so that
//!   diagnostics are meaningful without additional context.
//! - Implement `From<CheckError> for PyErr` (behind `python-bindings`)
//!   to surface failures as `ValueError` in Python.
//!
//! Invariants & assumptions
//! ------------------------
//! - A decision procedure that returns `Err` has produced *no* verdict;
//!   errors are never converted into a classification downstream.
//! - `CheckError` values are small and cloneable so they can be used
//!   comfortably in unit tests and higher-level orchestration code.
//!
//! Conventions
//! -----------
//! - Validation failures detected before any statistics run
//!   (`InvalidData`, `InvalidSignificance`) carry the offending value.
//! - Failures of the statistical layer arrive wrapped in
//!   [`CheckError::Primitive`]; the decision layer adds no retry and no
//!   default.
//! - [`CheckError::NoViableModel`] is specific to the model-order
//!   search: every candidate order failed to fit.
//!
//! Testing notes
//! -------------
//! - Unit tests verify `Display` payload embedding and the `From`
//!   wrapping of primitive errors.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::primitives::errors::PrimitiveError;

pub type CheckResult<T> = Result<T, CheckError>;

/// CheckError — error conditions for the stationarity decision procedures.
///
/// Purpose
/// -------
/// Represent every failure a decision procedure can surface: malformed
/// inputs, failed primitive computations, and an exhausted model-order
/// search.
///
/// Variants
/// --------
/// - `InvalidData(value: f64)`
///   An observation is non-finite (NaN or ±∞) and cannot enter any of
///   the statistical computations.
/// - `InvalidSignificance(level: f64)`
///   The significance level lies outside the open interval (0, 1).
/// - `UnknownMethod(name: String)`
///   A method name passed to `CheckMethod::from_str` matched none of
///   the four procedures.
/// - `Primitive(PrimitiveError)`
///   A statistical primitive (unit-root test, KPSS test, ARIMA fitter,
///   PACF estimator) failed; carries the cause.
/// - `NoViableModel`
///   Every candidate order in the model search failed to fit, so there
///   is no minimum to select.
///
/// Invariants
/// ----------
/// - Each variant carries just enough information (offending value or
///   wrapped cause) for downstream logging and debugging.
/// - `NoViableModel` is only produced by the model-order search.
///
/// Notes
/// -----
/// - This enum implements [`std::error::Error`] and [`std::fmt::Display`]
///   so it composes with idiomatic `?`-based propagation.
/// - A `From<PrimitiveError>` implementation lets primitive failures
///   propagate through the decision layer with `?` and no rewrapping at
///   call sites.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckError {
    //------ Input validation errors ------
    InvalidData(f64),
    InvalidSignificance(f64),
    UnknownMethod(String),

    //------ Computation errors ------
    Primitive(PrimitiveError),
    NoViableModel,
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Primitive(cause) => Some(cause),
            _ => None,
        }
    }
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckError::InvalidData(value) => {
                write!(f, "Invalid data value: {value}. Must be a finite number.")
            }
            CheckError::InvalidSignificance(level) => {
                write!(f, "Invalid significance level: {level}. Must lie strictly between 0 and 1.")
            }
            CheckError::UnknownMethod(name) => {
                write!(
                    f,
                    "Unknown check method: {name:?}. Valid options are 'adf', 'kpss', 'model_search', or 'pacf'."
                )
            }
            CheckError::Primitive(cause) => {
                write!(f, "Statistical primitive failed: {cause}")
            }
            CheckError::NoViableModel => {
                write!(f, "No candidate order in the search grid produced a usable model fit.")
            }
        }
    }
}

impl From<PrimitiveError> for CheckError {
    fn from(err: PrimitiveError) -> Self {
        CheckError::Primitive(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<CheckError> for PyErr {
    fn from(err: CheckError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
