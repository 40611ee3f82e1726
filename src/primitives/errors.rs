//! Unified error handling for the statistical primitive layer.
//!
//! This module defines `PrimitiveError`, the error type shared by the
//! unit-root test, the KPSS test, the ARIMA fitter, and the PACF
//! estimator. It groups data-shape failures (too few observations)
//! with numerical degeneracies (singular designs, zero variances) and
//! passthrough failures from the external model fitter. An alias
//! `PrimitiveResult<T>` standardizes the return type across primitive
//! code.

/// Unified error type for statistical primitive routines.
///
/// Covers series that are too short for a given estimator, degenerate
/// regression designs, non-positive variance estimates, and fit
/// failures reported by the external ARIMA estimation routines.
/// Designed to provide readable diagnostics through `Display` and to be
/// wrapped by the decision layer's error type via `From`.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveError {
    // ---- Data shape ----
    /// The series has fewer observations than the estimator requires.
    TooFewObservations {
        n: usize,
        needed: usize,
    },

    // ---- Numerical degeneracies ----
    /// The OLS normal equations could not be solved.
    SingularDesign,

    /// A variance estimate was zero or negative where a strictly
    /// positive value is required.
    DegenerateVariance,

    // ---- External fitter ----
    /// The ARIMA estimation routine reported a failure for the
    /// requested order.
    FitFailed {
        message: String,
    },
}

pub type PrimitiveResult<T> = Result<T, PrimitiveError>;

impl std::error::Error for PrimitiveError {}

impl std::fmt::Display for PrimitiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Data shape ----
            PrimitiveError::TooFewObservations { n, needed } => {
                write!(f, "Primitive Error: series has {} observations but at least {} are required", n, needed)
            }

            // ---- Numerical degeneracies ----
            PrimitiveError::SingularDesign => {
                write!(f, "Primitive Error: regression design matrix is singular")
            }
            PrimitiveError::DegenerateVariance => {
                write!(f, "Primitive Error: variance estimate is not strictly positive")
            }

            // ---- External fitter ----
            PrimitiveError::FitFailed { message } => {
                write!(f, "Primitive Error: model fit failed ({})", message)
            }
        }
    }
}
