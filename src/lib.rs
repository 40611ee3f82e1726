//! stationarity_checks — stationarity diagnostics for scalar time series.
//!
//! Purpose
//! -------
//! Decide whether a time series is statistically stationary using four
//! independent decision procedures — augmented Dickey-Fuller, KPSS, an
//! ARIMA order-grid search, and a partial-autocorrelation scan — each
//! mapping its underlying statistic onto the shared three-way
//! classification: stationary without trend, stationary with trend, or
//! non-stationary. Serve as the crate root for Rust callers and as the
//! PyO3 bridge that exposes the checkers to Python via the
//! `_stationarity_checks` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`checks` and `primitives`) as the
//!   public crate surface.
//! - Define the `#[pyfunction]` wrappers and the `#[pymodule]`
//!   initializer for the `_stationarity_checks` Python extension when
//!   the `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - All statistical work is implemented in the inner Rust modules;
//!   this file performs only FFI glue, input coercion, and error
//!   mapping.
//! - A failed computation surfaces as an error in Rust and a
//!   `ValueError` in Python; a verdict is never fabricated for a series
//!   the statistics could not handle.
//!
//! Conventions
//! -----------
//! - The decision layer (`checks`) talks to the statistics
//!   (`primitives`) only through the
//!   [`StatisticalPrimitives`](primitives::StatisticalPrimitives)
//!   trait; the default backend is
//!   [`NativePrimitives`](primitives::NativePrimitives).
//! - Python-facing functions return stable snake_case verdict labels
//!   rather than enum objects, keeping the binding surface dependency
//!   free.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and
//!   can ignore the PyO3 items guarded by the `python-bindings`
//!   feature:
//!
//!   ```rust
//!   use stationarity_checks::{decide_kpss, Verdict};
//!
//!   let series: Vec<f64> = (0..80).map(|i| ((i * 31 + 11) % 61) as f64 / 30.0 - 1.0).collect();
//!   let verdict: Verdict = decide_kpss(&series, 0.05)?;
//!   # Ok::<(), stationarity_checks::CheckError>(())
//!   ```
//!
//! - The Python packaging layer imports the `_stationarity_checks`
//!   module defined here and wraps its functions in user-facing APIs.
//!
//! Testing notes
//! -------------
//! - Decision logic is covered by unit tests in the inner modules
//!   against scripted statistical backends; the `tests/` suite runs the
//!   procedures end to end on seeded synthetic series.
//! - Binding smoke tests (construction, invocation, error mapping) are
//!   expected to live at the Python level.

pub mod checks;
pub mod primitives;
pub mod utils;

pub use checks::{
    decide_adf, decide_by_model_search, decide_by_pacf, decide_kpss, CheckError, CheckMethod,
    CheckResult, OrderGrid, Verdict,
};
pub use primitives::{NativePrimitives, Regression, StatisticalPrimitives};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::utils::{contiguous_slice, extract_f64_array};

/// Classify a series with the augmented Dickey-Fuller procedure.
///
/// Returns one of `"stationary_no_trend"`, `"stationary_with_trend"`,
/// or `"non_stationary"`; raises `ValueError` when the computation
/// fails.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(data, significance, /)")]
fn check_adf<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, significance: f64,
) -> PyResult<&'static str> {
    let arr = extract_f64_array(py, data)?;
    let series = contiguous_slice(&arr)?;
    let verdict = checks::decide_adf(series, significance)?;
    Ok(verdict.label())
}

/// Classify a series with the KPSS procedure.
///
/// Returns one of `"stationary_no_trend"`, `"stationary_with_trend"`,
/// or `"non_stationary"`; raises `ValueError` when the computation
/// fails.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(data, significance, /)")]
fn check_kpss<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, significance: f64,
) -> PyResult<&'static str> {
    let arr = extract_f64_array(py, data)?;
    let series = contiguous_slice(&arr)?;
    let verdict = checks::decide_kpss(series, significance)?;
    Ok(verdict.label())
}

/// Classify a series by exhaustive ARIMA order search.
///
/// The significance level is accepted for interface consistency but
/// does not influence the search; see the crate documentation for this
/// documented limitation. Raises `ValueError` when no candidate order
/// fits.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(data, significance, /)")]
fn check_by_model_search<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, significance: f64,
) -> PyResult<&'static str> {
    let arr = extract_f64_array(py, data)?;
    let series = contiguous_slice(&arr)?;
    let verdict = checks::decide_by_model_search(series, significance)?;
    Ok(verdict.label())
}

/// Classify a series with the partial-autocorrelation procedure.
///
/// Returns `"stationary_no_trend"` or `"non_stationary"` (this
/// procedure has no trended variant); raises `ValueError` when the
/// computation fails.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(data, significance, /)")]
fn check_by_pacf<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, significance: f64,
) -> PyResult<&'static str> {
    let arr = extract_f64_array(py, data)?;
    let series = contiguous_slice(&arr)?;
    let verdict = checks::decide_by_pacf(series, significance)?;
    Ok(verdict.label())
}

/// _stationarity_checks — PyO3 module initializer for the Python
/// extension.
///
/// Registers the four checker functions on the module. Invoked
/// automatically by Python when importing the compiled extension; not
/// called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _stationarity_checks<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(check_adf, m)?)?;
    m.add_function(wrap_pyfunction!(check_kpss, m)?)?;
    m.add_function(wrap_pyfunction!(check_by_model_search, m)?)?;
    m.add_function(wrap_pyfunction!(check_by_pacf, m)?)?;
    Ok(())
}
