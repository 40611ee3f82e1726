//! checks — stationarity decision procedures and shared infrastructure.
//!
//! Purpose
//! -------
//! Collect the four stationarity decision procedures together with the
//! vocabulary and infrastructure they share. Each procedure is a pure
//! function from (series, significance) to a [`Verdict`]; they share no
//! code path, only the result vocabulary, the validation guards, the
//! error taxonomy, and the statistical seam.
//!
//! Key behaviors
//! -------------
//! - Expose the augmented Dickey-Fuller procedure
//!   ([`decide_adf`](adf::decide_adf)), the KPSS procedure
//!   ([`decide_kpss`](kpss::decide_kpss)), the ARIMA order-search
//!   procedure ([`decide_by_model_search`](model_search::decide_by_model_search)),
//!   and the partial-autocorrelation procedure
//!   ([`decide_by_pacf`](pacf::decide_by_pacf)), each with a `_with`
//!   variant generic over [`StatisticalPrimitives`](crate::primitives::StatisticalPrimitives).
//! - Centralize input guards in [`validate_input`], ensuring data
//!   finiteness and the significance range are checked once, the same
//!   way, at every entry point.
//! - Provide the dedicated error type [`CheckError`] and result alias
//!   [`CheckResult`], plus a conversion layer to Python exceptions when
//!   the `python-bindings` feature is enabled.
//! - Offer [`CheckMethod`] so callers can select a procedure by tag or
//!   by name; selection always rests with the caller.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every procedure returns exactly one verdict per successful call;
//!   a failed statistical computation surfaces as [`CheckError`] and is
//!   never replaced by a guessed classification.
//! - All procedures are deterministic: the same series and significance
//!   always produce the same verdict.
//! - Procedures hold no state and mutate nothing global; concurrent
//!   calls over different series are safe without locking.
//!
//! Conventions
//! -----------
//! - Significance thresholds live in the open interval (0, 1). For the
//!   ADF procedure lower p-values support stationarity; for the KPSS
//!   procedure the direction inverts; the model search validates the
//!   level but does not use it; the PACF procedure compares coefficient
//!   magnitudes against it.
//! - Series-length minimums are enforced by the statistical primitives,
//!   not here, and arrive as
//!   [`CheckError::Primitive`] wrapping the primitive's report.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use stationarity_checks::checks::{decide_adf, Verdict};
//!
//!   let series: Vec<f64> = (0..64).map(|i| ((i * 29 + 7) % 53) as f64 / 26.0 - 1.0).collect();
//!   let verdict: Verdict = decide_adf(&series, 0.05)?;
//!   # Ok::<(), stationarity_checks::checks::CheckError>(())
//!   ```
//!
//! - Callers that need to compare procedures run several
//!   [`CheckMethod`] values over the same series and inspect the
//!   verdicts side by side; nothing selects among procedures
//!   automatically.
//! - The Python bindings expose the same four entry points as module
//!   functions returning verdict labels.
//!
//! Testing notes
//! -------------
//! - Each procedure module drives its branch structure through scripted
//!   [`StatisticalPrimitives`](crate::primitives::StatisticalPrimitives)
//!   implementations, including tie cases, failure propagation and — for
//!   the model search — partial and total fit failure.
//! - The `tests/` integration suite exercises the procedures end to end
//!   on seeded synthetic series with the default backend.

pub mod adf;
pub mod errors;
pub mod kpss;
pub mod model_search;
pub mod pacf;
pub mod validation;
pub mod verdict;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::adf::{decide_adf, decide_adf_with};
pub use self::errors::{CheckError, CheckResult};
pub use self::kpss::{decide_kpss, decide_kpss_with};
pub use self::model_search::{
    decide_by_model_search, decide_by_model_search_on_grid, decide_by_model_search_with,
    OrderGrid,
};
pub use self::pacf::{decide_by_pacf, decide_by_pacf_with};
pub use self::validation::validate_input;
pub use self::verdict::{CheckMethod, Verdict};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use stationarity_checks::checks::prelude::*;
//
// to import the main decision surface in a single line.

pub mod prelude {
    pub use super::errors::{CheckError, CheckResult};
    pub use super::verdict::{CheckMethod, Verdict};
    pub use super::{decide_adf, decide_by_model_search, decide_by_pacf, decide_kpss};
}
