//! checks::verdict — the shared result vocabulary and method dispatch.
//!
//! Purpose
//! -------
//! Define [`Verdict`], the three-way classification every decision
//! procedure maps onto, and [`CheckMethod`], a caller-selectable tag
//! that dispatches to one of the four procedures. The procedures share
//! no code path; what they share is this vocabulary.
//!
//! Key behaviors
//! -------------
//! - [`Verdict`] distinguishes stationary-without-trend,
//!   stationary-with-trend, and non-stationary outcomes, with stable
//!   snake_case labels for FFI surfaces.
//! - [`CheckMethod`] names each procedure, parses from a string
//!   (case-insensitive), and forwards `decide`/`decide_with` calls to
//!   the corresponding free function. The *caller* selects the method;
//!   nothing here chooses among procedures automatically.
//!
//! Conventions
//! -----------
//! - A verdict is only ever produced by a successful computation;
//!   failures travel as [`CheckError`](crate::checks::errors::CheckError)
//!   and are never folded into a `Verdict` variant.

use std::str::FromStr;

use crate::checks::errors::{CheckError, CheckResult};
use crate::checks::{adf, kpss, model_search, pacf};
use crate::primitives::traits::StatisticalPrimitives;
use crate::primitives::NativePrimitives;

/// Verdict — three-way stationarity classification.
///
/// Variants
/// --------
/// - `StationaryNoTrend`: the series is stationary around a constant
///   level.
/// - `StationaryWithTrend`: the series is stationary around a
///   deterministic linear trend.
/// - `NonStationary`: neither form of stationarity is supported.
///
/// Notes
/// -----
/// - Exactly one verdict is produced per successful procedure call; no
///   partial or multi-label results exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    StationaryNoTrend,
    StationaryWithTrend,
    NonStationary,
}

impl Verdict {
    /// Whether the verdict asserts stationarity in either form.
    pub fn is_stationary(&self) -> bool {
        matches!(self, Verdict::StationaryNoTrend | Verdict::StationaryWithTrend)
    }

    /// Stable snake_case label, used by the Python bindings.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::StationaryNoTrend => "stationary_no_trend",
            Verdict::StationaryWithTrend => "stationary_with_trend",
            Verdict::NonStationary => "non_stationary",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Verdict::StationaryNoTrend => "stationary without trend",
            Verdict::StationaryWithTrend => "stationary with trend",
            Verdict::NonStationary => "non-stationary",
        };
        write!(f, "{text}")
    }
}

/// CheckMethod — caller-selectable tag for the four decision procedures.
///
/// Variants
/// --------
/// - `Adf`: augmented Dickey-Fuller procedure
///   ([`decide_adf`](crate::checks::adf::decide_adf)).
/// - `Kpss`: KPSS procedure
///   ([`decide_kpss`](crate::checks::kpss::decide_kpss)).
/// - `ModelSearch`: ARIMA order-grid search
///   ([`decide_by_model_search`](crate::checks::model_search::decide_by_model_search)).
/// - `Pacf`: partial-autocorrelation procedure
///   ([`decide_by_pacf`](crate::checks::pacf::decide_by_pacf)).
///
/// Parsing
/// -------
/// Implements `FromStr` accepting case-insensitive names (`"adf"`,
/// `"kpss"`, `"model_search"`, `"pacf"`). Unknown names return
/// `CheckError::UnknownMethod`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckMethod {
    Adf,
    Kpss,
    ModelSearch,
    Pacf,
}

impl CheckMethod {
    /// Run the selected procedure with the default statistical backend.
    pub fn decide(&self, series: &[f64], significance: f64) -> CheckResult<Verdict> {
        self.decide_with(&NativePrimitives, series, significance)
    }

    /// Run the selected procedure against an explicit backend.
    pub fn decide_with<P: StatisticalPrimitives>(
        &self, primitives: &P, series: &[f64], significance: f64,
    ) -> CheckResult<Verdict> {
        match self {
            CheckMethod::Adf => adf::decide_adf_with(primitives, series, significance),
            CheckMethod::Kpss => kpss::decide_kpss_with(primitives, series, significance),
            CheckMethod::ModelSearch => {
                model_search::decide_by_model_search_with(primitives, series, significance)
            }
            CheckMethod::Pacf => pacf::decide_by_pacf_with(primitives, series, significance),
        }
    }
}

impl FromStr for CheckMethod {
    type Err = CheckError;

    /// Parse a method choice from a string (case-insensitive).
    ///
    /// Accepts `"adf"`, `"kpss"`, `"model_search"`, `"pacf"` and any
    /// case variant. Any other value returns
    /// `CheckError::UnknownMethod` with the offending name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "adf" => Ok(CheckMethod::Adf),
            "kpss" => Ok(CheckMethod::Kpss),
            "model_search" => Ok(CheckMethod::ModelSearch),
            "pacf" => Ok(CheckMethod::Pacf),
            _ => Err(CheckError::UnknownMethod(s.to_string())),
        }
    }
}
