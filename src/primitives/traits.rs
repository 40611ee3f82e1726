//! Public seam between the decision procedures and the statistical backend.
//!
//! - [`StatisticalPrimitives`]: trait supplying the four primitive operations
//!   the decision logic reads (unit-root test, KPSS test, ARIMA fitter, PACF
//!   estimator).
//! - [`Regression`]: regression specification shared by the unit-root and
//!   KPSS tests (constant only, or constant and linear trend).
//! - [`UnitRootOutcome`] / [`KpssOutcome`]: test outcomes; the decision layer
//!   reads only their p-values.
//! - [`ArimaOrder`] / [`ArimaFit`]: model order and fit outcome; the decision
//!   layer reads the information criterion and the differencing order.
//!
//! Convention: implementations report failures through
//! [`PrimitiveResult`](crate::primitives::errors::PrimitiveResult) and never
//! fabricate an outcome for a series they could not handle. The decision
//! procedures rely on that contract to keep "no verdict from a failed
//! computation" airtight.

use crate::primitives::errors::PrimitiveResult;

/// Regression specification for the unit-root and KPSS tests.
///
/// Variants:
/// - `Constant`: include an intercept only (the detrended variant).
/// - `ConstantAndTrend`: include an intercept and a linear time trend
///   (the trended variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regression {
    Constant,
    ConstantAndTrend,
}

/// Outcome of an augmented Dickey-Fuller unit-root test.
///
/// - `statistic`: the t-statistic on the lagged level coefficient.
/// - `p_value`: probability of observing a statistic at least this
///   extreme under the unit-root null; lower values support
///   stationarity.
/// - `lags`: number of lagged differences included in the regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitRootOutcome {
    pub statistic: f64,
    pub p_value: f64,
    pub lags: usize,
}

/// Outcome of a KPSS stationarity test.
///
/// - `statistic`: the KPSS level/trend statistic η.
/// - `p_value`: interpolated p-value under the stationarity null;
///   *higher* values support stationarity (the null direction is the
///   reverse of the unit-root test).
/// - `lags`: bandwidth used for the long-run variance estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpssOutcome {
    pub statistic: f64,
    pub p_value: f64,
    pub lags: usize,
}

/// ARIMA model order (p, d, q).
///
/// - `p`: autoregressive order.
/// - `d`: differencing order.
/// - `q`: moving-average order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArimaOrder {
    pub p: usize,
    pub d: usize,
    pub q: usize,
}

impl ArimaOrder {
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }
}

impl std::fmt::Display for ArimaOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.p, self.d, self.q)
    }
}

/// Outcome of fitting one ARIMA specification.
///
/// - `order`: the (p, d, q) order that was fit.
/// - `aic`: Akaike information criterion of the fitted model; finite
///   whenever the fit succeeds.
/// - `coefficients`: estimated coefficients laid out as
///   `[intercept, ar…, ma…]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArimaFit {
    pub order: ArimaOrder,
    pub aic: f64,
    pub coefficients: Vec<f64>,
}

/// Statistical operations the decision procedures are built on.
///
/// Implementations must be stateless with respect to calls: invoking any
/// method must not affect the result of a later invocation, so that the
/// decision procedures stay pure and reentrant.
///
/// Required:
/// - `unit_root_test(&[f64], Regression) -> PrimitiveResult<UnitRootOutcome>`:
///   augmented Dickey-Fuller test under the given regression specification.
/// - `kpss_test(&[f64], Regression) -> PrimitiveResult<KpssOutcome>`:
///   KPSS stationarity test under the given regression specification.
/// - `fit_arima(&[f64], ArimaOrder) -> PrimitiveResult<ArimaFit>`:
///   fit an ARIMA model with a constant term, or fail explicitly when the
///   order is infeasible for the data.
/// - `pacf(&[f64], Option<usize>) -> PrimitiveResult<Vec<f64>>`:
///   partial autocorrelation coefficients indexed by lag, starting at lag 0
///   (where the coefficient is 1 by definition) up to `max_lag`, or up to
///   the implementation's default maximum when `None`.
pub trait StatisticalPrimitives {
    fn unit_root_test(
        &self, series: &[f64], regression: Regression,
    ) -> PrimitiveResult<UnitRootOutcome>;

    fn kpss_test(&self, series: &[f64], regression: Regression) -> PrimitiveResult<KpssOutcome>;

    fn fit_arima(&self, series: &[f64], order: ArimaOrder) -> PrimitiveResult<ArimaFit>;

    fn pacf(&self, series: &[f64], max_lag: Option<usize>) -> PrimitiveResult<Vec<f64>>;
}
