//! Default implementation of the [`StatisticalPrimitives`] seam.
//!
//! `NativePrimitives` wires the trait to the in-crate estimators: the
//! OLS-based unit-root and KPSS tests, the `arima`-crate-backed ARIMA
//! fitter, and the Durbin-Levinson PACF estimator. It is a zero-sized
//! stateless value, so the decision procedures stay pure and reentrant
//! regardless of how many of them share one backend instance.

use crate::primitives::arima_fit::fit_with_constant;
use crate::primitives::errors::PrimitiveResult;
use crate::primitives::kpss_test::kpss_test;
use crate::primitives::pacf::pacf;
use crate::primitives::traits::{
    ArimaFit, ArimaOrder, KpssOutcome, Regression, StatisticalPrimitives, UnitRootOutcome,
};
use crate::primitives::unit_root::adf_test;

/// The crate's default statistical backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePrimitives;

impl StatisticalPrimitives for NativePrimitives {
    fn unit_root_test(
        &self, series: &[f64], regression: Regression,
    ) -> PrimitiveResult<UnitRootOutcome> {
        adf_test(series, regression)
    }

    fn kpss_test(&self, series: &[f64], regression: Regression) -> PrimitiveResult<KpssOutcome> {
        kpss_test(series, regression)
    }

    fn fit_arima(&self, series: &[f64], order: ArimaOrder) -> PrimitiveResult<ArimaFit> {
        fit_with_constant(series, order)
    }

    fn pacf(&self, series: &[f64], max_lag: Option<usize>) -> PrimitiveResult<Vec<f64>> {
        pacf(series, max_lag)
    }
}
