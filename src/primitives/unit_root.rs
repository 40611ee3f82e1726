//! Augmented Dickey-Fuller unit-root test.
//!
//! This module provides:
//! - `adf_test`, the unit-root test behind the default backend, for both
//!   regression specifications (constant, constant + linear trend).
//! - Data-driven lag selection by AIC over the Schwert upper bound
//!   `⌊12·(n/100)^{1/4}⌋`.
//! - An approximate p-value built from MacKinnon (2010) finite-sample
//!   critical-value response surfaces, with interpolation between the
//!   tabulated significance levels and normal-CDF tails beyond them.
//!
//! Conventions:
//! - The regression is `Δy_t = α + β·y_{t−1} [+ δ·t] + Σ γ_i·Δy_{t−i} + ε_t`;
//!   the reported statistic is the t-statistic on `β`.
//! - Lower p-values support stationarity (the null hypothesis is a unit
//!   root).

use nalgebra::{DMatrix, DVector};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::primitives::errors::{PrimitiveError, PrimitiveResult};
use crate::primitives::regression::{coefficient_t_stat, ols};
use crate::primitives::traits::{Regression, UnitRootOutcome};

/// Fewest observations for which the response-surface p-value is usable.
pub(crate) const MIN_ADF_OBSERVATIONS: usize = 20;

/// MacKinnon (2010) response-surface coefficients for the 1%, 5% and 10%
/// critical values, as `[level, 1/T, 1/T²]` rows.
const SURFACE_CONSTANT: [[f64; 3]; 3] = [
    [-3.4336, -5.999, -29.25],
    [-2.8621, -2.738, -8.36],
    [-2.5671, -1.438, -4.48],
];

const SURFACE_CONSTANT_TREND: [[f64; 3]; 3] = [
    [-3.9638, -8.353, -47.44],
    [-3.4126, -4.039, -17.83],
    [-3.1279, -2.418, -7.58],
];

/// Run the augmented Dickey-Fuller test under the given regression
/// specification.
///
/// # Arguments
/// - `series`: input observations; must be finite and at least
///   `MIN_ADF_OBSERVATIONS` long.
/// - `regression`: detrended (`Constant`) or trended
///   (`ConstantAndTrend`) specification.
///
/// # Returns
/// A [`UnitRootOutcome`] with the t-statistic on the lagged level, the
/// approximate p-value, and the selected lag order.
///
/// # Errors
/// - `TooFewObservations` when the series cannot support the regression.
/// - `SingularDesign` / `DegenerateVariance` from the underlying OLS fit.
pub fn adf_test(series: &[f64], regression: Regression) -> PrimitiveResult<UnitRootOutcome> {
    let n = series.len();
    if n < MIN_ADF_OBSERVATIONS {
        return Err(PrimitiveError::TooFewObservations { n, needed: MIN_ADF_OBSERVATIONS });
    }

    let diff: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
    let max_lag = ((12.0 * (n as f64 / 100.0).powf(0.25)) as usize).min(n / 4);
    let lag = select_lag(series, &diff, max_lag, regression);

    let (y, x) = build_design(series, &diff, lag, regression)?;
    let fit = ols(&y, &x)?;
    let t_stat = coefficient_t_stat(&fit, &x, 1)?;
    let p_value = approximate_p_value(t_stat, x.nrows(), regression);

    Ok(UnitRootOutcome { statistic: t_stat, p_value, lags: lag })
}

/// Pick the lag order with the best AIC over `0..=max_lag`.
///
/// Candidates whose regression fails are skipped; when every candidate
/// fails the final regression runs with lag 0 and reports the failure
/// itself.
fn select_lag(series: &[f64], diff: &[f64], max_lag: usize, regression: Regression) -> usize {
    let mut best_lag = 0;
    let mut best_aic = f64::INFINITY;

    for lag in 0..=max_lag {
        let (y, x) = match build_design(series, diff, lag, regression) {
            Ok(pair) => pair,
            Err(_) => break,
        };
        let fit = match ols(&y, &x) {
            Ok(fit) => fit,
            Err(_) => continue,
        };
        let eff = x.nrows() as f64;
        let rss: f64 = fit.residuals.iter().map(|r| r * r).sum();
        if rss <= 0.0 || !rss.is_finite() {
            continue;
        }
        let aic = eff * (rss / eff).ln() + 2.0 * x.ncols() as f64;
        if aic < best_aic {
            best_aic = aic;
            best_lag = lag;
        }
    }

    best_lag
}

/// Build the ADF regression `Δy_t` against
/// `[1, y_{t−1}, (t,) Δy_{t−1}, …, Δy_{t−lag}]`.
///
/// The lagged level always sits in column 1 so callers can read its
/// t-statistic at a fixed index.
fn build_design(
    series: &[f64], diff: &[f64], lag: usize, regression: Regression,
) -> PrimitiveResult<(DVector<f64>, DMatrix<f64>)> {
    let trend_cols = match regression {
        Regression::Constant => 0,
        Regression::ConstantAndTrend => 1,
    };
    let k = 2 + trend_cols + lag;

    let eff = diff.len().saturating_sub(lag);
    if eff < k + 5 {
        return Err(PrimitiveError::TooFewObservations {
            n: series.len(),
            needed: lag + k + 6,
        });
    }

    let y = DVector::from_fn(eff, |i, _| diff[lag + i]);
    let x = DMatrix::from_fn(eff, k, |i, j| {
        let t = lag + i;
        match j {
            0 => 1.0,
            1 => series[t],
            2 if trend_cols == 1 => (t + 1) as f64,
            _ => diff[t - 1 - (j - 2 - trend_cols)],
        }
    });

    Ok((y, x))
}

/// Map the t-statistic onto an approximate p-value.
///
/// Inside the tabulated range the p-value is linearly interpolated
/// between the 1%, 5% and 10% critical values; beyond it, scaled normal
/// CDF tails keep the mapping monotone and bounded in [0.0001, 1.0].
fn approximate_p_value(t_stat: f64, eff: usize, regression: Regression) -> f64 {
    let surface = match regression {
        Regression::Constant => &SURFACE_CONSTANT,
        Regression::ConstantAndTrend => &SURFACE_CONSTANT_TREND,
    };

    let t_inv = 1.0 / eff as f64;
    let t_inv2 = t_inv * t_inv;
    let cv = |row: &[f64; 3]| row[0] + row[1] * t_inv + row[2] * t_inv2;
    let c1 = cv(&surface[0]);
    let c5 = cv(&surface[1]);
    let c10 = cv(&surface[2]);

    let norm = Normal::new(0.0, 1.0).expect("standard normal parameters are valid");

    if t_stat <= c1 {
        (norm.cdf((t_stat - c1) * 0.3) * 0.01).clamp(0.0001, 0.01)
    } else if t_stat <= c5 {
        0.01 + 0.04 * (t_stat - c1) / (c5 - c1)
    } else if t_stat <= c10 {
        0.05 + 0.05 * (t_stat - c5) / (c10 - c5)
    } else {
        (0.10 + 0.90 * norm.cdf((t_stat - c10) * 0.5)).clamp(0.10, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Rejection of short series.
    // - Sign and p-value range on a mean-reverting synthetic series.
    // - Discrimination between the constant and trend specifications on a
    //   trend-stationary series.
    //
    // They intentionally DO NOT cover:
    // - Asymptotic size/power of the test (simulation territory).
    // -------------------------------------------------------------------------

    /// Deterministic noise-like values in [-1, 1] with low serial
    /// correlation, following the usual modular-arithmetic trick.
    fn pseudo_noise(n: usize) -> Vec<f64> {
        (0..n).map(|i| ((i * 17 + 13) % 97) as f64 / 50.0 - 1.0).collect()
    }

    #[test]
    // Purpose
    // -------
    // Ensure series shorter than the minimum are rejected up front.
    //
    // Given
    // -----
    // - A series of 5 observations.
    //
    // Expect
    // ------
    // - `adf_test` returns `Err(PrimitiveError::TooFewObservations)`.
    fn adf_test_short_series_returns_too_few_observations() {
        // Arrange
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        // Act
        let result = adf_test(&series, Regression::Constant);

        // Assert
        match result {
            Err(PrimitiveError::TooFewObservations { n: 5, .. }) => (),
            other => panic!("expected TooFewObservations, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a strongly mean-reverting series produces a negative
    // statistic and a small p-value under the constant specification.
    //
    // Given
    // -----
    // - 200 deterministic noise-like observations.
    //
    // Expect
    // ------
    // - statistic < 0, p-value within [0, 1] and below 0.05.
    fn adf_test_mean_reverting_series_rejects_unit_root() {
        // Arrange
        let series = pseudo_noise(200);

        // Act
        let outcome = adf_test(&series, Regression::Constant).expect("test should run");

        // Assert
        assert!(outcome.statistic < 0.0, "statistic: {}", outcome.statistic);
        assert!((0.0..=1.0).contains(&outcome.p_value), "p-value: {}", outcome.p_value);
        assert!(outcome.p_value < 0.05, "p-value: {}", outcome.p_value);
    }

    #[test]
    // Purpose
    // -------
    // Verify that the trend specification, not the constant one, rejects
    // the unit root for a trend-stationary series.
    //
    // Given
    // -----
    // - 200 observations of a steep linear trend plus small noise-like
    //   fluctuations.
    //
    // Expect
    // ------
    // - Constant specification: p-value above 0.05 (trend masquerades as
    //   a unit root).
    // - Constant-and-trend specification: p-value below 0.05.
    fn adf_test_trend_stationary_series_needs_trend_specification() {
        // Arrange
        let series: Vec<f64> = pseudo_noise(200)
            .iter()
            .enumerate()
            .map(|(i, e)| 0.5 * i as f64 + 0.2 * e)
            .collect();

        // Act
        let constant = adf_test(&series, Regression::Constant).expect("test should run");
        let trended = adf_test(&series, Regression::ConstantAndTrend).expect("test should run");

        // Assert
        assert!(constant.p_value > 0.05, "constant p-value: {}", constant.p_value);
        assert!(trended.p_value < 0.05, "trended p-value: {}", trended.p_value);
    }
}
