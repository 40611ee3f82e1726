//! Kwiatkowski-Phillips-Schmidt-Shin stationarity test.
//!
//! This module provides `kpss_test`, the KPSS statistic behind the
//! default backend, for both regression specifications. The null
//! hypothesis is stationarity, so the interpretation direction is the
//! reverse of the unit-root test: large statistics (small p-values)
//! reject stationarity.
//!
//! Conventions:
//! - Residuals come from demeaning (`Constant`) or closed-form linear
//!   detrending (`ConstantAndTrend`).
//! - The long-run variance uses a Bartlett kernel with the conventional
//!   bandwidth `⌊4·(n/100)^{1/4}⌋`.
//! - P-values are interpolated from the published critical-value tables
//!   for each specification and extended beyond the tabulated
//!   [0.01, 0.10] span so comparisons against arbitrary significance
//!   levels stay meaningful.

use crate::primitives::errors::{PrimitiveError, PrimitiveResult};
use crate::primitives::traits::{KpssOutcome, Regression};

/// Fewest observations for which the bandwidth rule and tables apply.
pub(crate) const MIN_KPSS_OBSERVATIONS: usize = 10;

/// Critical values at 10%, 5% and 1% for the constant specification.
const CRITICAL_CONSTANT: [f64; 3] = [0.347, 0.463, 0.739];

/// Critical values at 10%, 5% and 1% for the constant-and-trend
/// specification.
const CRITICAL_CONSTANT_TREND: [f64; 3] = [0.119, 0.146, 0.216];

/// Run the KPSS test under the given regression specification.
///
/// # Arguments
/// - `series`: input observations; must be finite and at least
///   `MIN_KPSS_OBSERVATIONS` long.
/// - `regression`: detrended (`Constant`) or trended
///   (`ConstantAndTrend`) specification.
///
/// # Returns
/// A [`KpssOutcome`] with the η statistic, its interpolated p-value and
/// the Bartlett bandwidth that was used.
///
/// # Errors
/// - `TooFewObservations` when the series is too short.
/// - `DegenerateVariance` when the long-run variance estimate is not
///   strictly positive (e.g. a constant series).
pub fn kpss_test(series: &[f64], regression: Regression) -> PrimitiveResult<KpssOutcome> {
    let n = series.len();
    if n < MIN_KPSS_OBSERVATIONS {
        return Err(PrimitiveError::TooFewObservations { n, needed: MIN_KPSS_OBSERVATIONS });
    }

    let residuals = match regression {
        Regression::Constant => demean(series),
        Regression::ConstantAndTrend => detrend(series),
    };

    // Partial sums S_t of the residuals.
    let mut partial_sums = Vec::with_capacity(n);
    let mut cumsum = 0.0;
    for r in &residuals {
        cumsum += r;
        partial_sums.push(cumsum);
    }

    // Bartlett long-run variance.
    let lags = (4.0 * (n as f64 / 100.0).powf(0.25)).floor() as usize;
    let mut s2 = residuals.iter().map(|r| r * r).sum::<f64>() / n as f64;
    for l in 1..=lags {
        let weight = 1.0 - l as f64 / (lags + 1) as f64;
        let gamma: f64 = residuals[l..]
            .iter()
            .zip(residuals.iter())
            .map(|(a, b)| a * b)
            .sum::<f64>()
            / n as f64;
        s2 += 2.0 * weight * gamma;
    }
    if s2 <= 0.0 || !s2.is_finite() {
        return Err(PrimitiveError::DegenerateVariance);
    }

    let statistic =
        partial_sums.iter().map(|s| s * s).sum::<f64>() / (n as f64 * n as f64) / s2;
    let p_value = interpolate_p_value(statistic, regression);

    Ok(KpssOutcome { statistic, p_value, lags })
}

fn demean(series: &[f64]) -> Vec<f64> {
    let mean = series.iter().sum::<f64>() / series.len() as f64;
    series.iter().map(|y| y - mean).collect()
}

/// Remove a least-squares linear trend `a + b·t` in closed form.
fn detrend(series: &[f64]) -> Vec<f64> {
    let n = series.len();
    let t_mean = (n - 1) as f64 / 2.0;
    let y_mean = series.iter().sum::<f64>() / n as f64;

    let mut num = 0.0;
    let mut den = 0.0;
    for (i, y) in series.iter().enumerate() {
        let dt = i as f64 - t_mean;
        num += dt * (y - y_mean);
        den += dt * dt;
    }

    let b = num / den;
    let a = y_mean - b * t_mean;
    series
        .iter()
        .enumerate()
        .map(|(i, y)| y - a - b * i as f64)
        .collect()
}

/// Interpolate a p-value from the specification's critical-value table.
///
/// Piecewise-linear between the 10%, 5% and 1% entries; extended
/// linearly toward 1.0 below the 10% entry and toward 0 above the 1%
/// entry so the mapping stays monotone over the whole statistic range.
fn interpolate_p_value(statistic: f64, regression: Regression) -> f64 {
    let [cv10, cv5, cv1] = match regression {
        Regression::Constant => CRITICAL_CONSTANT,
        Regression::ConstantAndTrend => CRITICAL_CONSTANT_TREND,
    };

    if statistic < cv10 {
        0.10 + 0.90 * (1.0 - statistic / cv10)
    } else if statistic < cv5 {
        0.05 + 0.05 * (cv5 - statistic) / (cv5 - cv10)
    } else if statistic < cv1 {
        0.01 + 0.04 * (cv1 - statistic) / (cv1 - cv5)
    } else {
        (0.01 * (1.0 - (statistic - cv1) / cv1)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Rejection of short and constant series.
    // - A noise-like series passing as stationary under the constant
    //   specification.
    // - A trended series rejected by the constant specification but not
    //   by the trend specification.
    // -------------------------------------------------------------------------

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
    // - A series of 3 observations.
    //
    // Expect
    // ------
    // - `kpss_test` returns `Err(PrimitiveError::TooFewObservations)`.
    fn kpss_test_short_series_returns_too_few_observations() {
        // Arrange
        let series = vec![1.0, 2.0, 3.0];

        // Act
        let result = kpss_test(&series, Regression::Constant);

        // Assert
        match result {
            Err(PrimitiveError::TooFewObservations { n: 3, .. }) => (),
            other => panic!("expected TooFewObservations, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a constant series, whose long-run variance is zero, is
    // reported as a degenerate computation rather than a verdict input.
    //
    // Given
    // -----
    // - 50 identical observations.
    //
    // Expect
    // ------
    // - `kpss_test` returns `Err(PrimitiveError::DegenerateVariance)`.
    fn kpss_test_constant_series_returns_degenerate_variance() {
        // Arrange
        let series = vec![2.5; 50];

        // Act
        let result = kpss_test(&series, Regression::Constant);

        // Assert
        match result {
            Err(PrimitiveError::DegenerateVariance) => (),
            other => panic!("expected DegenerateVariance, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify a noise-like series is not rejected by the constant
    // specification.
    //
    // Given
    // -----
    // - 200 deterministic noise-like observations.
    //
    // Expect
    // ------
    // - Statistic positive, p-value above 0.10.
    fn kpss_test_noise_like_series_supports_stationarity() {
        // Arrange
        let series = pseudo_noise(200);

        // Act
        let outcome = kpss_test(&series, Regression::Constant).expect("test should run");

        // Assert
        assert!(outcome.statistic > 0.0, "statistic: {}", outcome.statistic);
        assert!(outcome.p_value > 0.10, "p-value: {}", outcome.p_value);
    }

    #[test]
    // Purpose
    // -------
    // Verify the trend specification discriminates a trend-stationary
    // series from a level-stationary one.
    //
    // Given
    // -----
    // - 200 observations of a steep linear trend plus small noise.
    //
    // Expect
    // ------
    // - Constant specification: p-value at or below 0.05 (level
    //   stationarity rejected).
    // - Trend specification: p-value above the constant one.
    fn kpss_test_trended_series_prefers_trend_specification() {
        // Arrange
        let series: Vec<f64> = pseudo_noise(200)
            .iter()
            .enumerate()
            .map(|(i, e)| 0.5 * i as f64 + 0.2 * e)
            .collect();

        // Act
        let constant = kpss_test(&series, Regression::Constant).expect("test should run");
        let trended = kpss_test(&series, Regression::ConstantAndTrend).expect("test should run");

        // Assert
        assert!(constant.p_value <= 0.05, "constant p-value: {}", constant.p_value);
        assert!(trended.p_value > constant.p_value, "trended p-value not larger");
    }
}
