//! Partial autocorrelation estimation behind the default backend.
//!
//! This module provides:
//! - Sample autocorrelations with the biased (1/n) normalization.
//! - The Durbin-Levinson recursion for the partial autocorrelation
//!   coefficients φ_{k,k}.
//! - `pacf`, which assembles the sequence indexed by lag from 0 (where
//!   the coefficient is 1 by definition) up to the requested maximum —
//!   the indexing the decision layer's downward scan is written
//!   against.
//!
//! Conventions:
//! - The requested lag is capped at `n/2 − 1` so the recursion stays
//!   identified on short series.
//! - A zero variance or a degenerate recursion denominator is reported
//!   as an error, never smoothed over.

use crate::primitives::errors::{PrimitiveError, PrimitiveResult};

/// Default maximum lag when the caller does not supply one.
pub const DEFAULT_MAX_PACF_LAG: usize = 40;

/// Fewest observations for which the recursion is identified at lag 1.
pub(crate) const MIN_PACF_OBSERVATIONS: usize = 4;

/// Estimate partial autocorrelation coefficients for lags `0..=max_lag`.
///
/// # Arguments
/// - `series`: input observations; must be finite and at least
///   `MIN_PACF_OBSERVATIONS` long.
/// - `max_lag`: highest lag to estimate; defaults to
///   [`DEFAULT_MAX_PACF_LAG`]. Either way the lag is capped at
///   `n/2 − 1`.
///
/// # Returns
/// Coefficients indexed by lag, with element 0 equal to 1.0.
///
/// # Errors
/// - `TooFewObservations` when the series is too short.
/// - `DegenerateVariance` when the series variance is zero or the
///   recursion denominator collapses (perfectly predictable series).
pub fn pacf(series: &[f64], max_lag: Option<usize>) -> PrimitiveResult<Vec<f64>> {
    let n = series.len();
    if n < MIN_PACF_OBSERVATIONS {
        return Err(PrimitiveError::TooFewObservations { n, needed: MIN_PACF_OBSERVATIONS });
    }

    let cap = n / 2 - 1;
    let lag = max_lag.unwrap_or(DEFAULT_MAX_PACF_LAG).min(cap).max(1);

    let rho = autocorrelations(series, lag)?;
    durbin_levinson(&rho, lag)
}

/// Sample autocorrelations r_k = γ̂_k / γ̂_0 for k = 0..=max_lag, with
/// the biased 1/n normalization.
fn autocorrelations(series: &[f64], max_lag: usize) -> PrimitiveResult<Vec<f64>> {
    let n = series.len();
    let mean = series.iter().sum::<f64>() / n as f64;

    let gamma0: f64 = series.iter().map(|y| (y - mean) * (y - mean)).sum::<f64>() / n as f64;
    if gamma0 <= 0.0 || !gamma0.is_finite() {
        return Err(PrimitiveError::DegenerateVariance);
    }

    let mut rho = Vec::with_capacity(max_lag + 1);
    rho.push(1.0);
    for k in 1..=max_lag {
        let gamma_k: f64 = series[k..]
            .iter()
            .zip(series)
            .map(|(y_t, y_t_min_k)| (y_t - mean) * (y_t_min_k - mean))
            .sum::<f64>()
            / n as f64;
        rho.push(gamma_k / gamma0);
    }
    Ok(rho)
}

/// Durbin-Levinson recursion: extract φ_{k,k} for k = 1..=max_lag from
/// the autocorrelation sequence and prepend the lag-0 coefficient.
fn durbin_levinson(rho: &[f64], max_lag: usize) -> PrimitiveResult<Vec<f64>> {
    let mut coefficients = Vec::with_capacity(max_lag + 1);
    coefficients.push(1.0);

    // φ_{k,j} for the previous order k − 1; index j runs 1..=k−1.
    let mut phi_prev = vec![0.0; max_lag + 1];
    let mut phi_curr = vec![0.0; max_lag + 1];

    for k in 1..=max_lag {
        let phi_kk = if k == 1 {
            rho[1]
        } else {
            let mut num = rho[k];
            let mut den = 1.0;
            for j in 1..k {
                num -= phi_prev[j] * rho[k - j];
                den -= phi_prev[j] * rho[j];
            }
            if den.abs() < f64::EPSILON || !den.is_finite() {
                return Err(PrimitiveError::DegenerateVariance);
            }
            num / den
        };

        phi_curr[k] = phi_kk;
        for j in 1..k {
            phi_curr[j] = phi_prev[j] - phi_kk * phi_prev[k - j];
        }
        phi_prev[..=k].copy_from_slice(&phi_curr[..=k]);

        coefficients.push(phi_kk);
    }

    Ok(coefficients)
}
