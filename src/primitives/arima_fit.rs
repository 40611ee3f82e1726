//! ARIMA fitting behind the default backend.
//!
//! Coefficient estimation is delegated to `arima::estimate::fit`, which
//! performs conditional-sum-of-squares estimation and returns the
//! coefficients laid out as `[intercept, ar…, ma…]`. This module adds
//! what the decision layer needs on top: residual recovery on the
//! d-times differenced series via `arima::estimate::residuals`, and an
//! AIC computed from the residual sum of squares,
//! `AIC = m·ln(RSS/m) + 2k` with `k = p + q + 2` (constant term and
//! innovation variance).
//!
//! A fit failure for one order is an ordinary, recoverable outcome here;
//! the order-grid search upstream decides whether any failure matters.

use arima::estimate;

use crate::primitives::errors::{PrimitiveError, PrimitiveResult};
use crate::primitives::traits::{ArimaFit, ArimaOrder};

/// Fit an ARIMA model with a constant term for the given order.
///
/// # Arguments
/// - `series`: input observations, finite, long enough to difference
///   `order.d` times and still identify `p + q + 1` coefficients.
/// - `order`: the (p, d, q) specification to fit.
///
/// # Returns
/// An [`ArimaFit`] carrying the order, a finite AIC, and the estimated
/// coefficients.
///
/// # Errors
/// - `TooFewObservations` when the series cannot support the order.
/// - `FitFailed` when the estimation routine rejects the order or does
///   not converge.
/// - `DegenerateVariance` when the residual sum of squares is not
///   strictly positive, which leaves the AIC undefined.
pub fn fit_with_constant(series: &[f64], order: ArimaOrder) -> PrimitiveResult<ArimaFit> {
    let n = series.len();
    let needed = order.d + order.p + order.q + 4;
    if n < needed {
        return Err(PrimitiveError::TooFewObservations { n, needed });
    }

    let coefficients = estimate::fit(series, order.p, order.d, order.q)
        .map_err(|e| PrimitiveError::FitFailed { message: format!("{e:?}") })?;
    if coefficients.len() < 1 + order.p + order.q {
        return Err(PrimitiveError::FitFailed {
            message: format!("estimator returned {} coefficients for order {order}", coefficients.len()),
        });
    }

    // Residuals are defined on the differenced scale.
    let mut working = series.to_vec();
    for _ in 0..order.d {
        working = working.windows(2).map(|w| w[1] - w[0]).collect();
    }

    let intercept = coefficients[0];
    let ar = (order.p > 0).then(|| &coefficients[1..1 + order.p]);
    let ma = (order.q > 0).then(|| &coefficients[1 + order.p..1 + order.p + order.q]);
    let residuals = estimate::residuals(&working, intercept, ar, ma)
        .map_err(|e| PrimitiveError::FitFailed { message: format!("{e:?}") })?;

    let m = residuals.len() as f64;
    let rss: f64 = residuals.iter().map(|e| e * e).sum();
    if rss <= 0.0 || !rss.is_finite() {
        return Err(PrimitiveError::DegenerateVariance);
    }

    let k = (order.p + order.q + 2) as f64;
    let aic = m * (rss / m).ln() + 2.0 * k;
    if !aic.is_finite() {
        return Err(PrimitiveError::FitFailed {
            message: format!("non-finite information criterion for order {order}"),
        });
    }

    Ok(ArimaFit { order, aic, coefficients })
}
