//! Ordinary least squares helpers for the test regressions.
//!
//! This module provides the small amount of linear algebra the unit-root
//! test needs: solving the normal equations for a dense design matrix,
//! recovering residuals, and computing the t-statistic of a single
//! coefficient. Design-matrix construction stays with the callers, which
//! know the lag structure and trend columns of their regressions.
//!
//! Conventions:
//! - `y` is `n×1`, `x` is `n×k` with rows as observations.
//! - Degrees of freedom for the residual variance are `n − k`.

use nalgebra::{DMatrix, DVector};

use crate::primitives::errors::{PrimitiveError, PrimitiveResult};

/// Coefficients and residuals of one least-squares fit.
#[derive(Debug, Clone)]
pub(crate) struct OlsFit {
    pub coefficients: DVector<f64>,
    pub residuals: DVector<f64>,
}

/// Solve the normal equations `(X'X)β = X'y` by LU decomposition.
///
/// # Errors
/// - `PrimitiveError::SingularDesign` if the normal equations cannot be
///   solved (collinear or empty design).
pub(crate) fn ols(y: &DVector<f64>, x: &DMatrix<f64>) -> PrimitiveResult<OlsFit> {
    let beta = (x.transpose() * x)
        .lu()
        .solve(&(x.transpose() * y))
        .ok_or(PrimitiveError::SingularDesign)?;
    let residuals = y - x * &beta;
    Ok(OlsFit { coefficients: beta, residuals })
}

/// Compute the t-statistic of the coefficient at `index`.
///
/// Recomputes `(X'X)⁻¹` to obtain the coefficient's sampling variance and
/// scales the residual variance by `n − k` degrees of freedom.
///
/// # Errors
/// - `PrimitiveError::SingularDesign` if `X'X` is not invertible.
/// - `PrimitiveError::DegenerateVariance` if the residual variance or the
///   coefficient standard error is not strictly positive.
pub(crate) fn coefficient_t_stat(
    fit: &OlsFit, x: &DMatrix<f64>, index: usize,
) -> PrimitiveResult<f64> {
    let n = x.nrows();
    let k = x.ncols();
    if n <= k {
        return Err(PrimitiveError::TooFewObservations { n, needed: k + 1 });
    }

    let sse: f64 = fit.residuals.iter().map(|r| r * r).sum();
    let sigma2 = sse / (n - k) as f64;
    if sigma2 <= 0.0 || !sigma2.is_finite() {
        return Err(PrimitiveError::DegenerateVariance);
    }

    let xtx_inv = (x.transpose() * x)
        .try_inverse()
        .ok_or(PrimitiveError::SingularDesign)?;
    let se = (sigma2 * xtx_inv[(index, index)]).sqrt();
    if !(se > 0.0) || !se.is_finite() {
        return Err(PrimitiveError::DegenerateVariance);
    }

    Ok(fit.coefficients[index] / se)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact recovery of coefficients on a noiseless linear system.
    // - Rejection of a collinear design with SingularDesign.
    // - DegenerateVariance on a perfectly fitting system (zero residual
    //   variance makes the t-statistic undefined).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `ols` recovers the exact coefficients of a noiseless
    // linear relationship y = 2 + 3·t.
    //
    // Given
    // -----
    // - A design matrix with an intercept column and a regressor t = 0..5.
    // - y generated exactly as 2 + 3·t.
    //
    // Expect
    // ------
    // - Coefficients close to (2, 3) and residuals close to zero.
    fn ols_noiseless_line_recovers_exact_coefficients() {
        // Arrange
        let n = 6;
        let x = DMatrix::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { i as f64 });
        let y = DVector::from_fn(n, |i, _| 2.0 + 3.0 * i as f64);

        // Act
        let fit = ols(&y, &x).expect("noiseless line should be solvable");

        // Assert
        assert!((fit.coefficients[0] - 2.0).abs() < 1e-10, "intercept: {}", fit.coefficients[0]);
        assert!((fit.coefficients[1] - 3.0).abs() < 1e-10, "slope: {}", fit.coefficients[1]);
        assert!(fit.residuals.iter().all(|r| r.abs() < 1e-10));
    }

    #[test]
    // Purpose
    // -------
    // Ensure a collinear design matrix is reported as SingularDesign
    // rather than producing arbitrary coefficients.
    //
    // Given
    // -----
    // - A design whose second column duplicates the intercept column.
    //
    // Expect
    // ------
    // - `ols` returns `Err(PrimitiveError::SingularDesign)`.
    fn ols_collinear_design_returns_singular_design() {
        // Arrange
        let x = DMatrix::from_fn(5, 2, |_, _| 1.0);
        let y = DVector::from_fn(5, |i, _| i as f64);

        // Act
        let result = ols(&y, &x);

        // Assert
        match result {
            Err(PrimitiveError::SingularDesign) => (),
            other => panic!("expected SingularDesign, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a perfect fit (zero residuals) is rejected when the
    // t-statistic is requested, since its standard error is zero.
    //
    // Given
    // -----
    // - An intercept-only design against a constant series, so the
    //   single coefficient is the sample mean and residuals are exactly
    //   zero.
    //
    // Expect
    // ------
    // - `coefficient_t_stat` returns `Err(PrimitiveError::DegenerateVariance)`.
    fn coefficient_t_stat_zero_residuals_returns_degenerate_variance() {
        // Arrange
        let n = 6;
        let x = DMatrix::from_fn(n, 1, |_, _| 1.0);
        let y = DVector::from_fn(n, |_, _| 5.0);
        let fit = ols(&y, &x).expect("constant series should be solvable");

        // Act
        let result = coefficient_t_stat(&fit, &x, 0);

        // Assert
        match result {
            Err(PrimitiveError::DegenerateVariance) => (),
            other => panic!("expected DegenerateVariance, got {other:?}"),
        }
    }
}
