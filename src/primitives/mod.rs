//! primitives — the statistical layer the decision procedures stand on.
//!
//! Purpose
//! -------
//! Collect the statistical operations the stationarity checks consume:
//! the augmented Dickey-Fuller unit-root test, the KPSS stationarity
//! test, ARIMA fitting with a constant term, and partial autocorrelation
//! estimation. The decision layer talks to them exclusively through the
//! [`StatisticalPrimitives`] trait, so the numerical backend can be
//! swapped or scripted without touching any decision logic.
//!
//! Key behaviors
//! -------------
//! - Define the seam ([`StatisticalPrimitives`], [`Regression`], the
//!   outcome types) in [`traits`].
//! - Provide the default backend [`NativePrimitives`]: OLS-based test
//!   regressions over `nalgebra`, response-surface p-values with
//!   `statrs` normal tails, `arima`-crate estimation for model fits,
//!   and an in-crate Durbin-Levinson recursion for partial
//!   autocorrelations.
//! - Report every failure through [`PrimitiveError`]; an outcome is
//!   never fabricated for a series that could not be handled.
//!
//! Conventions
//! -----------
//! - Implementations are stateless and reentrant.
//! - Length requirements are enforced here, not in the decision layer;
//!   each estimator documents its own minimum.

pub mod arima_fit;
pub mod backend;
pub mod errors;
pub mod kpss_test;
pub mod pacf;
pub(crate) mod regression;
pub mod traits;
pub mod unit_root;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::backend::NativePrimitives;
pub use self::errors::{PrimitiveError, PrimitiveResult};
pub use self::pacf::DEFAULT_MAX_PACF_LAG;
pub use self::traits::{
    ArimaFit, ArimaOrder, KpssOutcome, Regression, StatisticalPrimitives, UnitRootOutcome,
};
