//! checks::model_search — ARIMA order-grid decision procedure.
//!
//! Purpose
//! -------
//! Classify a series by exhaustively fitting ARIMA models over an order
//! grid, selecting the fit with the minimal Akaike information
//! criterion, and reading the differencing order of the winner: a best
//! model that needed no differencing is taken as evidence of
//! stationarity.
//!
//! Key behaviors
//! -------------
//! - Enumerate the grid in a fixed order — `p` outermost, `d` middle,
//!   `q` innermost — with the default grid spanning p ∈ 0..=4,
//!   d ∈ 0..=1, q ∈ 0..=4 (40 combinations), each fit with a constant
//!   term against the full series.
//! - Track the minimal AIC with a strict comparison, so ties resolve to
//!   the earliest combination in the enumeration.
//! - Tolerate per-combination fit failures: a failed order is excluded
//!   from the candidate pool and the search continues.
//! - Surface [`CheckError::NoViableModel`] when *every* combination
//!   fails; an undefined minimum is never selected.
//!
//! Invariants & assumptions
//! ------------------------
//! - Fit attempts are independent: each is a pure function of
//!   (series, order) with no state shared across attempts, so the loop
//!   can be distributed across workers without observable change.
//! - The significance level is validated but otherwise unused — a
//!   documented limitation of this procedure; it is not given invented
//!   semantics.
//! - No trended model variant is attempted (same status).
//!
//! Testing notes
//! -------------
//! - Unit tests script the fitter to cover minimal-AIC selection, the
//!   earliest-order tie-break, partial and total fit failure, and the
//!   fixed enumeration order.

use crate::checks::errors::{CheckError, CheckResult};
use crate::checks::validation::validate_input;
use crate::checks::verdict::Verdict;
use crate::primitives::traits::{ArimaOrder, StatisticalPrimitives};
use crate::primitives::NativePrimitives;

/// OrderGrid — bounds of the ARIMA order search space.
///
/// Purpose
/// -------
/// Describe the inclusive upper bounds of the (p, d, q) grid the search
/// enumerates. The default spans p ∈ 0..=4, d ∈ 0..=1, q ∈ 0..=4.
///
/// Fields
/// ------
/// - `max_ar`: largest autoregressive order, inclusive.
/// - `max_diff`: largest differencing order, inclusive.
/// - `max_ma`: largest moving-average order, inclusive.
///
/// Notes
/// -----
/// - Enumeration order is part of the contract: `p` outermost, `d`
///   middle, `q` innermost, so tie-breaks on equal criteria are
///   reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderGrid {
    pub max_ar: usize,
    pub max_diff: usize,
    pub max_ma: usize,
}

impl OrderGrid {
    pub fn new(max_ar: usize, max_diff: usize, max_ma: usize) -> Self {
        Self { max_ar, max_diff, max_ma }
    }

    /// Number of (p, d, q) combinations the grid contains.
    pub fn combinations(&self) -> usize {
        (self.max_ar + 1) * (self.max_diff + 1) * (self.max_ma + 1)
    }

    /// Enumerate every order in the fixed search sequence.
    pub fn orders(&self) -> impl Iterator<Item = ArimaOrder> {
        let (max_ar, max_diff, max_ma) = (self.max_ar, self.max_diff, self.max_ma);
        (0..=max_ar).flat_map(move |p| {
            (0..=max_diff)
                .flat_map(move |d| (0..=max_ma).map(move |q| ArimaOrder::new(p, d, q)))
        })
    }
}

impl Default for OrderGrid {
    fn default() -> Self {
        Self::new(4, 1, 4)
    }
}

/// Classify `series` by ARIMA order search with the default statistical
/// backend and the default grid.
///
/// Parameters
/// ----------
/// - `series`: `&[f64]`
///   Input observations; must be finite. The fitter enforces its own
///   per-order minimum length.
/// - `significance`: `f64`
///   Accepted and range-validated for interface consistency with the
///   other procedures, but it does not influence the search — a
///   documented limitation of this procedure.
///
/// Returns
/// -------
/// `CheckResult<Verdict>`
///   - `Ok(Verdict::StationaryNoTrend)` when the minimal-AIC fit has
///     differencing order zero.
///   - `Ok(Verdict::NonStationary)` when it required differencing.
///   - `Err(CheckError::NoViableModel)` when no combination produced a
///     usable fit.
///   - `Err(CheckError)` for invalid inputs.
pub fn decide_by_model_search(series: &[f64], significance: f64) -> CheckResult<Verdict> {
    decide_by_model_search_with(&NativePrimitives, series, significance)
}

/// Classify `series` by ARIMA order search against an explicit backend,
/// using the default grid.
///
/// See [`decide_by_model_search`] for the decision rule.
pub fn decide_by_model_search_with<P: StatisticalPrimitives>(
    primitives: &P, series: &[f64], significance: f64,
) -> CheckResult<Verdict> {
    decide_by_model_search_on_grid(primitives, series, significance, OrderGrid::default())
}

/// Classify `series` by ARIMA order search over a caller-supplied grid.
///
/// The decision rule and failure policy match
/// [`decide_by_model_search`]; only the grid bounds differ.
pub fn decide_by_model_search_on_grid<P: StatisticalPrimitives>(
    primitives: &P, series: &[f64], significance: f64, grid: OrderGrid,
) -> CheckResult<Verdict> {
    validate_input(series, significance)?;

    let mut best: Option<(ArimaOrder, f64)> = None;

    for order in grid.orders() {
        // A failed combination leaves the candidate pool; it does not
        // abort the search.
        let fit = match primitives.fit_arima(series, order) {
            Ok(fit) => fit,
            Err(_) => continue,
        };
        match best {
            Some((_, best_aic)) if fit.aic >= best_aic => {}
            _ => best = Some((order, fit.aic)),
        }
    }

    let (best_order, _) = best.ok_or(CheckError::NoViableModel)?;
    if best_order.d == 0 {
        Ok(Verdict::StationaryNoTrend)
    } else {
        Ok(Verdict::NonStationary)
    }
}
