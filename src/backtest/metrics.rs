// src/backtest/metrics.rs
//! Summary statistics of a monthly-return series.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Risk/return summary of one strategy.
///
/// All fields are fractions (0.05 = 5%).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyMetrics {
    /// `Π(1 + r_i) - 1`
    pub total_return: f64,
    /// Share of months with a strictly positive return, in `[0, 1]`
    pub win_rate: f64,
    /// Largest peak-to-trough decline of the compounded index, in `[0, 1]`
    pub max_drawdown: f64,
    pub best_month: f64,
    pub worst_month: f64,
    /// Population standard deviation of monthly returns scaled by √12
    pub annualized_volatility: f64,
}

impl StrategyMetrics {
    /// Aggregate a monthly-return series. An empty series yields all zeros.
    pub fn from_monthly_returns(returns: &[f64]) -> Self {
        if returns.is_empty() {
            return StrategyMetrics::default();
        }

        let n = returns.len() as f64;
        let wins = returns.iter().filter(|&&r| r > 0.0).count();

        StrategyMetrics {
            total_return: returns.iter().fold(1.0, |acc, r| acc * (1.0 + r)) - 1.0,
            win_rate: wins as f64 / n,
            max_drawdown: max_drawdown(returns),
            best_month: returns.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            worst_month: returns.iter().copied().fold(f64::INFINITY, f64::min),
            annualized_volatility: ArrayView1::from(returns).std(0.0) * MONTHS_PER_YEAR.sqrt(),
        }
    }
}

/// Maximum drawdown of the index compounded from 1 by `returns`
pub fn max_drawdown(returns: &[f64]) -> f64 {
    let mut index = 1.0;
    let mut peak = 1.0_f64;
    let mut max_dd = 0.0_f64;

    for r in returns {
        index *= 1.0 + r;
        peak = peak.max(index);
        if peak > 0.0 {
            max_dd = max_dd.max((peak - index) / peak);
        }
    }

    // a month below -100% would push the index negative
    max_dd.clamp(0.0, 1.0)
}
