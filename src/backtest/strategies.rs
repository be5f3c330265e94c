// src/backtest/strategies.rs
//! Option-overlay strategies re-struck every month.
//!
//! Each period opens at `path[i * days_per_month]`, settles at the last day of
//! the window, and prices its option leg with BSM at a fixed one-month tenor.
//! The whole portfolio is rolled into the next period, so returns compound.
//!
//! | Strategy       | Position per unit               | Strike        |
//! |----------------|---------------------------------|---------------|
//! | Covered call   | long stock, short call          | `1.05 * S_0`  |
//! | Protective put | long stock, long put            | `S_0`         |
//! | Long straddle  | long call, long put             | `S_0`         |

use std::fmt;

use serde::{Deserialize, Serialize};

use super::engine::BacktestConfig;
use crate::analytics::bs_analytic::price_bsm;
use crate::error::{EngineError, EngineResult};
use crate::params::PricingInputs;
use crate::payoffs::Payoff;

/// Covered-call strike as a multiple of the period's opening price
pub const COVERED_CALL_MONEYNESS: f64 = 1.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    CoveredCall,
    ProtectivePut,
    LongStraddle,
}

impl StrategyKind {
    /// Every strategy, in reporting order
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::CoveredCall,
        StrategyKind::ProtectivePut,
        StrategyKind::LongStraddle,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            StrategyKind::CoveredCall => "Covered Call",
            StrategyKind::ProtectivePut => "Protective Put",
            StrategyKind::LongStraddle => "Long Straddle",
        }
    }

    /// Return on `portfolio_value` over one period from `s_start` to `s_end`
    pub fn period_return(
        &self,
        portfolio_value: f64,
        s_start: f64,
        s_end: f64,
        config: &BacktestConfig,
    ) -> f64 {
        if portfolio_value <= 0.0 || s_start <= 0.0 {
            return 0.0;
        }
        let price = |k: f64| {
            price_bsm(&PricingInputs::new(
                s_start,
                k,
                config.option_tenor,
                config.risk_free_rate,
                config.sigma,
            ))
        };

        match self {
            StrategyKind::CoveredCall => {
                let k = COVERED_CALL_MONEYNESS * s_start;
                let premium = price(k).call;
                let shares = portfolio_value / s_start;
                let pnl_per_share =
                    (s_end + premium) - s_start - Payoff::EuropeanCall { k }.at_expiry(s_end);
                shares * pnl_per_share / portfolio_value
            }
            StrategyKind::ProtectivePut => {
                let k = s_start;
                let unit_cost = s_start + price(k).put;
                let units = portfolio_value / unit_cost;
                let payoff = s_end + Payoff::EuropeanPut { k }.at_expiry(s_end);
                (units * payoff - portfolio_value) / portfolio_value
            }
            StrategyKind::LongStraddle => {
                let k = s_start;
                let premiums = price(k);
                let unit_cost = premiums.call + premiums.put;
                if unit_cost <= 0.0 {
                    return 0.0;
                }
                let units = portfolio_value / unit_cost;
                let payoff = Payoff::Straddle { k }.at_expiry(s_end);
                (units * payoff - portfolio_value) / portfolio_value
            }
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Portfolio value after `month` periods
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    pub month: usize,
    pub value: f64,
}

/// Month-by-month outcome of one strategy over one path
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyRun {
    pub kind: StrategyKind,
    pub monthly_returns: Vec<f64>,
    /// `months + 1` points, starting with the initial investment at month 0
    pub cumulative_returns: Vec<CumulativePoint>,
}

/// Run `kind` over every monthly window of `path`
pub fn evaluate_strategy(
    kind: StrategyKind,
    path: &[f64],
    config: &BacktestConfig,
) -> EngineResult<StrategyRun> {
    let days = config.days_per_month;
    let months = config.months();
    if days == 0 || path.len() < months * days {
        return Err(EngineError::InvalidConfiguration {
            field: "path".to_string(),
            reason: format!(
                "{} prices cannot cover {} months of {} trading days",
                path.len(),
                months,
                days
            ),
        });
    }

    let mut portfolio_value = config.initial_investment;
    let mut monthly_returns = Vec::with_capacity(months);
    let mut cumulative_returns = Vec::with_capacity(months + 1);
    cumulative_returns.push(CumulativePoint {
        month: 0,
        value: portfolio_value,
    });

    for month in 0..months {
        let s_start = path[month * days];
        let s_end = path[(month + 1) * days - 1];
        let monthly_return = kind.period_return(portfolio_value, s_start, s_end, config);

        portfolio_value *= 1.0 + monthly_return;
        if !portfolio_value.is_finite() {
            return Err(EngineError::NumericalInstability {
                method: kind.display_name().to_string(),
                reason: format!("portfolio value is not finite after month {}", month + 1),
            });
        }

        monthly_returns.push(monthly_return);
        cumulative_returns.push(CumulativePoint {
            month: month + 1,
            value: portfolio_value,
        });
    }

    Ok(StrategyRun {
        kind,
        monthly_returns,
        cumulative_returns,
    })
}
