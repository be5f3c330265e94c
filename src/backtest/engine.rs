// src/backtest/engine.rs
//! Backtest pipeline: one simulated path → three strategies → metrics.
//!
//! The path is drawn once per run from a caller-owned random source and then
//! fed deterministically through every strategy, so a fixed seed reproduces
//! the full result set.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::metrics::StrategyMetrics;
use super::strategies::{evaluate_strategy, CumulativePoint, StrategyKind};
use crate::error::{validation::*, EngineError, EngineResult};
use crate::models::price_path::{PricePathModel, TRADING_DAYS_PER_YEAR};
use crate::rng;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestConfig {
    pub start_price: f64,
    pub years: usize,
    /// Drift of the simulated path
    pub annual_drift: f64,
    /// Volatility of the simulated path
    pub annual_vol: f64,
    /// Rate used to price the option legs
    pub risk_free_rate: f64,
    /// Volatility used to price the option legs
    pub sigma: f64,
    /// Starting value of each strategy's portfolio
    pub initial_investment: f64,
    pub trading_days_per_year: usize,
    pub days_per_month: usize,
    /// Tenor of every monthly option, in years
    pub option_tenor: f64,
    /// `None` draws the path from OS entropy
    pub seed: Option<u64>,
}

impl BacktestConfig {
    /// Number of monthly rebalancing periods
    pub fn months(&self) -> usize {
        self.years * 12
    }

    pub fn path_model(&self) -> EngineResult<PricePathModel> {
        let model = PricePathModel {
            trading_days_per_year: self.trading_days_per_year,
            ..PricePathModel::new(self.start_price, self.annual_drift, self.annual_vol)?
        };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.years == 0 {
            return Err(EngineError::InvalidConfiguration {
                field: "years".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.days_per_month == 0 {
            return Err(EngineError::InvalidConfiguration {
                field: "days_per_month".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.days_per_month * 12 > self.trading_days_per_year {
            return Err(EngineError::InvalidConfiguration {
                field: "days_per_month".to_string(),
                reason: format!(
                    "12 months of {} days exceed {} trading days per year",
                    self.days_per_month, self.trading_days_per_year
                ),
            });
        }
        validate_finite("initial_investment", self.initial_investment)?;
        validate_positive("initial_investment", self.initial_investment)?;
        validate_finite("risk_free_rate", self.risk_free_rate)?;
        validate_finite("sigma", self.sigma)?;
        validate_positive("sigma", self.sigma)?;
        validate_finite("option_tenor", self.option_tenor)?;
        validate_positive("option_tenor", self.option_tenor)?;
        self.path_model().map(|_| ())
    }
}

impl Default for BacktestConfig {
    fn default() -> Self {
        BacktestConfig {
            start_price: 100.0,
            years: 2,
            annual_drift: 0.08,
            annual_vol: 0.25,
            risk_free_rate: 0.05,
            sigma: 0.25,
            initial_investment: 100_000.0,
            trading_days_per_year: TRADING_DAYS_PER_YEAR,
            days_per_month: 21,
            option_tenor: 1.0 / 12.0,
            seed: None,
        }
    }
}

/// Metrics and equity curve of one strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyResult {
    pub name: StrategyKind,
    pub metrics: StrategyMetrics,
    pub cumulative_returns: Vec<CumulativePoint>,
    pub monthly_returns: Vec<f64>,
}

/// Default two-year backtest of all three strategies.
///
/// Results come back in [`StrategyKind::ALL`] order.
pub fn run_backtest(seed: Option<u64>) -> EngineResult<Vec<StrategyResult>> {
    run_backtest_with_config(&BacktestConfig {
        seed,
        ..Default::default()
    })
}

/// Backtest with a custom configuration, seeded from `config.seed`
pub fn run_backtest_with_config(config: &BacktestConfig) -> EngineResult<Vec<StrategyResult>> {
    let mut rng = rng::rng_for_seed(config.seed);
    run_backtest_with(config, &mut rng)
}

/// Backtest drawing the path from a caller-owned random source
pub fn run_backtest_with<R: Rng + ?Sized>(
    config: &BacktestConfig,
    rng: &mut R,
) -> EngineResult<Vec<StrategyResult>> {
    config.validate()?;
    tracing::info!(
        seed = ?config.seed,
        years = config.years,
        start_price = config.start_price,
        "starting strategy backtest"
    );

    let path = config.path_model()?.simulate(config.years, rng)?;

    StrategyKind::ALL
        .iter()
        .map(|&kind| {
            let run = evaluate_strategy(kind, &path, config)?;
            let metrics = StrategyMetrics::from_monthly_returns(&run.monthly_returns);
            tracing::info!(
                strategy = %kind,
                total_return = metrics.total_return,
                max_drawdown = metrics.max_drawdown,
                win_rate = metrics.win_rate,
                "strategy backtest complete"
            );
            Ok(StrategyResult {
                name: run.kind,
                metrics,
                cumulative_returns: run.cumulative_returns,
                monthly_returns: run.monthly_returns,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_default_config_is_valid() {
        let config = BacktestConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.months(), 24);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let cases = [
            BacktestConfig {
                years: 0,
                ..Default::default()
            },
            BacktestConfig {
                days_per_month: 0,
                ..Default::default()
            },
            BacktestConfig {
                days_per_month: 22,
                ..Default::default()
            },
            BacktestConfig {
                initial_investment: 0.0,
                ..Default::default()
            },
            BacktestConfig {
                sigma: 0.0,
                ..Default::default()
            },
            BacktestConfig {
                start_price: -5.0,
                ..Default::default()
            },
        ];
        for config in cases {
            assert!(run_backtest_with_config(&config).is_err(), "{:?} should fail", config);
        }
    }

    #[test]
    fn test_path_model_follows_config() {
        let config = BacktestConfig {
            trading_days_per_year: 240,
            days_per_month: 20,
            ..Default::default()
        };
        let model = config.path_model().unwrap();
        assert_eq!(model.trading_days_per_year, 240);
        assert_eq!(model.start_price, config.start_price);

        let results = run_backtest_with(&config, &mut StepRng::new(1 << 63, 0)).unwrap();
        assert!(results.iter().all(|r| r.monthly_returns.len() == 24));
        assert_eq!(results[0].name, StrategyKind::CoveredCall);
    }

    #[test]
    fn test_pinned_stream_is_deterministic() {
        let config = BacktestConfig::default();
        let a = run_backtest_with(&config, &mut StepRng::new(1 << 63, 0)).unwrap();
        let b = run_backtest_with(&config, &mut StepRng::new(1 << 63, 0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serialized_shape() {
        let results = run_backtest(Some(3)).unwrap();
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json[0]["name"], "CoveredCall");
        assert_eq!(json[2]["name"], "LongStraddle");
        assert!(json[1]["metrics"]["annualizedVolatility"].is_number());
        assert_eq!(json[0]["cumulativeReturns"][0]["month"], 0);
    }
}
