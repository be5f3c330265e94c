// tests/backtest_test.rs
use optionlab::backtest::engine::{run_backtest_with, run_backtest_with_config};
use optionlab::backtest::strategies::COVERED_CALL_MONEYNESS;
use optionlab::rng::seed_rng_from_u64;
use optionlab::{price_bsm, run_backtest, BacktestConfig, PricingInputs, StrategyKind};

const TENOR: f64 = 1.0 / 12.0;

#[test]
fn test_seeded_backtest_shape() {
    let results = run_backtest(Some(42)).expect("Default configuration is valid");

    let names: Vec<StrategyKind> = results.iter().map(|r| r.name).collect();
    assert_eq!(names, StrategyKind::ALL.to_vec());

    for result in &results {
        println!(
            "\n{}: total {:.4}, win rate {:.3}, max drawdown {:.4}, vol {:.4}",
            result.name,
            result.metrics.total_return,
            result.metrics.win_rate,
            result.metrics.max_drawdown,
            result.metrics.annualized_volatility
        );

        assert_eq!(result.monthly_returns.len(), 24);
        assert_eq!(result.cumulative_returns.len(), 25);
        assert_eq!(result.cumulative_returns[0].month, 0);
        assert_eq!(result.cumulative_returns[0].value, 100_000.0);
        for (i, point) in result.cumulative_returns.iter().enumerate() {
            assert_eq!(point.month, i);
            assert!(point.value >= 0.0 && point.value.is_finite());
        }
    }
}

#[test]
fn test_same_seed_same_results() {
    let a = run_backtest(Some(7)).expect("Valid configuration");
    let b = run_backtest(Some(7)).expect("Valid configuration");
    assert_eq!(a, b);

    let c = run_backtest(Some(8)).expect("Valid configuration");
    assert_ne!(a[0].monthly_returns, c[0].monthly_returns);
}

#[test]
fn test_metrics_consistent_with_equity_curve() {
    for seed in [1, 2, 3, 42] {
        for result in run_backtest(Some(seed)).expect("Valid configuration") {
            let m = &result.metrics;
            let last = result.cumulative_returns.last().expect("Non-empty curve");

            let from_curve = last.value / 100_000.0 - 1.0;
            assert!((m.total_return - from_curve).abs() < 1e-9, "{}: total return mismatch", result.name);
            assert!((0.0..=1.0).contains(&m.win_rate));
            assert!((0.0..=1.0).contains(&m.max_drawdown));
            assert!(m.best_month >= m.worst_month);
            assert!(m.annualized_volatility >= 0.0);
        }
    }
}

#[test]
fn test_strategy_return_bounds() {
    // BSM is homogeneous in (S, K), so the per-unit premiums hold at any price level
    let premium =
        price_bsm(&PricingInputs::new(100.0, 100.0 * COVERED_CALL_MONEYNESS, TENOR, 0.05, 0.25)).call;
    let put = price_bsm(&PricingInputs::new(100.0, 100.0, TENOR, 0.05, 0.25)).put;
    let cap = (COVERED_CALL_MONEYNESS - 1.0) + premium / 100.0;
    let floor = 100.0 / (100.0 + put) - 1.0;

    for seed in 0..10 {
        let results = run_backtest(Some(seed)).expect("Valid configuration");
        for r in &results[0].monthly_returns {
            assert!(*r <= cap + 1e-9, "Covered call return {} above cap {}", r, cap);
        }
        for r in &results[1].monthly_returns {
            assert!(*r >= floor - 1e-9, "Protective put return {} below floor {}", r, floor);
        }
        for r in &results[2].monthly_returns {
            assert!(*r >= -1.0 - 1e-12, "Straddle lost more than its premium: {}", r);
        }
    }
}

#[test]
fn test_custom_config() {
    let config = BacktestConfig {
        years: 1,
        start_price: 50.0,
        initial_investment: 10_000.0,
        seed: Some(11),
        ..Default::default()
    };
    let results = run_backtest_with_config(&config).expect("Valid configuration");
    for result in &results {
        assert_eq!(result.monthly_returns.len(), 12);
        assert_eq!(result.cumulative_returns[0].value, 10_000.0);
    }

    let mut rng = seed_rng_from_u64(11);
    let replay = run_backtest_with(&config, &mut rng).expect("Valid configuration");
    assert_eq!(results, replay);
}

#[test]
fn test_invalid_config_rejected() {
    let config = BacktestConfig {
        days_per_month: 30,
        ..Default::default()
    };
    assert!(run_backtest_with_config(&config).is_err());
}
