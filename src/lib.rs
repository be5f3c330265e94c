//! # optionlab: European Option Pricing and Strategy Backtesting
//!
//! A Rust library for pricing European options in closed form and on a
//! binomial lattice, charting their sensitivities, and backtesting monthly
//! option-overlay strategies on a simulated price path.
//!
//! ## Key Features
//!
//! - **Two Pricers**: Black-Scholes-Merton closed form and a Cox-Ross-Rubinstein lattice
//! - **Greek Sweeps**: Delta across spot and vega across volatility, ready for charting
//! - **Put-Call Parity**: Synthetic call cost and expiry P&L curves
//! - **Backtesting**: Covered call, protective put and long straddle over a seeded path
//! - **Metrics**: Total return, win rate, drawdown and annualized volatility
//!
//! ## Quick Start
//!
//! ```rust
//! use optionlab::{price_binomial, price_bsm, run_backtest, PricingInputs};
//!
//! let inputs = PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
//!
//! let closed_form = price_bsm(&inputs);
//! let lattice = price_binomial(&inputs.with_steps(200)).expect("Valid inputs");
//! println!("BSM call {:.4}, lattice call {:.4}", closed_form.call, lattice.call);
//!
//! let results = run_backtest(Some(42)).expect("Valid configuration");
//! for result in &results {
//!     println!("{}: {:.2}%", result.name, result.metrics.total_return * 100.0);
//! }
//! ```
//!
//! ## Degenerate Inputs
//!
//! Pricing routines never fail on an expired option, zero volatility or a
//! non-positive spot: they return the intrinsic value. Hard errors are kept
//! for non-finite inputs and unusable lattice or backtest configurations.

// Module declarations
pub mod error;
pub mod rng;
pub mod math_utils;
pub mod params;
pub mod payoffs;
pub mod analytics;
pub mod lattice;
pub mod models;
pub mod backtest;

// Re-export commonly used types for convenience
pub use error::{EngineError, EngineResult};
pub use params::{OptionResult, PricingInputs};
pub use analytics::bs_analytic::price_bsm;
pub use analytics::greeks::{greeks, GreeksPoint, GreeksSeries};
pub use analytics::parity::{synthetic_parity, PayoffPoint, SyntheticParity};
pub use lattice::binomial::{binomial_convergence, price_binomial, ConvergencePoint};
pub use backtest::engine::{run_backtest, BacktestConfig, StrategyResult};
pub use backtest::metrics::StrategyMetrics;
pub use backtest::strategies::StrategyKind;
