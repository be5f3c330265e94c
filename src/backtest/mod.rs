// src/backtest/mod.rs
//! Monthly option-overlay backtests over a simulated price path.
pub mod engine;
pub mod metrics;
pub mod strategies;
