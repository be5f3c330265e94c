//! Option Payoff Functions
//!
//! # Mathematical Definitions
//!
//! Expiry payoffs of the European contracts used across the engine: the
//! lattice terminal layer, the synthetic-parity curves and the monthly
//! strategy settlement.
//!
//! - **Call**: max(S_T - K, 0) - right to buy at strike K
//! - **Put**: max(K - S_T, 0) - right to sell at strike K
//! - **Straddle**: call + put at the same strike, |S_T - K|

use serde::{Deserialize, Serialize};

/// Enumeration of supported expiry payoffs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Payoff {
    /// European call option: max(S_T - K, 0)
    EuropeanCall { k: f64 },

    /// European put option: max(K - S_T, 0)
    EuropeanPut { k: f64 },

    /// Long straddle: max(S_T - K, 0) + max(K - S_T, 0)
    Straddle { k: f64 },
}

impl Payoff {
    /// Non-negative payoff for a terminal price `s_t`
    pub fn at_expiry(&self, s_t: f64) -> f64 {
        match *self {
            Payoff::EuropeanCall { k } => (s_t - k).max(0.0),
            Payoff::EuropeanPut { k } => (k - s_t).max(0.0),
            Payoff::Straddle { k } => (s_t - k).max(0.0) + (k - s_t).max(0.0),
        }
    }
}
