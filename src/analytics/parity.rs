// src/analytics/parity.rs
//! Synthetic long call via put-call parity
//!
//! # Mathematical Foundation
//!
//! For European options on a non-dividend stock:
//! ```text
//! C + K*e^(-rT) = P + S
//! ```
//!
//! Holding the stock and a put struck at K replicates a call plus a riskless
//! bond paying K. The expiry P&L of the synthetic position therefore tracks the
//! P&L of an actual call up to a constant:
//! ```text
//! callPL(S_T)      = max(0, S_T - K) - C
//! syntheticPL(S_T) = (S_T - S) + max(0, K - S_T) - P
//! callPL - syntheticPL = S + P - C - K  (independent of S_T)
//! ```

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::bs_analytic::price_bsm;
use crate::params::PricingInputs;
use crate::payoffs::Payoff;

pub const PAYOFF_SAMPLES: usize = 101;

/// Expiry P&L of the actual and synthetic call at one terminal price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffPoint {
    pub stock_price: f64,
    #[serde(rename = "actualCallPL")]
    pub actual_call_pl: f64,
    #[serde(rename = "syntheticCallPL")]
    pub synthetic_call_pl: f64,
}

/// Cost comparison and expiry payoff curves of an actual vs synthetic call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticParity {
    /// BSM call premium
    pub actual_call_cost: f64,
    /// Spot plus BSM put premium
    pub synthetic_call_cost: f64,
    /// BSM put premium
    pub put_cost: f64,
    /// Terminal prices swept over `[0.7·S, 1.3·S]`
    pub payoff_curve: Vec<PayoffPoint>,
}

impl SyntheticParity {
    /// `syntheticCallCost - actualCallCost`, which parity puts at `K*e^(-rT)`
    pub fn cost_difference(&self) -> f64 {
        self.synthetic_call_cost - self.actual_call_cost
    }

    /// `actualCallPL - syntheticCallPL` at each sampled terminal price.
    ///
    /// Every entry equals `cost_difference() - K`, the financing of the strike.
    pub fn pl_spread(&self) -> Vec<f64> {
        self.payoff_curve
            .iter()
            .map(|p| p.actual_call_pl - p.synthetic_call_pl)
            .collect()
    }
}

/// Price both legs with BSM and trace their expiry P&L
pub fn synthetic_parity(inputs: &PricingInputs) -> SyntheticParity {
    let PricingInputs { s, k, .. } = *inputs;
    let premiums = price_bsm(inputs);
    let actual_call_cost = premiums.call;
    let put_cost = premiums.put;

    let call = Payoff::EuropeanCall { k };
    let put = Payoff::EuropeanPut { k };

    let payoff_curve = Array1::linspace(0.7 * s, 1.3 * s, PAYOFF_SAMPLES)
        .iter()
        .map(|&terminal| PayoffPoint {
            stock_price: terminal,
            actual_call_pl: call.at_expiry(terminal) - actual_call_cost,
            synthetic_call_pl: (terminal - s) + put.at_expiry(terminal) - put_cost,
        })
        .collect();

    SyntheticParity {
        actual_call_cost,
        synthetic_call_cost: s + put_cost,
        put_cost,
        payoff_curve,
    }
}

/// Put-call parity residual of the BSM premiums
///
/// ```text
/// (C - P) - (S - K*e^(-rT))
/// ```
///
/// `norm_cdf` is exactly symmetric away from zero, so for non-degenerate inputs
/// the residual is floating-point round-off.
pub fn parity_residual(inputs: &PricingInputs) -> f64 {
    let PricingInputs { s, k, t, r, .. } = *inputs;
    let premiums = price_bsm(inputs);
    (premiums.call - premiums.put) - (s - k * (-r * t).exp())
}
