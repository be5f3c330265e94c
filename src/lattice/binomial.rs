// src/lattice/binomial.rs
//! Cox-Ross-Rubinstein binomial lattice for European options
//!
//! # Algorithm
//!
//! ```text
//! dt = T / N,   u = e^(σ√dt),   d = 1/u
//! p  = (e^(r·dt) - d) / (u - d)
//! S(i, N) = S * u^(N-i) * d^i              (i = number of down moves)
//! V(i, j) = e^(-r·dt) * [p V(i, j+1) + (1-p) V(i+1, j+1)]
//! ```
//!
//! Only `V(0, 0)` is observable, so backward induction runs on a single rolling
//! layer of `N + 1` values instead of the full `(N+1)×(N+1)` lattice: `O(N²)`
//! time, `O(N)` memory.
//!
//! # Arbitrage Guard
//!
//! When `p ∉ [0, 1]` (e.g. `r·dt` large relative to `σ√dt`) the tree admits
//! arbitrage and its "probabilities" are meaningless. Both premiums are then
//! reported as zero instead of a valuation under a negative measure.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analytics::bs_analytic::price_bsm;
use crate::error::{validation::validate_steps, EngineError, EngineResult};
use crate::params::{OptionResult, PricingInputs};
use crate::payoffs::Payoff;

/// Per-step parameters of a CRR lattice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeParams {
    pub steps: usize,
    pub dt: f64,
    /// Up factor
    pub u: f64,
    /// Down factor, `1/u`
    pub d: f64,
    /// Risk-neutral probability of an up move
    pub p: f64,
    /// One-step discount factor `e^(-r·dt)`
    pub discount: f64,
}

impl LatticeParams {
    pub fn new(inputs: &PricingInputs, steps: usize) -> Self {
        let dt = inputs.t / steps as f64;
        let u = (inputs.sigma * dt.sqrt()).exp();
        let d = 1.0 / u;
        let p = ((inputs.r * dt).exp() - d) / (u - d);
        LatticeParams {
            steps,
            dt,
            u,
            d,
            p,
            discount: (-inputs.r * dt).exp(),
        }
    }

    pub fn is_arbitrage_free(&self) -> bool {
        self.p.is_finite() && (0.0..=1.0).contains(&self.p)
    }

    /// Node price after `steps - downs` up moves and `downs` down moves.
    ///
    /// Taken in log space: `u^a * d^b` would overflow to `inf * 0` on deep,
    /// high-volatility lattices.
    fn terminal_price(&self, spot: f64, downs: usize) -> f64 {
        let net_ups = self.steps as f64 - 2.0 * downs as f64;
        spot * (self.u.ln() * net_ups).exp()
    }

    fn backward_induct(&self, spot: f64, payoff: Payoff) -> f64 {
        let n = self.steps;
        let mut values: Vec<f64> = (0..=n)
            .map(|downs| payoff.at_expiry(self.terminal_price(spot, downs)))
            .collect();

        // values[i + 1] is still the old layer when values[i] is overwritten
        for j in (0..n).rev() {
            for i in 0..=j {
                values[i] = self.discount * (self.p * values[i] + (1.0 - self.p) * values[i + 1]);
            }
        }
        values[0]
    }
}

/// Binomial-lattice European call and put premiums
///
/// # Errors
///
/// `InvalidParameter` for non-finite inputs or a step count outside
/// `1..=MAX_LATTICE_STEPS`. Degenerate inputs price to intrinsic value and an
/// arbitrage-inconsistent lattice prices to zero; neither is an error.
pub fn price_binomial(inputs: &PricingInputs) -> EngineResult<OptionResult> {
    inputs.validate()?;
    let steps = inputs.lattice_steps();
    validate_steps(steps)?;

    let PricingInputs { s, k, .. } = *inputs;
    if inputs.is_degenerate() {
        tracing::debug!(
            s,
            k,
            t = inputs.t,
            sigma = inputs.sigma,
            "lattice inputs degenerate, pricing at intrinsic value"
        );
        return Ok(OptionResult::intrinsic(s, k));
    }

    let params = LatticeParams::new(inputs, steps);
    if !params.is_arbitrage_free() {
        tracing::warn!(
            p = params.p,
            u = params.u,
            d = params.d,
            steps,
            "risk-neutral probability outside [0, 1], lattice priced at zero"
        );
        return Ok(OptionResult::zero());
    }

    let result = OptionResult {
        call: params.backward_induct(s, Payoff::EuropeanCall { k }),
        put: params.backward_induct(s, Payoff::EuropeanPut { k }),
    };
    if !result.call.is_finite() || !result.put.is_finite() {
        return Err(EngineError::NumericalInstability {
            method: "binomial lattice".to_string(),
            reason: format!(
                "non-finite premiums (call = {}, put = {}) at {} steps",
                result.call, result.put, steps
            ),
        });
    }
    Ok(result)
}

/// Lattice premiums at one depth against the closed-form reference
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvergencePoint {
    pub steps: usize,
    pub call: f64,
    pub put: f64,
    /// `|call - BSM call|`
    pub call_error: f64,
    /// `|put - BSM put|`
    pub put_error: f64,
}

/// Price the lattice at each depth in `step_counts` and compare with BSM.
///
/// Depths are priced in parallel; output order matches `step_counts`.
pub fn binomial_convergence(
    inputs: &PricingInputs,
    step_counts: &[usize],
) -> EngineResult<Vec<ConvergencePoint>> {
    inputs.validate()?;
    for &steps in step_counts {
        validate_steps(steps)?;
    }
    let reference = price_bsm(inputs);

    step_counts
        .par_iter()
        .map(|&steps| {
            let lattice = price_binomial(&inputs.with_steps(steps))?;
            let point = ConvergencePoint {
                steps,
                call: lattice.call,
                put: lattice.put,
                call_error: (lattice.call - reference.call).abs(),
                put_error: (lattice.put - reference.put).abs(),
            };
            tracing::debug!(
                steps,
                call_error = point.call_error,
                put_error = point.put_error,
                "lattice convergence row"
            );
            Ok(point)
        })
        .collect()
}
