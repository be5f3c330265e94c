// src/analytics/greeks.rs
//! Delta and vega curves for charting.
//!
//! Each curve re-evaluates the closed-form Greek over a linear sweep of one
//! input while holding the others fixed:
//! - **Delta**: spot swept over `[0.5·S, 1.5·S]`, 101 points
//! - **Vega**: volatility swept over `(0.1·σ, 2.0·σ]`, 100 points, reported per
//!   1% volatility move
//!
//! Points whose inputs are degenerate (`T ≤ 0`, `σ ≤ 0`, non-positive spot) are
//! skipped, so both series may be shorter than nominal or empty.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::bs_analytic::{bs_call_delta, bs_vega};
use crate::params::PricingInputs;

pub const DELTA_SAMPLES: usize = 101;
pub const VEGA_SAMPLES: usize = 100;

/// One sample of a Greek curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreeksPoint {
    /// Swept input (spot for delta, volatility for vega)
    pub x: f64,
    pub call_value: f64,
    pub put_value: f64,
}

/// Delta-vs-spot and vega-vs-volatility curves, ordered by increasing `x`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreeksSeries {
    pub delta: Vec<GreeksPoint>,
    pub vega: Vec<GreeksPoint>,
}

/// Generate both Greek curves for `inputs`
///
/// The delta curve is empty when `T <= 0` or `sigma <= 0`, the vega curve when
/// `T <= 0` or `S <= 0`. Swept points with a non-positive spot or volatility
/// are skipped.
pub fn greeks(inputs: &PricingInputs) -> GreeksSeries {
    GreeksSeries {
        delta: delta_curve(inputs),
        vega: vega_curve(inputs),
    }
}

fn delta_curve(inputs: &PricingInputs) -> Vec<GreeksPoint> {
    let PricingInputs { s, k, t, r, sigma, .. } = *inputs;
    if t <= 0.0 || sigma <= 0.0 {
        return Vec::new();
    }

    Array1::linspace(0.5 * s, 1.5 * s, DELTA_SAMPLES)
        .iter()
        .filter(|&&spot| spot > 0.0)
        .map(|&spot| {
            let call_delta = bs_call_delta(spot, k, r, sigma, t);
            GreeksPoint {
                x: spot,
                call_value: call_delta,
                put_value: call_delta - 1.0,
            }
        })
        .collect()
}

fn vega_curve(inputs: &PricingInputs) -> Vec<GreeksPoint> {
    let PricingInputs { s, k, t, r, sigma, .. } = *inputs;
    if t <= 0.0 || s <= 0.0 {
        return Vec::new();
    }

    // 1-indexed sweep: the lower endpoint 0.1σ itself is never sampled
    (1..=VEGA_SAMPLES)
        .map(|i| sigma * 0.1 + sigma * 1.9 * (i as f64 / VEGA_SAMPLES as f64))
        .filter(|&vol| vol > 0.0)
        .map(|vol| {
            let vega_pct = bs_vega(s, k, r, vol, t) / 100.0;
            GreeksPoint {
                x: vol,
                call_value: vega_pct,
                put_value: vega_pct,
            }
        })
        .collect()
}
