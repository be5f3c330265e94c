// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes-Merton formulas for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! For European options the risk-neutral expectation has closed-form
//! solutions involving the cumulative normal distribution function Φ(x).
//!
//! # Degenerate Inputs
//!
//! When `T ≤ 0`, `σ ≤ 0` or `S ≤ 0` the formula would divide by zero or take
//! the log of a non-positive number. Those inputs price to intrinsic value,
//! which is the expiry and zero-volatility limit of the model.

use crate::math_utils::{norm_cdf, norm_pdf};
use crate::params::{OptionResult, PricingInputs};

/// The `d₁` term of the Black-Scholes formula
///
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// ```
pub fn d1(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt())
}

/// Black-Scholes-Merton European call and put premiums
///
/// # Formula
/// ```text
/// C = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// P = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// d₂ = d₁ - σ√T
/// ```
///
/// Degenerate inputs return `max(0, S-K)` / `max(0, K-S)`.
pub fn price_bsm(inputs: &PricingInputs) -> OptionResult {
    let PricingInputs { s, k, t, r, sigma, .. } = *inputs;
    if inputs.is_degenerate() {
        tracing::debug!(s, k, t, sigma, "bsm inputs degenerate, pricing at intrinsic value");
        return OptionResult::intrinsic(s, k);
    }

    let d1 = d1(s, k, r, sigma, t);
    let d2 = d1 - sigma * t.sqrt();
    let discounted_strike = k * (-r * t).exp();

    OptionResult {
        call: s * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        put: discounted_strike * norm_cdf(-d2) - s * norm_cdf(-d1),
    }
}

/// Black-Scholes Delta (∂C/∂S) for a European call
///
/// ```text
/// Δ_call = Φ(d₁),   Δ_put = Δ_call - 1
/// ```
pub fn bs_call_delta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    norm_cdf(d1(s, k, r, sigma, t))
}

/// Black-Scholes Vega (∂V/∂σ), identical for calls and puts
///
/// ```text
/// ν = S * φ(d₁) * √T
/// ```
///
/// Raw sensitivity per unit of volatility; divide by 100 for a 1% move.
pub fn bs_vega(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    s * t.sqrt() * norm_pdf(d1(s, k, r, sigma, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_atm_reference_prices() {
        // S = K = 100, T = 1, r = 5%, σ = 20%
        let result = price_bsm(&PricingInputs::default());
        assert_abs_diff_eq!(result.call, 10.4506, epsilon = 1e-3);
        assert_abs_diff_eq!(result.put, 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn test_expired_prices_at_intrinsic() {
        let itm = PricingInputs::new(120.0, 100.0, 0.0, 0.05, 0.2);
        assert_eq!(price_bsm(&itm), OptionResult { call: 20.0, put: 0.0 });

        let otm = PricingInputs::new(80.0, 100.0, 0.0, 0.05, 0.2);
        assert_eq!(price_bsm(&otm), OptionResult { call: 0.0, put: 20.0 });
    }

    #[test]
    fn test_zero_volatility_prices_at_intrinsic() {
        let inputs = PricingInputs::new(105.0, 100.0, 1.0, 0.05, 0.0);
        assert_eq!(price_bsm(&inputs), OptionResult { call: 5.0, put: 0.0 });
    }

    #[test]
    fn test_non_positive_spot_prices_at_intrinsic() {
        let inputs = PricingInputs::new(0.0, 100.0, 1.0, 0.05, 0.2);
        assert_eq!(price_bsm(&inputs), OptionResult { call: 0.0, put: 100.0 });
    }

    #[test]
    fn test_premiums_non_negative_far_from_money() {
        for &s in &[1.0, 20.0, 60.0, 100.0, 180.0, 500.0] {
            let result = price_bsm(&PricingInputs::new(s, 100.0, 0.5, 0.03, 0.25));
            assert!(result.call >= -1e-9, "call = {} at S = {}", result.call, s);
            assert!(result.put >= -1e-9, "put = {} at S = {}", result.put, s);
        }
    }

    #[test]
    fn test_vega_reference_value() {
        let vega = bs_vega(100.0, 100.0, 0.05, 0.2, 1.0);
        assert_abs_diff_eq!(vega, 37.524034691693792, epsilon = 1e-4);
    }
}
