// src/params.rs
//! Plain input/output records exchanged with the presentation layer.

use serde::{Deserialize, Serialize};

use crate::error::{validation::*, EngineResult};

/// Lattice depth used when `steps` is not supplied.
pub const DEFAULT_LATTICE_STEPS: usize = 50;

/// Inputs shared by every pricing entry point.
///
/// Values are taken as given: non-positive `t`, `sigma` or `s` are legal and
/// price to intrinsic value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    /// Spot price of the underlying
    #[serde(rename = "S")]
    pub s: f64,
    /// Strike price
    #[serde(rename = "K")]
    pub k: f64,
    /// Time to expiry in years
    #[serde(rename = "T")]
    pub t: f64,
    /// Annual risk-free rate (continuously compounded)
    pub r: f64,
    /// Annual volatility
    pub sigma: f64,
    /// Binomial lattice depth; `None` means [`DEFAULT_LATTICE_STEPS`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
}

impl PricingInputs {
    pub fn new(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> Self {
        Self {
            s,
            k,
            t,
            r,
            sigma,
            steps: None,
        }
    }

    pub fn with_steps(self, steps: usize) -> Self {
        Self {
            steps: Some(steps),
            ..self
        }
    }

    /// Lattice depth after applying the default
    pub fn lattice_steps(&self) -> usize {
        self.steps.unwrap_or(DEFAULT_LATTICE_STEPS)
    }

    /// True when the closed-form formula is undefined and intrinsic value applies
    pub fn is_degenerate(&self) -> bool {
        self.t <= 0.0 || self.sigma <= 0.0 || self.s <= 0.0
    }

    /// Reject inputs that have no numeric fallback.
    ///
    /// Degenerate but finite values are accepted.
    pub fn validate(&self) -> EngineResult<()> {
        validate_finite("S", self.s)?;
        validate_finite("K", self.k)?;
        validate_finite("T", self.t)?;
        validate_finite("r", self.r)?;
        validate_finite("sigma", self.sigma)?;
        if let Some(steps) = self.steps {
            validate_steps(steps)?;
        }
        Ok(())
    }
}

impl Default for PricingInputs {
    fn default() -> Self {
        PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2)
    }
}

/// Call and put premiums
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionResult {
    pub call: f64,
    pub put: f64,
}

impl OptionResult {
    /// Expiry payoff of a call and a put struck at `k`
    pub fn intrinsic(s: f64, k: f64) -> Self {
        OptionResult {
            call: (s - k).max(0.0),
            put: (k - s).max(0.0),
        }
    }

    pub fn zero() -> Self {
        OptionResult::default()
    }
}
