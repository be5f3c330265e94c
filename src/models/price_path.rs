// src/models/price_path.rs
//! Daily price path under a drift-plus-shock model
//!
//! ```text
//! dt      = 1/252
//! shock_t = σ √dt Z_t,            Z_t ~ ScaledUniform (mean 0, variance 1)
//! S_{t+1} = S_t * exp(μ dt + shock_t)
//! ```
//!
//! The shock is a rescaled uniform draw rather than a Gaussian one, and the
//! exponent carries no `-σ²/2` correction. Both are kept as-is: backtest
//! fixtures are built against exactly this distribution.

use rand::Rng;

use crate::error::{validation::*, EngineError, EngineResult};
use crate::rng::get_uniform_shock;

pub const TRADING_DAYS_PER_YEAR: usize = 252;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePathModel {
    pub start_price: f64,
    /// Annualised drift μ
    pub annual_drift: f64,
    /// Annualised volatility σ
    pub annual_vol: f64,
    pub trading_days_per_year: usize,
}

impl PricePathModel {
    pub fn new(start_price: f64, annual_drift: f64, annual_vol: f64) -> EngineResult<Self> {
        let model = PricePathModel {
            start_price,
            annual_drift,
            annual_vol,
            trading_days_per_year: TRADING_DAYS_PER_YEAR,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> EngineResult<()> {
        validate_finite("start_price", self.start_price)?;
        validate_positive("start_price", self.start_price)?;
        validate_finite("annual_drift", self.annual_drift)?;
        validate_finite("annual_vol", self.annual_vol)?;
        validate_non_negative("annual_vol", self.annual_vol)?;
        if self.trading_days_per_year == 0 {
            return Err(EngineError::InvalidConfiguration {
                field: "trading_days_per_year".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    pub fn dt(&self) -> f64 {
        1.0 / self.trading_days_per_year as f64
    }

    /// Advance one trading day given a unit-variance shock draw
    pub fn step(&self, price: f64, unit_shock: f64) -> f64 {
        let dt = self.dt();
        let shock = self.annual_vol * dt.sqrt() * unit_shock;
        price * (self.annual_drift * dt + shock).exp()
    }

    /// Simulate `years * trading_days_per_year` daily prices.
    ///
    /// `path[0]` is the start price; each later day consumes one uniform draw
    /// from `rng`.
    pub fn simulate<R: Rng + ?Sized>(&self, years: usize, rng: &mut R) -> EngineResult<Vec<f64>> {
        self.validate()?;
        if years == 0 {
            return Err(EngineError::InvalidConfiguration {
                field: "years".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        let len = years * self.trading_days_per_year;
        let mut path = Vec::with_capacity(len);
        path.push(self.start_price);

        let mut current = self.start_price;
        for _ in 1..len {
            current = self.step(current, get_uniform_shock(rng));
            path.push(current);
        }
        Ok(path)
    }
}
