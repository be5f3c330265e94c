// src/error.rs
use thiserror::Error;

/// Error type for the optionlab engine.
///
/// Degenerate pricing inputs (expired, zero volatility, non-positive spot) and
/// arbitrage-inconsistent lattices are not errors: they resolve to well-defined
/// values. Only inputs with no sensible numeric fallback end up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A numeric input violates a hard constraint
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// A structural configuration field is unusable
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// A computed quantity became non-finite
    #[error("Numerical instability in {method}: {reason}")]
    NumericalInstability { method: String, reason: String },
}

/// Result type alias for optionlab operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Validation utilities
pub mod validation {
    use super::{EngineError, EngineResult};

    /// Largest lattice depth accepted before allocation.
    pub const MAX_LATTICE_STEPS: usize = 10_000;

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> EngineResult<()> {
        if value > 0.0 {
            Ok(())
        } else {
            Err(EngineError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> EngineResult<()> {
        if value >= 0.0 {
            Ok(())
        } else {
            Err(EngineError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> EngineResult<()> {
        if !value.is_finite() {
            Err(EngineError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a lattice step count
    pub fn validate_steps(steps: usize) -> EngineResult<()> {
        if steps == 0 {
            Err(EngineError::InvalidParameter {
                parameter: "steps".to_string(),
                value: 0.0,
                constraint: "must be at least 1".to_string(),
            })
        } else if steps > MAX_LATTICE_STEPS {
            Err(EngineError::InvalidParameter {
                parameter: "steps".to_string(),
                value: steps as f64,
                constraint: format!("exceeds maximum allowed ({})", MAX_LATTICE_STEPS),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("start_price", 100.0).is_ok());
        assert!(validate_positive("start_price", 0.0).is_err());
        assert!(validate_positive("start_price", -1.0).is_err());
        assert!(validate_positive("start_price", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("annual_vol", 0.0).is_ok());
        assert!(validate_non_negative("annual_vol", 0.25).is_ok());
        assert!(validate_non_negative("annual_vol", -0.01).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("r", 0.05).is_ok());
        assert!(validate_finite("r", f64::NAN).is_err());
        assert!(validate_finite("r", f64::INFINITY).is_err());
        assert!(validate_finite("r", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_steps_bounds() {
        assert!(validate_steps(1).is_ok());
        assert!(validate_steps(MAX_LATTICE_STEPS).is_ok());
        assert!(validate_steps(0).is_err());
        assert!(validate_steps(MAX_LATTICE_STEPS + 1).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = EngineError::InvalidParameter {
            parameter: "sigma".to_string(),
            value: -0.1,
            constraint: "must be non-negative".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("sigma"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("non-negative"));
    }

    #[test]
    fn test_configuration_error_display() {
        let error = EngineError::InvalidConfiguration {
            field: "years".to_string(),
            reason: "must be greater than 0".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration for 'years': must be greater than 0"
        );
    }
}
