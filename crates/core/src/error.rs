//! Error taxonomy for impact calculations
//!
//! Every failure is local to a single call. There is no partial result and no
//! degraded mode: a calculation either produces a complete, finite
//! [`ImpactResult`](crate::core_types::ImpactResult) or one of these errors.

/// Errors that can occur while validating inputs or computing an impact
#[derive(Debug, Clone, PartialEq)]
pub enum ImpactError {
    /// An entry parameter is outside the domain the formulas are defined on
    InvalidParameter {
        /// Parameter name (e.g., `"diameter"`, `"composition"`)
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },
    /// A computed quantity evaluated to NaN or ±infinity
    NonFiniteResult {
        /// Name of the quantity that went non-finite
        quantity: &'static str,
        /// The offending value
        value: f64,
    },
    /// A computed quantity that must be positive came out zero or negative,
    /// e.g. kinetic energy of a body so small its mass underflows
    DegenerateResult {
        quantity: &'static str,
        value: f64,
    },
    /// The model configuration table failed validation
    InvalidConfig {
        /// Dotted path of the offending field (e.g., `"atmosphere.scale_height"`)
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },
    /// A near-Earth-object catalog record could not be parsed or converted
    Catalog(String),
}

impl ImpactError {
    /// Create error for an invalid entry parameter.
    ///
    /// # Arguments
    /// * `name` - The name of the invalid parameter
    /// * `reason` - A description of the validation error
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        ImpactError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Create error for an invalid configuration field.
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        ImpactError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Fail with [`ImpactError::NonFiniteResult`] unless `value` is finite.
    ///
    /// Returns the value unchanged so it can be used inline with `?`.
    pub fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, ImpactError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ImpactError::NonFiniteResult { quantity, value })
        }
    }

    /// Fail with [`ImpactError::DegenerateResult`] unless `value` is strictly positive.
    pub fn ensure_positive(quantity: &'static str, value: f64) -> Result<f64, ImpactError> {
        if value > 0.0 {
            Ok(value)
        } else {
            Err(ImpactError::DegenerateResult { quantity, value })
        }
    }
}

impl std::fmt::Display for ImpactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImpactError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{name}': {reason}")
            }
            ImpactError::NonFiniteResult { quantity, value } => {
                write!(f, "Computation produced non-finite {quantity}: {value}")
            }
            ImpactError::DegenerateResult { quantity, value } => {
                write!(f, "Computation produced non-positive {quantity}: {value}")
            }
            ImpactError::InvalidConfig { field, reason } => {
                write!(f, "Invalid model configuration {field}: {reason}")
            }
            ImpactError::Catalog(msg) => write!(f, "Catalog record error: {msg}"),
        }
    }
}

impl std::error::Error for ImpactError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite_passes_through() {
        assert_eq!(ImpactError::ensure_finite("energy", 1.5), Ok(1.5));
    }

    #[test]
    fn test_ensure_finite_rejects_nan_and_infinity() {
        assert!(matches!(
            ImpactError::ensure_finite("energy", f64::NAN),
            Err(ImpactError::NonFiniteResult { quantity: "energy", .. })
        ));
        assert!(matches!(
            ImpactError::ensure_finite("thermal radius", f64::NEG_INFINITY),
            Err(ImpactError::NonFiniteResult { .. })
        ));
    }

    #[test]
    fn test_ensure_positive_rejects_zero() {
        assert_eq!(ImpactError::ensure_positive("kinetic energy", 2.0), Ok(2.0));
        assert!(matches!(
            ImpactError::ensure_positive("kinetic energy", 0.0),
            Err(ImpactError::DegenerateResult { quantity: "kinetic energy", .. })
        ));
    }

    #[test]
    fn test_display_messages() {
        let err = ImpactError::invalid_parameter("diameter", "must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'diameter': must be positive, got 0"
        );

        let err = ImpactError::invalid_config("atmosphere.scale_height", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid model configuration atmosphere.scale_height: must be positive"
        );
    }
}
