//! Bounded model parameters.
//!
//! Every physical parameter of a model carries the interval it may take. The
//! interval is checked on construction and on every assignment, and it is
//! exposed so that an external optimizer can constrain its search.

use std::fmt;

use crate::error::AttenuationError;

/// Valid interval of a parameter. `None` means unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub const fn non_negative() -> Self {
        Bounds {
            min: Some(0.0),
            max: None,
        }
    }

    pub const fn between(min: f64, max: f64) -> Self {
        Bounds {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Inclusive on both ends; NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "between {:?} and {:?}", min, max),
            (Some(min), None) if min == 0.0 => write!(f, "non-negative"),
            (Some(min), None) => write!(f, ">= {:?}", min),
            (None, Some(max)) => write!(f, "<= {:?}", max),
            (None, None) => write!(f, "finite"),
        }
    }
}

/// A named, bounded model parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameter {
    name: &'static str,
    description: &'static str,
    value: f64,
    bounds: Bounds,
}

impl Parameter {
    pub fn new(
        name: &'static str,
        description: &'static str,
        value: f64,
        bounds: Bounds,
    ) -> Result<Self, AttenuationError> {
        validate(name, value, bounds)?;
        Ok(Parameter {
            name,
            description,
            value,
            bounds,
        })
    }

    /// For defaults known to lie inside `bounds`.
    pub(crate) const fn new_unchecked(
        name: &'static str,
        description: &'static str,
        value: f64,
        bounds: Bounds,
    ) -> Self {
        Parameter {
            name,
            description,
            value,
            bounds,
        }
    }

    /// Total V-band attenuation in magnitudes, `Av >= 0`.
    pub fn av(value: f64) -> Result<Self, AttenuationError> {
        Parameter::new("Av", "V-band attenuation [mag]", value, Bounds::non_negative())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Assigns `value`, leaving the parameter untouched when it is rejected.
    pub fn set(&mut self, value: f64) -> Result<(), AttenuationError> {
        self.check(value)?;
        self.value = value;
        Ok(())
    }

    pub fn check(&self, value: f64) -> Result<(), AttenuationError> {
        validate(self.name, value, self.bounds)
    }
}

fn validate(name: &'static str, value: f64, bounds: Bounds) -> Result<(), AttenuationError> {
    if value.is_finite() && bounds.contains(value) {
        Ok(())
    } else {
        Err(AttenuationError::InvalidParameter {
            name,
            requirement: bounds.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_rejects_negative_values() {
        for invalid in [-1.0, -0.00001, -10.0] {
            let err = Parameter::new("Av", "attenuation in V band", invalid, Bounds::non_negative())
                .unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("parameter Av must be non-negative (got {})", invalid)
            );
        }
    }

    #[test]
    fn test_between_message() {
        let err = Parameter::new("slope", "power law slope", 10.0, Bounds::between(-3.0, 3.0))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "parameter slope must be between -3.0 and 3.0 (got 10)"
        );
    }

    #[test]
    fn test_rejected_set_keeps_previous_value() {
        let mut tau_v =
            Parameter::new("tau_V", "optical depth", 1.0, Bounds::between(0.25, 50.0)).unwrap();

        assert!(tau_v.set(60.0).is_err());
        assert_eq!(tau_v.value(), 1.0);

        tau_v.set(50.0).unwrap();
        assert_eq!(tau_v.value(), 50.0);
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(!Bounds::non_negative().contains(f64::NAN));
        assert!(Parameter::new("Av", "", f64::NAN, Bounds::non_negative()).is_err());
        assert!(Parameter::new("Av", "", f64::INFINITY, Bounds::non_negative()).is_err());
    }
}
