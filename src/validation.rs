use crate::error::AttenuationError;

/// Inclusive support interval of a model, in the model's native unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XRange {
    pub min: f64,
    pub max: f64,
}

impl XRange {
    pub const fn new(min: f64, max: f64) -> Self {
        XRange { min, max }
    }

    /// NaN is never contained.
    pub fn contains(&self, x: f64) -> bool {
        (self.min..=self.max).contains(&x)
    }
}

/// Rejects wavelengths outside `range`, reporting every offending value.
///
/// # Example
/// ```
/// use dust_attenuation::validation::{XRange, check_x_range};
///
/// let range = XRange::new(0.12, 2.2);
/// assert!(check_x_range(&[0.12, 1.0, 2.2], range, "C00").is_ok());
/// assert!(check_x_range(&[0.1], range, "C00").is_err());
/// ```
pub fn check_x_range(x: &[f64], range: XRange, model: &str) -> Result<(), AttenuationError> {
    check_range(x, range, model, "x", "micron")
}

/// Same as [`check_x_range`] for an arbitrary named quantity.
pub fn check_range(
    values: &[f64],
    range: XRange,
    model: &str,
    quantity: &'static str,
    unit: &'static str,
) -> Result<(), AttenuationError> {
    let offending: Vec<f64> = values
        .iter()
        .copied()
        .filter(|&v| !range.contains(v))
        .collect();

    if offending.is_empty() {
        Ok(())
    } else {
        Err(AttenuationError::OutOfRange {
            model: model.to_string(),
            quantity,
            unit,
            min: range.min,
            max: range.max,
            offending,
        })
    }
}
