use super::R_V;
use crate::error::AttenuationError;
use crate::models::{AttenuationModel, FittableModel, assign_all};
use crate::params::Parameter;
use crate::validation::{XRange, check_x_range};

const MODEL_NAME: &str = "L02";
const X_RANGE: XRange = XRange::new(0.097, 0.18);

/// Leitherer et al. (2002) far-UV extension of the starburst curve.
#[derive(Debug, Clone)]
pub struct L02 {
    av: Parameter,
}

impl L02 {
    pub fn new(av: f64) -> Result<Self, AttenuationError> {
        Ok(L02 {
            av: Parameter::av(av)?,
        })
    }

    pub fn av(&self) -> f64 {
        self.av.value()
    }

    pub fn set_av(&mut self, av: f64) -> Result<(), AttenuationError> {
        self.av.set(av)
    }
}

pub(crate) fn k(l: f64) -> f64 {
    let x = 1.0 / l;
    5.472 + 0.671 * x - 9.218e-3 * x.powi(2) + 2.620e-3 * x.powi(3)
}

impl AttenuationModel for L02 {
    fn name(&self) -> &str {
        MODEL_NAME
    }

    fn x_range(&self) -> XRange {
        X_RANGE
    }

    fn evaluate(&self, wavelengths: &[f64]) -> Result<Vec<f64>, AttenuationError> {
        check_x_range(wavelengths, X_RANGE, MODEL_NAME)?;
        let av = self.av.value();
        Ok(wavelengths.iter().map(|&l| k(l) / R_V * av).collect())
    }
}

impl FittableModel for L02 {
    fn parameters(&self) -> Vec<Parameter> {
        vec![self.av]
    }

    fn set_parameters(&mut self, values: &[f64]) -> Result<(), AttenuationError> {
        assign_all(MODEL_NAME, &mut [&mut self.av], values)
    }
}
