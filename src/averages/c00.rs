use super::R_V;
use crate::error::AttenuationError;
use crate::models::{AttenuationModel, FittableModel, assign_all};
use crate::params::Parameter;
use crate::validation::{XRange, check_x_range};

const MODEL_NAME: &str = "C00";
const X_RANGE: XRange = XRange::new(0.12, 2.2);

/// Calzetti et al. (2000) starburst attenuation curve.
///
/// `A(λ) = k(λ) / R_V * Av` with `R_V = 4.05`, valid from 0.12 to 2.2 micron.
#[derive(Debug, Clone)]
pub struct C00 {
    av: Parameter,
}

impl C00 {
    pub fn new(av: f64) -> Result<Self, AttenuationError> {
        Ok(C00 {
            av: Parameter::av(av)?,
        })
    }

    /// From the colour excess, `Av = R_V * E(B-V)`.
    pub fn from_ebv(ebv: f64) -> Result<Self, AttenuationError> {
        Self::new(R_V * ebv)
    }

    pub fn av(&self) -> f64 {
        self.av.value()
    }

    pub fn set_av(&mut self, av: f64) -> Result<(), AttenuationError> {
        self.av.set(av)
    }

    /// `k(λ) = A(λ) / E(B-V)`, checked against the supported range.
    pub fn k_lambda(wavelengths: &[f64]) -> Result<Vec<f64>, AttenuationError> {
        check_x_range(wavelengths, X_RANGE, MODEL_NAME)?;
        Ok(wavelengths.iter().map(|&l| k(l)).collect())
    }
}

/// Unchecked `k(λ)`; `l` in micron.
pub(crate) fn k(l: f64) -> f64 {
    let x = 1.0 / l;
    if l < 0.63 {
        2.659 * (-2.156 + 1.509 * x - 0.198 * x.powi(2) + 0.011 * x.powi(3)) + R_V
    } else {
        2.659 * (-1.857 + 1.040 * x) + R_V
    }
}

impl AttenuationModel for C00 {
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

impl FittableModel for C00 {
    fn parameters(&self) -> Vec<Parameter> {
        vec![self.av]
    }

    fn set_parameters(&mut self, values: &[f64]) -> Result<(), AttenuationError> {
        assign_all(MODEL_NAME, &mut [&mut self.av], values)
    }
}
