use super::{ShapeParameters, X_RANGE, power_law, starburst_k};
use crate::averages::R_V;
use crate::error::AttenuationError;
use crate::models::{AttenuationModel, FittableModel};
use crate::params::Parameter;
use crate::validation::{XRange, check_x_range};

const MODEL_NAME: &str = "N09";

/// Noll et al. (2009): starburst continuum plus UV bump, both tilted by the
/// power law.
#[derive(Debug, Clone, Default)]
pub struct N09 {
    params: ShapeParameters,
}

impl N09 {
    pub fn new(x0: f64, gamma: f64, ampl: f64, slope: f64, av: f64) -> Result<Self, AttenuationError> {
        Ok(N09 {
            params: ShapeParameters::new(x0, gamma, ampl, slope, av)?,
        })
    }

    pub fn from_parameters(params: ShapeParameters) -> Self {
        N09 { params }
    }

    pub fn shape(&self) -> &ShapeParameters {
        &self.params
    }

    /// `k'(λ)` without the `Av / R_V` scaling.
    pub fn k_prime(&self, l: f64) -> f64 {
        (starburst_k(l) + self.params.bump(l)) * power_law(l, self.params.slope())
    }
}

impl AttenuationModel for N09 {
    fn name(&self) -> &str {
        MODEL_NAME
    }

    fn x_range(&self) -> XRange {
        X_RANGE
    }

    fn evaluate(&self, wavelengths: &[f64]) -> Result<Vec<f64>, AttenuationError> {
        check_x_range(wavelengths, X_RANGE, MODEL_NAME)?;
        let av = self.params.av();
        Ok(wavelengths
            .iter()
            .map(|&l| self.k_prime(l) / R_V * av)
            .collect())
    }
}

impl FittableModel for N09 {
    fn parameters(&self) -> Vec<Parameter> {
        self.params.to_vec()
    }

    fn set_parameters(&mut self, values: &[f64]) -> Result<(), AttenuationError> {
        self.params.assign(MODEL_NAME, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAVELENGTHS: [f64; 4] = [0.1, 0.2175, 0.55, 1.5];

    fn assert_close(values: &[f64], expected: &[f64]) {
        for (v, e) in values.iter().zip(expected) {
            assert!((v - e).abs() < 1e-10, "got {v}, expected {e}");
        }
    }

    #[test]
    fn test_bump_and_slope() {
        let model = N09::new(0.2175, 0.035, 3.5, -0.5, 1.0).unwrap();
        let values = model.evaluate(&WAVELENGTHS).unwrap();
        assert_close(
            &values,
            &[8.05520283067021, 4.703317265367606, 1.0043686713706768, 0.1432037483968722],
        );
    }

    #[test]
    fn test_defaults_reduce_to_starburst_continuum() {
        let model = N09::default();
        let values = model.evaluate(&WAVELENGTHS).unwrap();
        assert_close(
            &values,
            &[3.42720987654321, 2.093491844450852, 0.9994791062136512, 0.23600255144032925],
        );
    }

    #[test]
    fn test_av_zero_and_linearity() {
        let base = N09::new(0.2175, 0.035, 2.0, 0.3, 1.0).unwrap();
        let zero = base.evaluate_with(&[0.2175, 0.035, 2.0, 0.3, 0.0], &WAVELENGTHS).unwrap();
        assert!(zero.iter().all(|&v| v == 0.0));

        let one = base.evaluate(&WAVELENGTHS).unwrap();
        let scaled = base.evaluate_with(&[0.2175, 0.035, 2.0, 0.3, 2.5], &WAVELENGTHS).unwrap();
        for (a, b) in one.iter().zip(&scaled) {
            assert!((2.5 * a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_support_range() {
        let model = N09::default();
        let values = model.evaluate(&[0.097, 2.2]).unwrap();
        assert!(values.iter().all(|v| v.is_finite() && *v > 0.0));
        assert!(model.evaluate(&[0.096]).is_err());
        assert!(model.evaluate(&[2.21]).is_err());
    }

    #[test]
    fn test_parameter_interface() {
        let mut model = N09::default();
        assert_eq!(model.parameter_names(), vec!["x0", "gamma", "ampl", "slope", "Av"]);
        assert_eq!(model.parameter_values(), vec![0.2175, 0.035, 0.0, 0.0, 1.0]);

        let err = model.set_parameters(&[0.22, 0.04, 1.0, -4.0, 1.0]).unwrap_err();
        assert!(matches!(err, AttenuationError::InvalidParameter { name: "slope", .. }));
        assert_eq!(model.parameter_values(), vec![0.2175, 0.035, 0.0, 0.0, 1.0]);

        assert!(model.set_parameters(&[0.22, 0.04]).is_err());

        model.set_parameters(&[0.22, 0.04, 1.0, -1.0, 2.0]).unwrap();
        assert_eq!(model.shape().ampl(), 1.0);
        assert_eq!(model.shape().av(), 2.0);
    }
}
