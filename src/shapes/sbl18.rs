use super::{ShapeParameters, X_RANGE, power_law, starburst_k};
use crate::averages::R_V;
use crate::error::AttenuationError;
use crate::models::{AttenuationModel, FittableModel};
use crate::params::Parameter;
use crate::validation::{XRange, check_x_range};

const MODEL_NAME: &str = "SBL18";

/// Salim, Boquien & Lee (2018): as [`super::N09`] but the UV bump is added
/// after the power-law tilt.
#[derive(Debug, Clone, Default)]
pub struct Sbl18 {
    params: ShapeParameters,
}

impl Sbl18 {
    pub fn new(x0: f64, gamma: f64, ampl: f64, slope: f64, av: f64) -> Result<Self, AttenuationError> {
        Ok(Sbl18 {
            params: ShapeParameters::new(x0, gamma, ampl, slope, av)?,
        })
    }

    pub fn from_parameters(params: ShapeParameters) -> Self {
        Sbl18 { params }
    }

    pub fn shape(&self) -> &ShapeParameters {
        &self.params
    }

    pub fn k_prime(&self, l: f64) -> f64 {
        starburst_k(l) * power_law(l, self.params.slope()) + self.params.bump(l)
    }
}

impl AttenuationModel for Sbl18 {
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

impl FittableModel for Sbl18 {
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
    use crate::shapes::N09;

    const WAVELENGTHS: [f64; 4] = [0.1, 0.2175, 0.55, 1.5];

    #[test]
    fn test_bump_and_slope() {
        let model = Sbl18::new(0.2175, 0.035, 3.5, -0.5, 1.0).unwrap();
        let values = model.evaluate(&WAVELENGTHS).unwrap();
        let expected = [8.045059759814439, 4.193267993465817, 1.0043686713706768, 0.14339729726975825];

        for (v, e) in values.iter().zip(expected) {
            assert!((v - e).abs() < 1e-10, "got {v}, expected {e}");
        }
    }

    #[test]
    fn test_matches_n09_without_slope() {
        let params = ShapeParameters::new(0.2175, 0.035, 3.5, 0.0, 1.3).unwrap();
        let sbl18 = Sbl18::from_parameters(params).evaluate(&WAVELENGTHS).unwrap();
        let n09 = N09::from_parameters(params).evaluate(&WAVELENGTHS).unwrap();

        for (a, b) in sbl18.iter().zip(&n09) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_bump_is_not_tilted() {
        let flat = Sbl18::new(0.2175, 0.035, 0.0, -0.5, 1.0).unwrap();
        let bumped = Sbl18::new(0.2175, 0.035, 3.5, -0.5, 1.0).unwrap();

        let diff = bumped.k_prime(0.2175) - flat.k_prime(0.2175);
        assert!((diff - 3.5).abs() < 1e-12, "{diff}");
    }

    #[test]
    fn test_outputs_are_finite_and_non_negative() {
        let model = Sbl18::new(0.2175, 0.035, 3.5, 3.0, 2.0).unwrap();
        let wavelengths: Vec<f64> = (0..=100).map(|i| 0.097 + 0.02 * i as f64).collect();
        let wavelengths: Vec<f64> = wavelengths.into_iter().filter(|&l| l <= 2.2).collect();

        let values = model.evaluate(&wavelengths).unwrap();
        assert!(values.iter().all(|v| v.is_finite() && *v >= 0.0));
    }

    #[test]
    fn test_invalid_bump_parameters() {
        assert!(Sbl18::new(0.2175, -0.035, 1.0, 0.0, 1.0).is_err());
        assert!(Sbl18::new(0.2175, 0.035, -1.0, 0.0, 1.0).is_err());
    }
}
