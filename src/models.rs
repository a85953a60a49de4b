//! Common interface of every attenuation curve.
//!
//! [`AttenuationModel`] is what a caller evaluates; [`FittableModel`] adds the
//! parameter view an external least-squares optimizer needs.

use crate::error::AttenuationError;
use crate::params::{Bounds, Parameter};
use crate::units::SpectralUnit;
use crate::validation::XRange;

pub trait AttenuationModel: Send + Sync {
    fn name(&self) -> &str;

    /// Supported wavelength interval in micron, inclusive.
    fn x_range(&self) -> XRange;

    /// Attenuation at each wavelength (micron).
    ///
    /// Fails with [`AttenuationError::OutOfRange`] if any wavelength lies
    /// outside [`AttenuationModel::x_range`].
    fn evaluate(&self, wavelengths: &[f64]) -> Result<Vec<f64>, AttenuationError>;

    /// Transmitted fraction of the flux. The default treats
    /// [`AttenuationModel::evaluate`] as magnitudes.
    fn attenuate(&self, wavelengths: &[f64]) -> Result<Vec<f64>, AttenuationError> {
        Ok(self
            .evaluate(wavelengths)?
            .into_iter()
            .map(|a| 10f64.powf(-0.4 * a))
            .collect())
    }

    fn evaluate_in(
        &self,
        values: &[f64],
        unit: SpectralUnit,
    ) -> Result<Vec<f64>, AttenuationError> {
        self.evaluate(&unit.to_microns(values))
    }
}

pub trait FittableModel: AttenuationModel + Clone {
    /// Free parameters in a fixed order.
    fn parameters(&self) -> Vec<Parameter>;

    /// Assigns all parameters at once, in the order of
    /// [`FittableModel::parameters`]. Nothing is assigned unless every value
    /// is valid.
    fn set_parameters(&mut self, values: &[f64]) -> Result<(), AttenuationError>;

    fn parameter_names(&self) -> Vec<&'static str> {
        self.parameters().iter().map(Parameter::name).collect()
    }

    fn parameter_values(&self) -> Vec<f64> {
        self.parameters().iter().map(Parameter::value).collect()
    }

    fn parameter_bounds(&self) -> Vec<Bounds> {
        self.parameters().iter().map(Parameter::bounds).collect()
    }

    /// Evaluates with trial parameter values; `self` is left untouched.
    fn evaluate_with(
        &self,
        values: &[f64],
        wavelengths: &[f64],
    ) -> Result<Vec<f64>, AttenuationError> {
        let mut trial = self.clone();
        trial.set_parameters(values)?;
        trial.evaluate(wavelengths)
    }
}

/// Checks every value against its target before assigning any of them.
pub(crate) fn assign_all(
    model: &str,
    targets: &mut [&mut Parameter],
    values: &[f64],
) -> Result<(), AttenuationError> {
    if targets.len() != values.len() {
        return Err(AttenuationError::ParameterCount {
            model: model.to_string(),
            expected: targets.len(),
            got: values.len(),
        });
    }

    for (target, &value) in targets.iter().zip(values) {
        target.check(value)?;
    }
    for (target, &value) in targets.iter_mut().zip(values) {
        target.set(value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::averages::C00;
    use crate::radiative_transfer::Wg00;
    use crate::shapes::N09;

    #[test]
    fn test_assign_all_is_all_or_nothing() {
        let mut av = Parameter::new("Av", "", 1.0, Bounds::non_negative()).unwrap();
        let mut slope = Parameter::new("slope", "", 0.0, Bounds::between(-3.0, 3.0)).unwrap();

        let err = assign_all("test", &mut [&mut av, &mut slope], &[2.0, 5.0]).unwrap_err();
        assert!(matches!(err, AttenuationError::InvalidParameter { name: "slope", .. }));
        assert_eq!(av.value(), 1.0);
        assert_eq!(slope.value(), 0.0);

        assign_all("test", &mut [&mut av, &mut slope], &[2.0, -1.0]).unwrap();
        assert_eq!(av.value(), 2.0);
        assert_eq!(slope.value(), -1.0);
    }

    #[test]
    fn test_assign_all_checks_length() {
        let mut av = Parameter::new("Av", "", 1.0, Bounds::non_negative()).unwrap();
        let err = assign_all("test", &mut [&mut av], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err.to_string(), "test takes 1 parameters, got 2");
    }

    #[test]
    fn test_evaluate_in_converts_to_micron() {
        let model = C00::new(1.5).unwrap();
        let expected = model.evaluate(&[0.55, 2.0]).unwrap();

        for (unit, values) in [
            (SpectralUnit::Micron, [0.55, 2.0]),
            (SpectralUnit::Angstrom, [5500.0, 20000.0]),
            (SpectralUnit::Nanometer, [550.0, 2000.0]),
            (SpectralUnit::InverseMicron, [1.0 / 0.55, 0.5]),
        ] {
            let got = model.evaluate_in(&values, unit).unwrap();
            for (g, e) in got.iter().zip(&expected) {
                assert!((g - e).abs() < 1e-9, "{unit}: got {g} expected {e}");
            }
        }
    }

    #[test]
    fn test_evaluate_in_checks_converted_range() {
        let model = C00::new(1.0).unwrap();
        // 1/0 and negative wavenumbers never map into the model range
        for bad in [0.0, -1.0] {
            let err = model.evaluate_in(&[bad], SpectralUnit::InverseMicron).unwrap_err();
            assert!(matches!(err, AttenuationError::OutOfRange { .. }), "{err}");
        }
        assert!(model.evaluate_in(&[550.0], SpectralUnit::Micron).is_err());
    }

    #[test]
    fn test_parameter_bounds_follow_parameter_order() {
        let model = N09::new(0.2175, 0.035, 1.0, -0.5, 1.0).unwrap();
        assert_eq!(model.parameter_names(), vec!["x0", "gamma", "ampl", "slope", "Av"]);
        assert_eq!(
            model.parameter_bounds(),
            vec![
                Bounds::non_negative(),
                Bounds::non_negative(),
                Bounds::non_negative(),
                Bounds::between(-3.0, 3.0),
                Bounds::non_negative(),
            ]
        );

        let model = Wg00::new(1.0).unwrap();
        assert_eq!(model.parameter_bounds(), vec![Bounds::between(0.25, 50.0)]);

        let model = C00::new(1.0).unwrap();
        assert_eq!(model.parameter_bounds(), vec![Bounds::non_negative()]);
        assert_eq!(model.parameter_values(), vec![1.0]);
    }
}
