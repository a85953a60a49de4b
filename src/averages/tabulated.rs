use std::path::Path;
use std::sync::Arc;

use super::AverageCurve;
use crate::error::AttenuationError;
use crate::models::{AttenuationModel, FittableModel, assign_all};
use crate::params::Parameter;
use crate::tables::{AverageTable, bundled};
use crate::validation::{XRange, check_x_range};

/// Average curve interpolated from a table of `A(λ)/A(V)`, scaled by `Av`.
///
/// The supported range is the wavelength coverage of the table.
#[derive(Debug, Clone)]
pub struct Tabulated {
    av: Parameter,
    table: Arc<AverageTable>,
}

impl Tabulated {
    pub fn bundled(curve: AverageCurve, av: f64) -> Result<Self, AttenuationError> {
        let av = Parameter::av(av)?;
        Ok(Tabulated {
            av,
            table: bundled::average_table(curve)?,
        })
    }

    /// The bundled starburst composite, 0.0912 to 2.2 micron.
    pub fn starburst(av: f64) -> Result<Self, AttenuationError> {
        Self::bundled(AverageCurve::Starburst, av)
    }

    /// Reads a `wavelength a_av` table (wavelength in micron).
    pub fn from_file<P: AsRef<Path>>(name: &str, path: P, av: f64) -> Result<Self, AttenuationError> {
        let av = Parameter::av(av)?;
        let table = AverageTable::from_file(name, path)?;
        Ok(Tabulated {
            av,
            table: Arc::new(table),
        })
    }

    pub fn av(&self) -> f64 {
        self.av.value()
    }

    pub fn set_av(&mut self, av: f64) -> Result<(), AttenuationError> {
        self.av.set(av)
    }

    pub fn table(&self) -> &AverageTable {
        &self.table
    }
}

impl AttenuationModel for Tabulated {
    fn name(&self) -> &str {
        self.table.name()
    }

    fn x_range(&self) -> XRange {
        self.table.x_range()
    }

    fn evaluate(&self, wavelengths: &[f64]) -> Result<Vec<f64>, AttenuationError> {
        check_x_range(wavelengths, self.x_range(), self.name())?;
        let av = self.av.value();
        Ok(wavelengths
            .iter()
            .map(|&l| self.table.a_av(l) * av)
            .collect())
    }
}

impl FittableModel for Tabulated {
    fn parameters(&self) -> Vec<Parameter> {
        vec![self.av]
    }

    fn set_parameters(&mut self, values: &[f64]) -> Result<(), AttenuationError> {
        let name = self.table.name().to_string();
        assign_all(&name, &mut [&mut self.av], values)
    }
}
