use std::path::Path;

use super::{DelimitedTable, TableError};
use crate::interp::MonotoneCubic;
use crate::validation::XRange;

/// Tabulated average attenuation curve, `A(λ)/A(V)` against wavelength.
///
/// The table holds columns `wavelength` (micron) and `a_av`. Interpolation
/// is a monotone cubic (PCHIP) in inverse-wavelength space, so values between
/// knots stay within the neighbouring table values.
#[derive(Debug, Clone)]
pub struct AverageTable {
    name: String,
    wavelengths: Vec<f64>,
    a_av: Vec<f64>,
    spline: MonotoneCubic,
}

impl AverageTable {
    pub fn from_file<P: AsRef<Path>>(name: &str, path: P) -> Result<Self, TableError> {
        let table = DelimitedTable::from_file(path)?;
        Self::from_delimited(name, &table)
    }

    pub fn from_delimited(name: &str, table: &DelimitedTable) -> Result<Self, TableError> {
        let wavelengths = table.column_f64("wavelength")?;
        let a_av = table.column_f64("a_av")?;
        let shape_error = |message: String| TableError::Shape {
            table: table.name().to_string(),
            message,
        };

        if wavelengths.iter().any(|&w| !(w.is_finite() && w > 0.0)) {
            return Err(shape_error("wavelengths must be positive".to_string()));
        }
        if a_av.iter().any(|&v| !(v.is_finite() && v >= 0.0)) {
            return Err(shape_error("a_av values must be finite and non-negative".to_string()));
        }

        // knots in x = 1/λ, ascending
        let mut knots: Vec<(f64, f64)> = wavelengths
            .iter()
            .zip(&a_av)
            .map(|(&w, &v)| (1.0 / w, v))
            .collect();
        knots.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (x, y): (Vec<f64>, Vec<f64>) = knots.into_iter().unzip();
        let spline = MonotoneCubic::new(x, y).map_err(shape_error)?;

        let table = AverageTable {
            name: name.to_string(),
            wavelengths,
            a_av,
            spline,
        };
        let range = table.x_range();
        log::debug!(
            "loaded average table '{}' ({} points, {}-{} micron)",
            name,
            table.wavelengths.len(),
            range.min,
            range.max
        );

        Ok(table)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wavelengths and values in file order.
    pub fn points(&self) -> (&[f64], &[f64]) {
        (&self.wavelengths, &self.a_av)
    }

    /// Wavelength coverage of the table, in micron.
    pub fn x_range(&self) -> XRange {
        XRange::new(
            self.wavelengths.iter().copied().fold(f64::INFINITY, f64::min),
            self.wavelengths.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        )
    }

    /// `A(λ)/A(V)` at `wavelength` micron; range checks belong to the caller.
    pub fn a_av(&self, wavelength: f64) -> f64 {
        self.spline.eval(1.0 / wavelength)
    }
}
