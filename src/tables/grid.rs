use std::path::Path;

use super::{DelimitedTable, TableError};
use crate::error::AttenuationError;
use crate::interp::{bracket, interp_one};
use crate::radiative_transfer::{DustDistribution, DustType};
use crate::validation::{XRange, check_range};

/// Attenuation optical depth tabulated on a regular (tau_V, wavelength) grid.
///
/// Values are stored row-major: one row of `wavelengths.len()` values per
/// optical depth.
#[derive(Debug, Clone)]
pub struct AttenuationGrid {
    name: String,
    tau_v: Vec<f64>,
    wavelengths: Vec<f64>,
    values: Vec<f64>,
}

impl AttenuationGrid {
    pub fn new(
        name: &str,
        tau_v: Vec<f64>,
        wavelengths: Vec<f64>,
        values: Vec<f64>,
    ) -> Result<Self, TableError> {
        let shape_error = |message: String| TableError::Shape {
            table: name.to_string(),
            message,
        };

        if tau_v.len() < 2 || wavelengths.len() < 2 {
            return Err(shape_error(format!(
                "grid needs at least 2 optical depths and 2 wavelengths, got {}x{}",
                tau_v.len(),
                wavelengths.len()
            )));
        }
        if tau_v.windows(2).any(|w| w[1] <= w[0]) || wavelengths.windows(2).any(|w| w[1] <= w[0])
        {
            return Err(shape_error("grid axes must be strictly increasing".to_string()));
        }
        if values.len() != tau_v.len() * wavelengths.len() {
            return Err(shape_error(format!(
                "expected {} values, found {}",
                tau_v.len() * wavelengths.len(),
                values.len()
            )));
        }
        if values.iter().any(|&v| !(v.is_finite() && v >= 0.0)) {
            return Err(shape_error("optical depths must be finite and non-negative".to_string()));
        }

        Ok(AttenuationGrid {
            name: name.to_string(),
            tau_v,
            wavelengths,
            values,
        })
    }

    /// Builds one grid out of a per-geometry table with columns
    /// `dust_type tau_V lambda tau_att_h tau_att_c` (lambda in Angstrom).
    pub fn from_delimited(
        table: &DelimitedTable,
        dust_type: DustType,
        distribution: DustDistribution,
    ) -> Result<Self, TableError> {
        let dust_types = table.column_str("dust_type")?;
        let tau_col = table.column_f64("tau_V")?;
        let lambda_col = table.column_f64("lambda")?;
        let value_col = table.column_f64(distribution.column_name())?;

        let rows: Vec<(f64, f64, f64)> = (0..table.len())
            .filter(|&i| dust_types[i].eq_ignore_ascii_case(dust_type.key()))
            .map(|i| (tau_col[i], lambda_col[i] / 1e4, value_col[i]))
            .collect();

        let name = format!("{} [{}, {}]", table.name(), dust_type, distribution);
        let tau_v = sorted_unique(rows.iter().map(|r| r.0));
        let wavelengths = sorted_unique(rows.iter().map(|r| r.1));
        let n_wave = wavelengths.len();

        let mut values = vec![f64::NAN; tau_v.len() * n_wave];
        for &(tau, wave, value) in &rows {
            let i = tau_v.partition_point(|&t| t < tau);
            let j = wavelengths.partition_point(|&w| w < wave);
            values[i * n_wave + j] = value;
        }

        if rows.len() != values.len() || values.iter().any(|v| v.is_nan()) {
            return Err(TableError::Shape {
                table: name,
                message: format!(
                    "{} rows do not fill a {}x{} grid",
                    rows.len(),
                    tau_v.len(),
                    n_wave
                ),
            });
        }

        let grid = Self::new(&name, tau_v, wavelengths, values)?;
        log::debug!(
            "loaded grid {} ({} optical depths x {} wavelengths)",
            grid.name,
            grid.tau_v.len(),
            grid.wavelengths.len()
        );
        Ok(grid)
    }

    pub fn from_file<P: AsRef<Path>>(
        path: P,
        dust_type: DustType,
        distribution: DustDistribution,
    ) -> Result<Self, TableError> {
        let table = DelimitedTable::from_file(path)?;
        Self::from_delimited(&table, dust_type, distribution)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tau_v(&self) -> &[f64] {
        &self.tau_v
    }

    /// Wavelength nodes in micron.
    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    pub fn tau_range(&self) -> XRange {
        XRange::new(self.tau_v[0], self.tau_v[self.tau_v.len() - 1])
    }

    pub fn wavelength_range(&self) -> XRange {
        XRange::new(self.wavelengths[0], self.wavelengths[self.wavelengths.len() - 1])
    }

    /// Tabulated value at node `(tau_idx, wave_idx)`.
    pub fn node(&self, tau_idx: usize, wave_idx: usize) -> f64 {
        self.values[tau_idx * self.wavelengths.len() + wave_idx]
    }

    /// Bilinear interpolation at optical depth `tau` for each wavelength
    /// (micron). Nothing outside the grid is extrapolated.
    pub fn interpolate(&self, tau: f64, wavelengths: &[f64]) -> Result<Vec<f64>, AttenuationError> {
        check_range(&[tau], self.tau_range(), &self.name, "tau_V", "dimensionless")?;
        check_range(wavelengths, self.wavelength_range(), &self.name, "x", "micron")?;

        let (it, rt) = bracket(&self.tau_v, tau).ok_or_else(|| self.out_of_grid("tau_V", tau))?;

        let (low_row, high_row) = (self.row(it), self.row(it + 1));
        wavelengths
            .iter()
            .map(|&wave| {
                let low = interp_one(wave, &self.wavelengths, low_row);
                let high = interp_one(wave, &self.wavelengths, high_row);
                match (low, high) {
                    (Some(low), Some(high)) => Ok((1.0 - rt) * low + rt * high),
                    _ => Err(self.out_of_grid("x", wave)),
                }
            })
            .collect()
    }

    fn row(&self, tau_idx: usize) -> &[f64] {
        let n = self.wavelengths.len();
        &self.values[tau_idx * n..(tau_idx + 1) * n]
    }

    fn out_of_grid(&self, quantity: &'static str, value: f64) -> AttenuationError {
        let (range, unit) = match quantity {
            "tau_V" => (self.tau_range(), "dimensionless"),
            _ => (self.wavelength_range(), "micron"),
        };
        AttenuationError::OutOfRange {
            model: self.name.clone(),
            quantity,
            unit,
            min: range.min,
            max: range.max,
            offending: vec![value],
        }
    }
}

fn sorted_unique(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut out: Vec<f64> = values.collect();
    out.sort_by(f64::total_cmp);
    out.dedup();
    out
}
