use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::Configuration;
use crate::error::AttenuationError;
use crate::models::{AttenuationModel, FittableModel, assign_all};
use crate::params::{Bounds, Parameter};
use crate::tables::{AttenuationGrid, bundled};
use crate::validation::{XRange, check_x_range};

const MODEL_NAME: &str = "WG00";
const X_RANGE: XRange = XRange::new(0.1, 3.0);
const TAU_V_BOUNDS: Bounds = Bounds::between(0.25, 50.0);

/// Where the per-geometry grid files come from.
#[derive(Debug, Clone, PartialEq)]
enum GridSource {
    Bundled,
    Directory(PathBuf),
}

impl GridSource {
    fn load(&self, configuration: &Configuration) -> Result<Arc<AttenuationGrid>, AttenuationError> {
        let grid = match self {
            GridSource::Bundled => bundled::wg00_grid(configuration)?,
            GridSource::Directory(dir) => Arc::new(AttenuationGrid::from_file(
                dir.join(configuration.geometry.file_name()),
                configuration.dust_type,
                configuration.distribution,
            )?),
        };
        Ok(grid)
    }
}

/// Radiative-transfer attenuation curves in the Witt & Gordon (2000) layout.
///
/// `evaluate` returns the attenuation optical depth `tau_att(λ)` for the
/// current `tau_V`, interpolated bilinearly on the grid of the active
/// [`Configuration`].
///
/// The grids bundled with the crate are synthetic stand-ins with the same
/// axes and columns, not the published WG00 tables. Use [`Wg00::from_dir`]
/// to load the published tables.
#[derive(Debug, Clone)]
pub struct Wg00 {
    tau_v: Parameter,
    configuration: Configuration,
    source: GridSource,
    grid: Arc<AttenuationGrid>,
}

impl Wg00 {
    /// Default configuration (dusty, mw, clumpy) on the bundled synthetic
    /// grids.
    pub fn new(tau_v: f64) -> Result<Self, AttenuationError> {
        Self::with_configuration(tau_v, Configuration::default())
    }

    /// `configuration` on the bundled synthetic grids.
    pub fn with_configuration(
        tau_v: f64,
        configuration: Configuration,
    ) -> Result<Self, AttenuationError> {
        Self::build(tau_v, configuration, GridSource::Bundled)
    }

    /// Reads `<dir>/<geometry>.txt` instead of the bundled grids, e.g. the
    /// published WG00 tables converted to the
    /// `dust_type tau_V lambda tau_att_h tau_att_c` layout.
    pub fn from_dir<P: AsRef<Path>>(
        dir: P,
        tau_v: f64,
        configuration: Configuration,
    ) -> Result<Self, AttenuationError> {
        Self::build(
            tau_v,
            configuration,
            GridSource::Directory(dir.as_ref().to_path_buf()),
        )
    }

    fn build(
        tau_v: f64,
        configuration: Configuration,
        source: GridSource,
    ) -> Result<Self, AttenuationError> {
        let tau_v = Parameter::new("tau_V", "V-band optical depth", tau_v, TAU_V_BOUNDS)?;
        let grid = source.load(&configuration)?;
        log::debug!("WG00 using {} ({})", configuration, grid.name());

        Ok(Wg00 {
            tau_v,
            configuration,
            source,
            grid,
        })
    }

    pub fn tau_v(&self) -> f64 {
        self.tau_v.value()
    }

    pub fn set_tau_v(&mut self, tau_v: f64) -> Result<(), AttenuationError> {
        self.tau_v.set(tau_v)
    }

    pub fn configuration(&self) -> Configuration {
        self.configuration
    }

    pub fn grid(&self) -> &AttenuationGrid {
        &self.grid
    }

    /// Switches to another grid. On failure the active grid is kept.
    pub fn set_configuration(&mut self, configuration: Configuration) -> Result<(), AttenuationError> {
        if configuration == self.configuration {
            return Ok(());
        }

        let grid = self.source.load(&configuration)?;
        log::debug!(
            "WG00 switched from {} to {}",
            self.configuration,
            configuration
        );
        self.grid = grid;
        self.configuration = configuration;
        Ok(())
    }

    /// [`Wg00::set_configuration`] from string keys, e.g.
    /// `select("shell", "mw", "clumpy")`.
    pub fn select(
        &mut self,
        geometry: &str,
        dust_type: &str,
        distribution: &str,
    ) -> Result<(), AttenuationError> {
        let configuration = Configuration::from_keys(geometry, dust_type, distribution)?;
        self.set_configuration(configuration)
    }
}

impl AttenuationModel for Wg00 {
    fn name(&self) -> &str {
        MODEL_NAME
    }

    fn x_range(&self) -> XRange {
        X_RANGE
    }

    fn evaluate(&self, wavelengths: &[f64]) -> Result<Vec<f64>, AttenuationError> {
        check_x_range(wavelengths, X_RANGE, MODEL_NAME)?;
        self.grid.interpolate(self.tau_v.value(), wavelengths)
    }

    /// `exp(-tau_att)`.
    fn attenuate(&self, wavelengths: &[f64]) -> Result<Vec<f64>, AttenuationError> {
        Ok(self
            .evaluate(wavelengths)?
            .into_iter()
            .map(|tau| (-tau).exp())
            .collect())
    }
}

impl FittableModel for Wg00 {
    fn parameters(&self) -> Vec<Parameter> {
        vec![self.tau_v]
    }

    fn set_parameters(&mut self, values: &[f64]) -> Result<(), AttenuationError> {
        assign_all(MODEL_NAME, &mut [&mut self.tau_v], values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radiative_transfer::{DustDistribution, DustType, Geometry};
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_shell_mw_clumpy_v_band_entry() {
        let configuration = Configuration::from_keys("shell", "mw", "clumpy").unwrap();
        let model = Wg00::with_configuration(1.0, configuration).unwrap();

        let tau = model.evaluate(&[0.55]).unwrap();
        assert!(close(tau[0], 0.35169), "got {}", tau[0]);
        assert!(close(tau[0], model.grid().node(3, 18)));
    }

    #[test]
    fn test_v_band_entries_for_each_geometry() {
        let expected = [
            (Geometry::Shell, 0.65777, 0.35169),
            (Geometry::Dusty, 0.31092, 0.20389),
            (Geometry::Cloudy, 0.16830, 0.09998),
        ];

        for (geometry, homogeneous, clumpy) in expected {
            for (distribution, value) in [
                (DustDistribution::Homogeneous, homogeneous),
                (DustDistribution::Clumpy, clumpy),
            ] {
                let configuration = Configuration::new(geometry, DustType::Mw, distribution);
                let model = Wg00::with_configuration(1.0, configuration).unwrap();
                let tau = model.evaluate(&[0.55]).unwrap();
                assert!(close(tau[0], value), "{configuration}: got {}", tau[0]);
            }
        }
    }

    #[test]
    fn test_default_configuration() {
        let model = Wg00::new(1.0).unwrap();
        assert_eq!(model.configuration().to_string(), "dusty/mw/clumpy");
        assert_eq!(model.parameter_names(), vec!["tau_V"]);
    }

    #[test]
    fn test_switching_configuration_replaces_grid() {
        let mut model = Wg00::new(1.0).unwrap();
        let dusty = model.evaluate(&[0.55]).unwrap()[0];

        model.select("Shell", "MW", "homogeneous").unwrap();
        assert_eq!(
            model.configuration(),
            Configuration::new(Geometry::Shell, DustType::Mw, DustDistribution::Homogeneous)
        );
        let shell = model.evaluate(&[0.55]).unwrap()[0];
        assert!(close(dusty, 0.20389));
        assert!(close(shell, 0.65777));
    }

    #[test]
    fn test_unsupported_configuration_keeps_active_grid() {
        let mut model = Wg00::new(1.0).unwrap();
        let before = model.evaluate(&[0.55]).unwrap();

        let err = model.select("dusty", "lmc", "clumpy").unwrap_err();
        assert!(matches!(
            err,
            AttenuationError::UnsupportedConfiguration { key: "dust_type", .. }
        ));
        assert_eq!(model.configuration(), Configuration::default());
        assert_eq!(model.evaluate(&[0.55]).unwrap(), before);
    }

    #[test]
    fn test_out_of_range_wavelengths() {
        let model = Wg00::new(1.0).unwrap();
        assert!(model.evaluate(&[0.1, 3.0]).is_ok());
        for bad in [0.09, 3.1, f64::NAN] {
            let err = model.evaluate(&[0.55, bad]).unwrap_err();
            assert!(matches!(err, AttenuationError::OutOfRange { quantity: "x", .. }), "{err}");
        }
    }

    #[test]
    fn test_tau_v_bounds() {
        assert!(Wg00::new(0.2).is_err());
        assert!(Wg00::new(50.5).is_err());

        let mut model = Wg00::new(0.25).unwrap();
        model.set_tau_v(50.0).unwrap();
        assert!(model.set_tau_v(51.0).is_err());
        assert_eq!(model.tau_v(), 50.0);
    }

    #[test]
    fn test_optical_depth_grows_with_tau_v() {
        let mut model = Wg00::new(0.5).unwrap();
        let wavelengths = [0.1, 0.2175, 0.55, 2.2];
        let thin = model.evaluate(&wavelengths).unwrap();
        model.set_tau_v(5.0).unwrap();
        let thick = model.evaluate(&wavelengths).unwrap();

        for (t, k) in thin.iter().zip(&thick) {
            assert!(t.is_finite() && *t >= 0.0);
            assert!(k > t);
        }
    }

    #[test]
    fn test_attenuate_is_exp_of_minus_tau() {
        let model = Wg00::new(2.0).unwrap();
        let tau = model.evaluate(&[0.3, 0.55]).unwrap();
        let transmitted = model.attenuate(&[0.3, 0.55]).unwrap();
        for (t, f) in tau.iter().zip(&transmitted) {
            assert!(close(*f, (-t).exp()));
            assert!(*f > 0.0 && *f <= 1.0);
        }
    }

    #[test]
    fn test_evaluate_with_leaves_model_untouched() {
        let model = Wg00::new(1.0).unwrap();
        let trial = model.evaluate_with(&[2.0], &[0.55]).unwrap();
        assert!(trial[0] > model.evaluate(&[0.55]).unwrap()[0]);
        assert_eq!(model.tau_v(), 1.0);
        assert!(model.evaluate_with(&[100.0], &[0.55]).is_err());
    }

    #[test]
    fn test_from_dir_reads_geometry_file() {
        let dir = tempdir().unwrap();
        let mut file = File::create(dir.path().join("cloudy.txt")).unwrap();
        file.write_all(
            b"# small grid\n\
dust_type tau_V lambda tau_att_h tau_att_c\n\
smc 0.5 1000 1.0 0.8\n\
smc 0.5 30000 0.1 0.05\n\
smc 2.0 1000 4.0 3.0\n\
smc 2.0 30000 0.4 0.2\n",
        )
        .unwrap();

        let configuration = Configuration::from_keys("cloudy", "smc", "homogeneous").unwrap();
        let mut model = Wg00::from_dir(dir.path(), 1.25, configuration).unwrap();

        let tau = model.evaluate(&[0.1]).unwrap();
        assert!(close(tau[0], 2.5), "got {}", tau[0]);

        // outside the user grid, inside the model range
        model.set_tau_v(10.0).unwrap();
        let err = model.evaluate(&[0.1]).unwrap_err();
        assert!(matches!(err, AttenuationError::OutOfRange { quantity: "tau_V", .. }));

        // no shell.txt in the directory
        assert!(model.select("shell", "smc", "homogeneous").is_err());
        assert_eq!(model.configuration(), configuration);
    }
}
