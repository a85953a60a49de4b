use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::averages::{C00, L02, Tabulated};
use crate::error::AttenuationError;
use crate::models::AttenuationModel;
use crate::radiative_transfer::{Configuration, DustDistribution, DustType, Geometry, Wg00};
use crate::shapes::{N09, Sbl18, ShapeParameters};
use crate::units::SpectralUnit;

pub mod error;
pub use error::ConfigError;

/// What the run prints next to each wavelength.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// The model's own output: magnitudes, or optical depth for WG00.
    #[default]
    #[serde(alias = "magnitudes")]
    Attenuation,
    /// Fraction of the flux that gets through.
    Transmission,
}

/// Model block of a run configuration, tagged by `name`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum ModelConfig {
    C00 {
        #[serde(rename = "Av", default = "default_av")]
        av: f64,
    },
    L02 {
        #[serde(rename = "Av", default = "default_av")]
        av: f64,
    },
    Starburst {
        #[serde(rename = "Av", default = "default_av")]
        av: f64,
    },
    /// User `wavelength a_av` table.
    Tabulated {
        path: PathBuf,
        #[serde(rename = "Av", default = "default_av")]
        av: f64,
    },
    N09(ShapeConfig),
    Sbl18(ShapeConfig),
    Wg00 {
        #[serde(rename = "tau_V", default = "default_tau_v")]
        tau_v: f64,
        #[serde(default = "default_geometry")]
        geometry: Geometry,
        #[serde(default = "default_dust_type")]
        dust_type: DustType,
        #[serde(default = "default_distribution")]
        dust_distribution: DustDistribution,
    },
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ShapeConfig {
    #[serde(default = "default_x0")]
    pub x0: f64,
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    #[serde(default)]
    pub ampl: f64,
    #[serde(default)]
    pub slope: f64,
    #[serde(rename = "Av", default = "default_av")]
    pub av: f64,
}

fn default_av() -> f64 {
    1.0
}

fn default_tau_v() -> f64 {
    1.0
}

fn default_x0() -> f64 {
    ShapeParameters::default().x0()
}

fn default_gamma() -> f64 {
    ShapeParameters::default().gamma()
}

fn default_geometry() -> Geometry {
    Configuration::default().geometry
}

fn default_dust_type() -> DustType {
    Configuration::default().dust_type
}

fn default_distribution() -> DustDistribution {
    Configuration::default().distribution
}

impl ShapeConfig {
    fn parameters(&self) -> Result<ShapeParameters, AttenuationError> {
        ShapeParameters::new(self.x0, self.gamma, self.ampl, self.slope, self.av)
    }
}

impl ModelConfig {
    /// Builds the model. WG00 grids are read from `data_dir` when given,
    /// otherwise the bundled grids are used.
    pub fn build(
        &self,
        data_dir: Option<&Path>,
    ) -> Result<Box<dyn AttenuationModel>, AttenuationError> {
        let model: Box<dyn AttenuationModel> = match self {
            ModelConfig::C00 { av } => Box::new(C00::new(*av)?),
            ModelConfig::L02 { av } => Box::new(L02::new(*av)?),
            ModelConfig::Starburst { av } => Box::new(Tabulated::starburst(*av)?),
            ModelConfig::Tabulated { path, av } => {
                let name = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "tabulated".to_string());
                Box::new(Tabulated::from_file(&name, path, *av)?)
            }
            ModelConfig::N09(shape) => Box::new(N09::from_parameters(shape.parameters()?)),
            ModelConfig::Sbl18(shape) => Box::new(Sbl18::from_parameters(shape.parameters()?)),
            ModelConfig::Wg00 {
                tau_v,
                geometry,
                dust_type,
                dust_distribution,
            } => {
                let configuration = Configuration::new(*geometry, *dust_type, *dust_distribution);
                match data_dir {
                    Some(dir) => Box::new(Wg00::from_dir(dir, *tau_v, configuration)?),
                    None => Box::new(Wg00::with_configuration(*tau_v, configuration)?),
                }
            }
        };
        Ok(model)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    model: ModelConfig,
    wavelengths: Vec<f64>,
    unit: SpectralUnit,
    output: OutputKind,
    data_dir: Option<PathBuf>,
}

// Deserializes a Config, expanding the wavelength grid and checking it is
// usable before any model is built.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            model: ModelConfig,
            wavelengths: WavelengthsHelper,
            #[serde(default)]
            unit: SpectralUnit,
            #[serde(default)]
            output: OutputKind,
            data_dir: Option<PathBuf>,
        }

        #[derive(Deserialize)]
        struct WavelengthsHelper {
            values: Option<Vec<f64>>,
            start: Option<f64>,
            stop: Option<f64>,
            num: Option<usize>,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;
        let grid = helper.wavelengths;

        let wavelengths = match (grid.values, grid.start, grid.stop, grid.num) {
            (Some(values), None, None, None) => {
                if values.is_empty() {
                    return Err(D::Error::custom(ConfigError::Wavelengths(
                        "values must not be empty".to_string(),
                    )));
                }
                values
            }
            (None, Some(start), Some(stop), Some(num)) => {
                linspace(start, stop, num)
                    .map_err(|e| D::Error::custom(ConfigError::Wavelengths(e)))?
            }
            _ => {
                return Err(D::Error::custom(ConfigError::Wavelengths(
                    "give either 'values' or all of 'start', 'stop' and 'num'".to_string(),
                )));
            }
        };

        if wavelengths.iter().any(|w| !w.is_finite()) {
            return Err(D::Error::custom(ConfigError::Wavelengths(
                "wavelengths must be finite".to_string(),
            )));
        }

        Ok(Config {
            model: helper.model,
            wavelengths,
            unit: helper.unit,
            output: helper.output,
            data_dir: helper.data_dir,
        })
    }
}

/// `num` evenly spaced values from `start` to `stop`, both included.
fn linspace(start: f64, stop: f64, num: usize) -> Result<Vec<f64>, String> {
    if num < 2 {
        return Err(format!("num must be at least 2, got {}", num));
    }
    if start.is_nan() || stop.is_nan() || start >= stop {
        return Err(format!("start ({}) must be smaller than stop ({})", start, stop));
    }

    let step = (stop - start) / (num - 1) as f64;
    let mut values: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
    values[num - 1] = stop;
    Ok(values)
}

impl Config {
    pub fn new(model: ModelConfig, wavelengths: Vec<f64>) -> Self {
        Self {
            model,
            wavelengths,
            unit: SpectralUnit::default(),
            output: OutputKind::default(),
            data_dir: None,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        Ok(config)
    }

    pub fn model(&self) -> &ModelConfig {
        &self.model
    }

    /// Wavelength grid in the configured unit.
    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    pub fn unit(&self) -> SpectralUnit {
        self.unit
    }

    pub fn output(&self) -> OutputKind {
        self.output
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    pub fn build_model(&self) -> Result<Box<dyn AttenuationModel>, ConfigError> {
        Ok(self.model.build(self.data_dir())?)
    }

    /// Builds the configured model and evaluates it on the configured grid.
    pub fn run(&self) -> Result<Vec<f64>, ConfigError> {
        let model = self.build_model()?;
        self.run_with(model.as_ref())
    }

    /// Evaluates an already built model on the configured grid, in the
    /// configured unit and output kind.
    pub fn run_with(&self, model: &dyn AttenuationModel) -> Result<Vec<f64>, ConfigError> {
        let microns = self.unit.to_microns(&self.wavelengths);

        let values = match self.output {
            OutputKind::Attenuation => model.evaluate(&microns)?,
            OutputKind::Transmission => model.attenuate(&microns)?,
        };
        Ok(values)
    }
}
