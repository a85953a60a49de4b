use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::AttenuationError;

/// Unit of the spectral coordinate handed to a model.
///
/// Models work in microns internally; anything else goes through
/// [`SpectralUnit::to_microns`] first.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpectralUnit {
    #[default]
    Micron,
    /// Wavenumber in 1/micron.
    #[serde(alias = "inverse_micron")]
    InverseMicron,
    Angstrom,
    Nanometer,
}

impl SpectralUnit {
    const CHOICES: [&'static str; 4] = ["micron", "inverse_micron", "angstrom", "nanometer"];

    pub fn to_micron(&self, value: f64) -> f64 {
        match self {
            SpectralUnit::Micron => value,
            SpectralUnit::InverseMicron => 1.0 / value,
            SpectralUnit::Angstrom => value * 1e-4,
            SpectralUnit::Nanometer => value * 1e-3,
        }
    }

    pub fn to_microns(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.to_micron(v)).collect()
    }
}

impl FromStr for SpectralUnit {
    type Err = AttenuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "micron" | "um" => Ok(SpectralUnit::Micron),
            "inverse_micron" | "inversemicron" | "1/micron" | "1/um" => {
                Ok(SpectralUnit::InverseMicron)
            }
            "angstrom" | "aa" => Ok(SpectralUnit::Angstrom),
            "nanometer" | "nm" => Ok(SpectralUnit::Nanometer),
            _ => Err(AttenuationError::UnsupportedConfiguration {
                key: "spectral unit",
                value: s.to_string(),
                choices: Self::CHOICES.to_vec(),
            }),
        }
    }
}

impl fmt::Display for SpectralUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpectralUnit::Micron => "micron",
            SpectralUnit::InverseMicron => "1/micron",
            SpectralUnit::Angstrom => "angstrom",
            SpectralUnit::Nanometer => "nanometer",
        };
        write!(f, "{}", name)
    }
}
