//! Radiative-transfer attenuation curves.
//!
//! A curve is picked out of a finite set of precomputed grids by three keys:
//! the large-scale geometry of stars and dust, the dust grain type and the
//! local (homogeneous or clumpy) dust distribution.

pub mod wg00;

pub use wg00::Wg00;

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::AttenuationError;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    Shell,
    Dusty,
    Cloudy,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DustType {
    /// Milky-Way-like grains.
    Mw,
    /// SMC-like grains.
    Smc,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DustDistribution {
    Homogeneous,
    Clumpy,
}

impl Geometry {
    pub const ALL: [Geometry; 3] = [Geometry::Shell, Geometry::Dusty, Geometry::Cloudy];

    pub fn key(&self) -> &'static str {
        match self {
            Geometry::Shell => "shell",
            Geometry::Dusty => "dusty",
            Geometry::Cloudy => "cloudy",
        }
    }

    /// Name of the per-geometry table file inside a data directory.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.key())
    }
}

impl DustType {
    pub const ALL: [DustType; 2] = [DustType::Mw, DustType::Smc];

    pub fn key(&self) -> &'static str {
        match self {
            DustType::Mw => "mw",
            DustType::Smc => "smc",
        }
    }
}

impl DustDistribution {
    pub const ALL: [DustDistribution; 2] = [DustDistribution::Homogeneous, DustDistribution::Clumpy];

    pub fn key(&self) -> &'static str {
        match self {
            DustDistribution::Homogeneous => "homogeneous",
            DustDistribution::Clumpy => "clumpy",
        }
    }

    /// Table column holding the optical depths for this distribution.
    pub fn column_name(&self) -> &'static str {
        match self {
            DustDistribution::Homogeneous => "tau_att_h",
            DustDistribution::Clumpy => "tau_att_c",
        }
    }
}

fn parse_key<T: Copy>(
    key: &'static str,
    value: &str,
    all: &[T],
    name: impl Fn(&T) -> &'static str,
) -> Result<T, AttenuationError> {
    let wanted = value.trim().to_lowercase();
    all.iter()
        .find(|&item| name(item) == wanted)
        .copied()
        .ok_or_else(|| AttenuationError::UnsupportedConfiguration {
            key,
            value: value.to_string(),
            choices: all.iter().map(&name).collect(),
        })
}

impl FromStr for Geometry {
    type Err = AttenuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key("geometry", s, &Geometry::ALL, Geometry::key)
    }
}

impl FromStr for DustType {
    type Err = AttenuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key("dust_type", s, &DustType::ALL, DustType::key)
    }
}

impl FromStr for DustDistribution {
    type Err = AttenuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key("dust_distribution", s, &DustDistribution::ALL, DustDistribution::key)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl fmt::Display for DustType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl fmt::Display for DustDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One selectable radiative-transfer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Configuration {
    pub geometry: Geometry,
    pub dust_type: DustType,
    pub distribution: DustDistribution,
}

impl Configuration {
    pub fn new(geometry: Geometry, dust_type: DustType, distribution: DustDistribution) -> Self {
        Configuration {
            geometry,
            dust_type,
            distribution,
        }
    }

    /// Parses the three string keys (case-insensitive).
    pub fn from_keys(
        geometry: &str,
        dust_type: &str,
        distribution: &str,
    ) -> Result<Self, AttenuationError> {
        Ok(Configuration {
            geometry: geometry.parse()?,
            dust_type: dust_type.parse()?,
            distribution: distribution.parse()?,
        })
    }

    pub fn all() -> impl Iterator<Item = Configuration> {
        Geometry::ALL.into_iter().flat_map(|geometry| {
            DustType::ALL.into_iter().flat_map(move |dust_type| {
                DustDistribution::ALL
                    .into_iter()
                    .map(move |distribution| Configuration::new(geometry, dust_type, distribution))
            })
        })
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(Geometry::Dusty, DustType::Mw, DustDistribution::Clumpy)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.geometry, self.dust_type, self.distribution)
    }
}
