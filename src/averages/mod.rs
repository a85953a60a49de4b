//! Empirical average attenuation curves.
//!
//! [`C00`] and [`L02`] are closed-form fits; [`Tabulated`] interpolates a
//! table of `A(λ)/A(V)` with a monotone cubic in inverse wavelength.

pub mod c00;
pub mod l02;
pub mod tabulated;

pub use c00::C00;
pub use l02::L02;
pub use tabulated::Tabulated;

use std::fmt;
use std::str::FromStr;

use crate::error::AttenuationError;

/// Total-to-selective extinction ratio of the starburst curves.
pub const R_V: f64 = 4.05;

/// Average curves shipped as tables with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AverageCurve {
    /// Leitherer et al. (2002) below 0.15 micron, Calzetti et al. (2000) above.
    Starburst,
}

impl AverageCurve {
    pub const ALL: [AverageCurve; 1] = [AverageCurve::Starburst];

    pub fn key(&self) -> &'static str {
        match self {
            AverageCurve::Starburst => "starburst",
        }
    }
}

impl FromStr for AverageCurve {
    type Err = AttenuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        AverageCurve::ALL
            .into_iter()
            .find(|curve| curve.key() == wanted)
            .ok_or_else(|| AttenuationError::UnsupportedConfiguration {
                key: "average curve",
                value: s.to_string(),
                choices: AverageCurve::ALL.iter().map(AverageCurve::key).collect(),
            })
    }
}

impl fmt::Display for AverageCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_keys() {
        assert_eq!("Starburst".parse::<AverageCurve>().unwrap(), AverageCurve::Starburst);
        let message = "smc_bar".parse::<AverageCurve>().unwrap_err().to_string();
        assert_eq!(message, "unsupported average curve 'smc_bar', expected one of: starburst");
    }
}
