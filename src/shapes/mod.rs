//! Analytic shape-fitting curves.
//!
//! Both curves start from the starburst continuum `k_SB(λ)` (Leitherer et
//! al. 2002 at and below 0.15 micron, Calzetti et al. 2000 above), tilt it
//! with a power law pivoting at the V band and add a Drude profile for the
//! 2175 Å bump. They differ only in whether the bump is tilted as well:
//!
//! - [`N09`]: `k'(λ) = [k_SB(λ) + D(λ)] (λ / 0.55)^slope`
//! - [`Sbl18`]: `k'(λ) = k_SB(λ) (λ / 0.55)^slope + D(λ)`
//!
//! and `A(λ) = k'(λ) / R_V * Av`.

pub mod n09;
pub mod sbl18;

pub use n09::N09;
pub use sbl18::Sbl18;

use crate::averages::{c00, l02};
use crate::error::AttenuationError;
use crate::models::assign_all;
use crate::params::{Bounds, Parameter};
use crate::validation::XRange;

/// Support of both shape curves, in micron.
pub const X_RANGE: XRange = XRange::new(0.097, 2.2);

/// Pivot of the power law, in micron.
pub const V_BAND: f64 = 0.55;

const X0_DESCRIPTION: &str = "central wavelength of the UV bump [micron]";
const GAMMA_DESCRIPTION: &str = "width of the UV bump [micron]";
const AMPL_DESCRIPTION: &str = "amplitude of the UV bump";
const SLOPE_DESCRIPTION: &str = "power law slope";
const SLOPE_BOUNDS: Bounds = Bounds::between(-3.0, 3.0);

/// Drude profile of the UV bump.
///
/// `x0` is the central wavelength and `gamma` the width, both in micron.
pub fn uv_bump(l: f64, x0: f64, gamma: f64, ampl: f64) -> f64 {
    let lg2 = (l * gamma).powi(2);
    ampl * lg2 / ((l * l - x0 * x0).powi(2) + lg2)
}

pub fn power_law(l: f64, slope: f64) -> f64 {
    (l / V_BAND).powf(slope)
}

/// Starburst continuum `k_SB(λ)`.
pub fn starburst_k(l: f64) -> f64 {
    if l > 0.15 { c00::k(l) } else { l02::k(l) }
}

/// Free parameters shared by [`N09`] and [`Sbl18`], in fitting order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParameters {
    x0: Parameter,
    gamma: Parameter,
    ampl: Parameter,
    slope: Parameter,
    av: Parameter,
}

impl ShapeParameters {
    pub fn new(
        x0: f64,
        gamma: f64,
        ampl: f64,
        slope: f64,
        av: f64,
    ) -> Result<Self, AttenuationError> {
        Ok(ShapeParameters {
            x0: Parameter::new("x0", X0_DESCRIPTION, x0, Bounds::non_negative())?,
            gamma: Parameter::new("gamma", GAMMA_DESCRIPTION, gamma, Bounds::non_negative())?,
            ampl: Parameter::new("ampl", AMPL_DESCRIPTION, ampl, Bounds::non_negative())?,
            slope: Parameter::new("slope", SLOPE_DESCRIPTION, slope, SLOPE_BOUNDS)?,
            av: Parameter::av(av)?,
        })
    }

    pub fn x0(&self) -> f64 {
        self.x0.value()
    }

    pub fn gamma(&self) -> f64 {
        self.gamma.value()
    }

    pub fn ampl(&self) -> f64 {
        self.ampl.value()
    }

    pub fn slope(&self) -> f64 {
        self.slope.value()
    }

    pub fn av(&self) -> f64 {
        self.av.value()
    }

    pub fn bump(&self, l: f64) -> f64 {
        uv_bump(l, self.x0(), self.gamma(), self.ampl())
    }

    pub fn to_vec(&self) -> Vec<Parameter> {
        vec![self.x0, self.gamma, self.ampl, self.slope, self.av]
    }

    pub(crate) fn assign(&mut self, model: &str, values: &[f64]) -> Result<(), AttenuationError> {
        assign_all(
            model,
            &mut [
                &mut self.x0,
                &mut self.gamma,
                &mut self.ampl,
                &mut self.slope,
                &mut self.av,
            ],
            values,
        )
    }
}

impl Default for ShapeParameters {
    /// Zero-amplitude bump at 2175 Å (350 Å wide), flat slope, `Av = 1`.
    fn default() -> Self {
        ShapeParameters {
            x0: Parameter::new_unchecked("x0", X0_DESCRIPTION, 0.2175, Bounds::non_negative()),
            gamma: Parameter::new_unchecked("gamma", GAMMA_DESCRIPTION, 0.035, Bounds::non_negative()),
            ampl: Parameter::new_unchecked("ampl", AMPL_DESCRIPTION, 0.0, Bounds::non_negative()),
            slope: Parameter::new_unchecked("slope", SLOPE_DESCRIPTION, 0.0, SLOPE_BOUNDS),
            av: Parameter::new_unchecked("Av", "V-band attenuation [mag]", 1.0, Bounds::non_negative()),
        }
    }
}
