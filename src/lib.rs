//! Interstellar dust attenuation curves.
//!
//! Three families share the [`AttenuationModel`] interface:
//!
//! - [`averages`]: empirical averages, either closed form ([`averages::C00`],
//!   [`averages::L02`]) or spline-interpolated tables ([`averages::Tabulated`]);
//! - [`radiative_transfer`]: [`radiative_transfer::Wg00`], bilinear
//!   interpolation on precomputed (tau_V, wavelength) grids;
//! - [`shapes`]: [`shapes::N09`] and [`shapes::Sbl18`], a tilted starburst
//!   continuum plus a Drude UV bump.
//!
//! ```rust
//! use dust_attenuation::AttenuationModel;
//! use dust_attenuation::averages::Tabulated;
//!
//! let model = Tabulated::starburst(1.0).unwrap();
//! let a = model.evaluate(&[0.1, 0.5, 1.0, 2.2]).unwrap();
//! assert!(a.windows(2).all(|w| w[0] > w[1]));
//! ```

pub mod averages;
pub mod config;
pub mod error;
pub mod interp;
pub mod models;
pub mod params;
pub mod radiative_transfer;
pub mod shapes;
pub mod tables;
pub mod units;
pub mod validation;

pub use error::AttenuationError;
pub use models::{AttenuationModel, FittableModel};
pub use params::{Bounds, Parameter};
pub use units::SpectralUnit;
pub use validation::XRange;
