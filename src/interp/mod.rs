//! Interpolation primitives shared by the table-driven models.

pub mod linear;
pub mod spline;

pub use linear::{bracket, interp_one};
pub use spline::MonotoneCubic;
