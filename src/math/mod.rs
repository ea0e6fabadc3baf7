//! Linear algebra type aliases.

mod math_nalgebra_3d;

pub use math_nalgebra_3d::*;

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The scalar type used throughout this crate.
#[cfg(feature = "f32")]
pub type Real = f32;
