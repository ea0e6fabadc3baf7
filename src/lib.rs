/*!
polymass
========

**polymass** computes the mass, center of mass and inertia tensor of solids
bounded by closed triangle meshes, and re-expresses the resulting inertia
tensor in rotated frames for rigid-body simulation.

The volume integrals are reduced to sums of edge-walk integrals over the
projection of each face (B. Mirtich, "Fast and Accurate Computation of
Polyhedral Mass Properties", 1996), so no volumetric representation of the
solid is ever built.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod dynamics;
pub mod mass_properties;
pub mod math;
pub mod shape;
pub mod transformation;
pub mod utils;
