//! Mass, center of mass and inertia tensor of solids bounded by polyhedral meshes.
//!
//! The volume integrals of the monomials `1`, `x`, `y`, `z`, `x²`, `y²`, `z²`, `xy`, `yz`
//! and `zx` are reduced to surface integrals with the divergence theorem, and each surface
//! integral is in turn reduced to an integral along the edges of the projection of the face
//! on one of the coordinate planes.

pub use self::error::MassPropertiesError;
pub use self::face_integrals::FaceIntegrals;
pub use self::inertia_tensor::{InertiaTensor, ORIENTATION_NORM_TOLERANCE};
pub use self::projection_integrals::{AxisPermutation, ProjectionIntegrals};
pub use self::volume_integrals::{VolumeIntegralSums, VolumeIntegrals};

mod error;
mod face_integrals;
mod inertia_tensor;
mod projection_integrals;
mod volume_integrals;
