use crate::math::{Real, Vector};
use crate::shape::TopologyError;

/// Errors that can occur while computing the mass properties of a polyhedral mesh, or while
/// rotating its inertia tensor.
///
/// None of these errors is transient: they all indicate an invalid input. A wrong inertia
/// tensor silently fed to a dynamics integrator would be much harder to diagnose, so no
/// input is ever "repaired" by the computation.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use polymass3d::mass_properties::{InertiaTensor, MassPropertiesError};
/// use polymass3d::math::Vector;
/// use polymass3d::transformation::to_polyhedral_mesh;
///
/// let mut mesh = to_polyhedral_mesh::cuboid(&Vector::new(0.5, 0.5, 0.5));
/// mesh.reverse();
///
/// let mut inertia = InertiaTensor::new();
/// match inertia.set_body(&mesh, Vector::repeat(1.0), 1.0) {
///     Err(MassPropertiesError::InvertedVolume(volume)) => assert!(volume < 0.0),
///     _ => unreachable!(),
/// }
/// # }
/// ```
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum MassPropertiesError {
    /// A closed polyhedron has at least four faces.
    #[error("a closed polyhedron needs at least 4 faces, found {0}.")]
    NotEnoughFaces(usize),
    /// The density is negative, zero, infinite or NaN.
    #[error("the density must be finite and strictly positive, found {0}.")]
    InvalidDensity(Real),
    /// At least one scale factor is infinite or NaN.
    #[error("the scale factors must be finite, found {0:?}.")]
    InvalidScale(Vector),
    /// The mesh is not a closed, consistently oriented, two-manifold.
    #[error("the mesh is not a closed consistently-oriented manifold: {0}")]
    NonManifold(#[from] TopologyError),
    /// The face with the given index has a zero area (after scaling).
    #[error("the face {0} is degenerate: its normal has a zero length.")]
    DegenerateFace(u32),
    /// The signed volume enclosed by the mesh is negative or zero.
    ///
    /// This typically happens when the faces are oriented inward instead of outward.
    #[error("the signed volume enclosed by the mesh is {0}, its faces may be oriented inward.")]
    InvertedVolume(Real),
    /// The orientation given for rotating the inertia tensor is too far from a unit quaternion.
    #[error("the orientation quaternion has a norm of {0} instead of 1.")]
    InvalidOrientation(Real),
}
