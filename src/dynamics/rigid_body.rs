use crate::mass_properties::{InertiaTensor, MassPropertiesError};
use crate::math::{Isometry, Matrix, Point, Real, Vector};
use crate::shape::PolyhedralMesh;
use alloc::sync::Arc;

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// A rigid body with a uniform density, bounded by a polyhedral mesh.
///
/// This only holds the state needed to feed a dynamics solver: its pose, its mass
/// properties, and whether it is fixed. Time integration is left to the caller, who
/// should call [`RigidBody::update`] whenever the orientation changes and the
/// world-space inertia tensor is needed.
#[derive(Debug, Clone)]
pub struct RigidBody {
    mesh: Arc<PolyhedralMesh>,
    scale: Vector,
    density: Real,
    position: Isometry,
    is_fixed: bool,
    inertia: InertiaTensor,
}

impl RigidBody {
    /// Creates a new dynamic rigid body at the origin, bounded by `mesh` scaled by `scale`.
    pub fn new(
        mesh: Arc<PolyhedralMesh>,
        scale: Vector,
        density: Real,
    ) -> Result<Self, MassPropertiesError> {
        let mut inertia = InertiaTensor::new();
        let _ = inertia.set_body(&mesh, scale, density)?;

        Ok(Self {
            mesh,
            scale,
            density,
            position: Isometry::identity(),
            is_fixed: false,
            inertia,
        })
    }

    /// Creates a new fixed rigid body at the origin, bounded by `mesh` scaled by `scale`.
    pub fn new_fixed(
        mesh: Arc<PolyhedralMesh>,
        scale: Vector,
        density: Real,
    ) -> Result<Self, MassPropertiesError> {
        let mut result = Self::new(mesh, scale, density)?;
        result.is_fixed = true;
        Ok(result)
    }

    /// The mesh bounding this rigid body, in its local frame and before scaling.
    #[inline]
    pub fn mesh(&self) -> &Arc<PolyhedralMesh> {
        &self.mesh
    }

    /// Replaces the mesh bounding this rigid body and recomputes its mass properties.
    ///
    /// On failure the rigid body is left unchanged.
    pub fn set_mesh(&mut self, mesh: Arc<PolyhedralMesh>) -> Result<(), MassPropertiesError> {
        let _ = self.inertia.set_body(&mesh, self.scale, self.density)?;
        self.mesh = mesh;
        self.update();
        Ok(())
    }

    /// The scale applied to the vertices of the mesh.
    #[inline]
    pub fn scale(&self) -> &Vector {
        &self.scale
    }

    /// The density of this rigid body.
    #[inline]
    pub fn density(&self) -> Real {
        self.density
    }

    /// The world-space position of this rigid body.
    #[inline]
    pub fn position(&self) -> &Isometry {
        &self.position
    }

    /// Sets the world-space position of this rigid body.
    ///
    /// The world-space inertia tensor is only refreshed by the next call to
    /// [`RigidBody::update`].
    #[inline]
    pub fn set_position(&mut self, pos: Isometry) {
        self.position = pos;
    }

    /// A mutable reference to the world-space position of this rigid body.
    #[inline]
    pub fn position_mut(&mut self) -> &mut Isometry {
        &mut self.position
    }

    /// The mass of this rigid body.
    #[inline]
    pub fn mass(&self) -> Real {
        self.inertia.mass()
    }

    /// The center of mass of this rigid body in its local frame.
    #[inline]
    pub fn local_center_of_mass(&self) -> Point {
        self.inertia.mass_center()
    }

    /// The world-space center of mass of this rigid body.
    #[inline]
    pub fn center_of_mass(&self) -> Point {
        self.position * self.inertia.mass_center()
    }

    /// Is this rigid body fixed?
    ///
    /// Fixed rigid bodies are not affected by [`RigidBody::update`].
    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.is_fixed
    }

    /// Sets whether this rigid body is fixed.
    #[inline]
    pub fn set_fixed(&mut self, is_fixed: bool) {
        self.is_fixed = is_fixed;
    }

    /// The mass properties of this rigid body.
    #[inline]
    pub fn inertia(&self) -> &InertiaTensor {
        &self.inertia
    }

    /// The inertia tensor of this rigid body relative to its center of mass, with the
    /// orientation set by the last call to [`RigidBody::update`].
    #[inline]
    pub fn world_inertia_tensor(&self) -> &Matrix {
        self.inertia.spatial_inertia_tensor()
    }

    /// Refreshes the world-space inertia tensor from the current orientation.
    pub fn update(&mut self) {
        if !self.is_fixed {
            let _ = self.inertia.rotate_unit(&self.position.rotation);
        }
    }
}
