use super::{volume_integrals, MassPropertiesError, VolumeIntegrals};
use crate::math::{
    Matrix, Orientation, Point, PrincipalAngularInertia, Real, Rotation, RotationMatrix, Vector,
};
use crate::shape::PolyhedralMesh;
use approx::{AbsDiffEq, RelativeEq};

/// The largest accepted deviation from 1 of the norm of an orientation given to
/// [`InertiaTensor::rotate`].
///
/// Orientations within this tolerance are renormalized before use.
pub const ORIENTATION_NORM_TOLERANCE: Real = 1.0e-3;

const EPSILON: Real = f32::EPSILON as Real;

/// The mass properties of a solid bounded by a polyhedral mesh, with its inertia tensor
/// expressed both in the body frame and in the current spatial frame.
///
/// The body-frame tensor, the center of mass, and the mass are only written by
/// [`InertiaTensor::set_body`]. The spatial-frame tensor is always recomputed from the
/// body-frame tensor by [`InertiaTensor::rotate`], so rotation errors never accumulate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct InertiaTensor {
    body_inertia_tensor: Matrix,
    spatial_inertia_tensor: Matrix,
    mass_center: Point,
    mass: Real,
    volume: Real,
}

impl Default for InertiaTensor {
    fn default() -> Self {
        Self::new()
    }
}

impl InertiaTensor {
    /// An inertia tensor with a zero mass, not yet associated to any body.
    pub fn new() -> Self {
        Self {
            body_inertia_tensor: Matrix::zeros(),
            spatial_inertia_tensor: Matrix::zeros(),
            mass_center: Point::origin(),
            mass: 0.0,
            volume: 0.0,
        }
    }

    /// Computes the mass properties of the solid bounded by `mesh`, with its vertices
    /// scaled by `scale`, and made of a material with the uniform `density`.
    ///
    /// On success, the body-frame inertia tensor is replaced by the inertia tensor of this
    /// solid relative to its center of mass, the spatial-frame inertia tensor is reset to
    /// the body-frame one, and the center of mass and mass are returned. On failure, `self`
    /// is left unchanged.
    ///
    /// The triangles of `mesh` must form a closed surface and be wound counter-clock-wise
    /// when seen from outside of the solid.
    pub fn set_body(
        &mut self,
        mesh: &PolyhedralMesh,
        scale: Vector,
        density: Real,
    ) -> Result<(Point, Real), MassPropertiesError> {
        let (reference, integrals) = integrate_body(mesh, &scale, density).map_err(|err| {
            log::debug!(
                "Rejected the mass properties of a mesh with {} faces: {}",
                mesh.num_faces(),
                err
            );
            err
        })?;

        let t0 = integrals.t0;
        let mass = density * t0;
        let com = integrals.t1 / t0;
        let t2 = integrals.t2 * density;
        let tp = integrals.tp * density;

        // Second moments are integrated about `reference`, so shift them to the center
        // of mass with the parallel-axis theorem. `com` is relative to `reference` and
        // stays small, even for meshes far from the origin.
        let ixx = t2.y + t2.z - mass * (com.y * com.y + com.z * com.z);
        let iyy = t2.z + t2.x - mass * (com.z * com.z + com.x * com.x);
        let izz = t2.x + t2.y - mass * (com.x * com.x + com.y * com.y);
        let ixy = -tp.x + mass * com.x * com.y;
        let iyz = -tp.y + mass * com.y * com.z;
        let izx = -tp.z + mass * com.z * com.x;

        #[rustfmt::skip]
        let body = Matrix::new(
            ixx, ixy, izx,
            ixy, iyy, iyz,
            izx, iyz, izz,
        );

        self.body_inertia_tensor = body;
        self.spatial_inertia_tensor = body;
        self.mass_center = reference + com;
        self.mass = mass;
        self.volume = t0;

        log::debug!(
            "Computed the mass properties of a mesh with {} faces: volume = {}, mass = {}.",
            mesh.num_faces(),
            t0,
            mass
        );

        Ok((self.mass_center, self.mass))
    }

    /// The inertia tensor relative to the center of mass, in the body frame.
    #[inline]
    pub fn body_inertia_tensor(&self) -> &Matrix {
        &self.body_inertia_tensor
    }

    /// A mutable reference to the inertia tensor relative to the center of mass, in the
    /// body frame.
    ///
    /// This is meant for callers who need to override the computed tensor. The spatial
    /// tensor is not updated until the next call to [`InertiaTensor::rotate`].
    #[inline]
    pub fn body_inertia_tensor_mut(&mut self) -> &mut Matrix {
        &mut self.body_inertia_tensor
    }

    /// The inertia tensor relative to the center of mass, in the spatial frame set by the
    /// last rotation.
    #[inline]
    pub fn spatial_inertia_tensor(&self) -> &Matrix {
        &self.spatial_inertia_tensor
    }

    /// A mutable reference to the inertia tensor in the spatial frame.
    #[inline]
    pub fn spatial_inertia_tensor_mut(&mut self) -> &mut Matrix {
        &mut self.spatial_inertia_tensor
    }

    /// The center of mass, in the body frame.
    #[inline]
    pub fn mass_center(&self) -> Point {
        self.mass_center
    }

    /// The mass.
    #[inline]
    pub fn mass(&self) -> Real {
        self.mass
    }

    /// The volume enclosed by the scaled mesh.
    #[inline]
    pub fn volume(&self) -> Real {
        self.volume
    }

    /// Computes the inertia tensor in the spatial frame reached by applying `orientation`
    /// to the body frame.
    ///
    /// The norm of `orientation` must not differ from 1 by more than
    /// [`ORIENTATION_NORM_TOLERANCE`], otherwise this fails with
    /// [`MassPropertiesError::InvalidOrientation`] and `self` is left unchanged. Within the
    /// tolerance, the orientation is renormalized before being converted into a rotation
    /// matrix.
    pub fn rotate(&mut self, orientation: &Orientation) -> Result<Matrix, MassPropertiesError> {
        let norm = orientation.norm();

        if !((norm - 1.0).abs() <= ORIENTATION_NORM_TOLERANCE) {
            log::debug!("Rejected an orientation quaternion with norm {}.", norm);
            return Err(MassPropertiesError::InvalidOrientation(norm));
        }

        if norm != 1.0 {
            log::trace!("Renormalizing an orientation quaternion with norm {}.", norm);
        }

        let rotation = Rotation::new_normalize(*orientation);
        Ok(self.rotate_unit(&rotation))
    }

    /// Computes the inertia tensor in the spatial frame reached by applying `rotation` to
    /// the body frame.
    pub fn rotate_unit(&mut self, rotation: &Rotation) -> Matrix {
        let r = rotation.to_rotation_matrix().into_inner();
        self.spatial_inertia_tensor = r * self.body_inertia_tensor * r.transpose();
        self.spatial_inertia_tensor
    }

    /// The principal moments of inertia and the rotation from the principal axes to the
    /// body frame.
    ///
    /// Negative moments, that can only result from rounding errors, are clamped to zero.
    pub fn principal_inertia(&self) -> (PrincipalAngularInertia, Rotation) {
        let eigen = self.body_inertia_tensor.symmetric_eigen();
        let mut axes = eigen.eigenvectors;

        // The eigenvectors are orthonormal but may form a left-handed basis.
        if axes.determinant() < 0.0 {
            axes.column_mut(2).neg_mut();
        }

        let principal_inertia_frame =
            Rotation::from_rotation_matrix(&RotationMatrix::from_matrix_unchecked(axes));
        let principal_inertia = eigen
            .eigenvalues
            .map(|e| if e < EPSILON { 0.0 } else { e });

        (principal_inertia, principal_inertia_frame)
    }

    /// The inverse of the inertia tensor in the spatial frame.
    ///
    /// Returns `None` if it is not invertible, e.g., if no body was set yet.
    pub fn spatial_inverse_inertia_tensor(&self) -> Option<Matrix> {
        self.spatial_inertia_tensor.try_inverse()
    }
}

fn integrate_body(
    mesh: &PolyhedralMesh,
    scale: &Vector,
    density: Real,
) -> Result<(Point, VolumeIntegrals), MassPropertiesError> {
    if !(density.is_finite() && density > 0.0) {
        return Err(MassPropertiesError::InvalidDensity(density));
    }

    if !scale.iter().all(|s| s.is_finite()) {
        return Err(MassPropertiesError::InvalidScale(*scale));
    }

    if mesh.num_faces() < 4 {
        return Err(MassPropertiesError::NotEnoughFaces(mesh.num_faces()));
    }

    mesh.check_topology()?;
    let reference = volume_integrals::scaled_vertex_mean(mesh, scale);
    let integrals = VolumeIntegrals::of_mesh_about(mesh, scale, &reference)?;
    Ok((reference, integrals))
}

impl AbsDiffEq for InertiaTensor {
    type Epsilon = Real;
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.body_inertia_tensor
            .abs_diff_eq(&other.body_inertia_tensor, epsilon)
            && self
                .spatial_inertia_tensor
                .abs_diff_eq(&other.spatial_inertia_tensor, epsilon)
            && self.mass_center.abs_diff_eq(&other.mass_center, epsilon)
            && self.mass.abs_diff_eq(&other.mass, epsilon)
            && self.volume.abs_diff_eq(&other.volume, epsilon)
    }
}

impl RelativeEq for InertiaTensor {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.body_inertia_tensor
            .relative_eq(&other.body_inertia_tensor, epsilon, max_relative)
            && self.spatial_inertia_tensor.relative_eq(
                &other.spatial_inertia_tensor,
                epsilon,
                max_relative,
            )
            && self
                .mass_center
                .relative_eq(&other.mass_center, epsilon, max_relative)
            && self.mass.relative_eq(&other.mass, epsilon, max_relative)
            && self.volume.relative_eq(&other.volume, epsilon, max_relative)
    }
}
