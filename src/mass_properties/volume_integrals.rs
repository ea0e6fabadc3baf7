use super::{AxisPermutation, FaceIntegrals, MassPropertiesError};
use crate::math::{Point, Real, Vector};
use crate::shape::PolyhedralMesh;
use crate::utils;
use core::iter::Sum;
use core::ops::{Add, AddAssign};
use num::Zero;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Raw, not yet normalized, sums of the face contributions to the volume integrals.
///
/// This is a commutative monoid: contributions of individual faces can be summed in any
/// order, or reduced in parallel, before being normalized once with
/// [`VolumeIntegralSums::finalize`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VolumeIntegralSums {
    /// Sum for `∫ 1`.
    pub t0: Real,
    /// Sums for `[∫ x, ∫ y, ∫ z]`, before division by 2.
    pub t1: Vector,
    /// Sums for `[∫ x², ∫ y², ∫ z²]`, before division by 3.
    pub t2: Vector,
    /// Sums for `[∫ xy, ∫ yz, ∫ zx]`, before division by 2.
    pub tp: Vector,
}

impl VolumeIntegralSums {
    /// Computes the contribution of a single face to the volume integrals.
    ///
    /// The vertices must be given in counter-clock-wise order when seen from outside of
    /// the polyhedron. The `face_id` is only used for error reporting.
    pub fn of_face(face_id: u32, vertices: &[Point; 3]) -> Result<Self, MassPropertiesError> {
        let normal = utils::ccw_face_normal([&vertices[0], &vertices[1], &vertices[2]])
            .ok_or(MassPropertiesError::DegenerateFace(face_id))?;
        let f = FaceIntegrals::new(vertices, &normal);
        let (nx, ny, nz) = (normal.x, normal.y, normal.z);

        let result = match f.permutation {
            AxisPermutation::Xyz => Self {
                t0: nx * f.fa,
                t1: Vector::new(nx * f.faa, ny * f.fbb, nz * f.fcc),
                t2: Vector::new(nx * f.faaa, ny * f.fbbb, nz * f.fccc),
                tp: Vector::new(nx * f.faab, ny * f.fbbc, nz * f.fcca),
            },
            AxisPermutation::Yzx => Self {
                t0: nx * f.fc,
                t1: Vector::new(nx * f.fcc, ny * f.faa, nz * f.fbb),
                t2: Vector::new(nx * f.fccc, ny * f.faaa, nz * f.fbbb),
                tp: Vector::new(nx * f.fcca, ny * f.faab, nz * f.fbbc),
            },
            AxisPermutation::Zxy => Self {
                t0: nx * f.fb,
                t1: Vector::new(nx * f.fbb, ny * f.fcc, nz * f.faa),
                t2: Vector::new(nx * f.fbbb, ny * f.fccc, nz * f.faaa),
                tp: Vector::new(nx * f.fbbc, ny * f.fcca, nz * f.faab),
            },
        };

        Ok(result)
    }

    /// Applies the normalization factors to these sums.
    pub fn finalize(self) -> VolumeIntegrals {
        VolumeIntegrals {
            t0: self.t0,
            t1: self.t1 / 2.0,
            t2: self.t2 / 3.0,
            tp: self.tp / 2.0,
        }
    }
}

impl Zero for VolumeIntegralSums {
    fn zero() -> Self {
        Self {
            t0: 0.0,
            t1: Vector::zeros(),
            t2: Vector::zeros(),
            tp: Vector::zeros(),
        }
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Add for VolumeIntegralSums {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            t0: self.t0 + other.t0,
            t1: self.t1 + other.t1,
            t2: self.t2 + other.t2,
            tp: self.tp + other.tp,
        }
    }
}

impl AddAssign for VolumeIntegralSums {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.t0 += other.t0;
        self.t1 += other.t1;
        self.t2 += other.t2;
        self.tp += other.tp;
    }
}

impl Sum for VolumeIntegralSums {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, e| acc + e)
    }
}

impl<'a> Sum<&'a VolumeIntegralSums> for VolumeIntegralSums {
    fn sum<I: Iterator<Item = &'a VolumeIntegralSums>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, e| acc + *e)
    }
}

/// The integrals over the volume enclosed by a polyhedral mesh of all the monomials needed
/// to derive its mass properties.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VolumeIntegrals {
    /// `∫ 1`, i.e., the signed volume.
    pub t0: Real,
    /// `[∫ x, ∫ y, ∫ z]`.
    pub t1: Vector,
    /// `[∫ x², ∫ y², ∫ z²]`.
    pub t2: Vector,
    /// `[∫ xy, ∫ yz, ∫ zx]`.
    pub tp: Vector,
}

impl VolumeIntegrals {
    /// Computes the volume integrals of the given mesh, after scaling its vertices by
    /// `scale`.
    ///
    /// The mesh is assumed to be closed and consistently oriented (see
    /// [`PolyhedralMesh::check_topology`]). Fails with
    /// [`MassPropertiesError::InvertedVolume`] if the resulting volume is not strictly
    /// positive.
    pub fn of_mesh(mesh: &PolyhedralMesh, scale: &Vector) -> Result<Self, MassPropertiesError> {
        Self::of_mesh_about(mesh, scale, &Point::origin())
    }

    /// Computes the volume integrals of the given mesh, after scaling its vertices by
    /// `scale`, in a frame with its origin at `reference`.
    ///
    /// `reference` is expressed in the scaled frame of the mesh. Choosing a point close to
    /// the mesh keeps the second moments accurate for meshes far from the origin.
    pub fn of_mesh_about(
        mesh: &PolyhedralMesh,
        scale: &Vector,
        reference: &Point,
    ) -> Result<Self, MassPropertiesError> {
        #[cfg(not(feature = "parallel"))]
        let sums = sum_faces_sequential(mesh, scale, reference)?;
        #[cfg(feature = "parallel")]
        let sums = sum_faces_parallel(mesh, scale, reference)?;

        let integrals = sums.finalize();

        // NOTE: written so that a NaN volume is rejected too.
        if !(integrals.t0 > 0.0) {
            return Err(MassPropertiesError::InvertedVolume(integrals.t0));
        }

        Ok(integrals)
    }
}

/// The mean of the scaled vertices of `mesh`.
pub(crate) fn scaled_vertex_mean(mesh: &PolyhedralMesh, scale: &Vector) -> Point {
    let sum = mesh
        .vertices()
        .iter()
        .fold(Vector::zeros(), |acc, pt| acc + pt.coords.component_mul(scale));
    Point::from(sum / mesh.vertices().len().max(1) as Real)
}

fn scaled_face(
    mesh: &PolyhedralMesh,
    face_id: u32,
    scale: &Vector,
    reference: &Point,
) -> [Point; 3] {
    mesh.face(face_id)
        .map(|pt| Point::from(pt.coords.component_mul(scale) - reference.coords))
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn sum_faces_sequential(
    mesh: &PolyhedralMesh,
    scale: &Vector,
    reference: &Point,
) -> Result<VolumeIntegralSums, MassPropertiesError> {
    (0..mesh.num_faces() as u32)
        .map(|fid| VolumeIntegralSums::of_face(fid, &scaled_face(mesh, fid, scale, reference)))
        .sum()
}

#[cfg(feature = "parallel")]
fn sum_faces_parallel(
    mesh: &PolyhedralMesh,
    scale: &Vector,
    reference: &Point,
) -> Result<VolumeIntegralSums, MassPropertiesError> {
    (0..mesh.num_faces() as u32)
        .into_par_iter()
        .map(|fid| VolumeIntegralSums::of_face(fid, &scaled_face(mesh, fid, scale, reference)))
        .try_reduce(VolumeIntegralSums::zero, |a, b| Ok(a + b))
}
