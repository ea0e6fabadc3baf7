//! Closed polyhedral meshes approximating common solids.
//!
//! Every mesh generated here is a closed two-manifold with triangles wound
//! counter-clock-wise when seen from outside, so it can be given as-is to
//! [`InertiaTensor::set_body`](crate::mass_properties::InertiaTensor::set_body). Solids of
//! revolution have their axis along `y` and are centered at the origin.

use crate::math::{Point, Real, Vector};
use crate::shape::PolyhedralMesh;
use crate::transformation::utils;
use alloc::vec::Vec;
use na::{ComplexField, RealField};

/// Discretizes the boundary of a cuboid centered at the origin.
pub fn cuboid(half_extents: &Vector) -> PolyhedralMesh {
    let (hx, hy, hz) = (half_extents.x, half_extents.y, half_extents.z);
    let vertices = vec![
        Point::new(-hx, -hy, hz),
        Point::new(-hx, -hy, -hz),
        Point::new(hx, -hy, -hz),
        Point::new(hx, -hy, hz),
        Point::new(-hx, hy, hz),
        Point::new(-hx, hy, -hz),
        Point::new(hx, hy, -hz),
        Point::new(hx, hy, hz),
    ];

    let indices = vec![
        [4, 5, 0],
        [5, 1, 0],
        [5, 6, 1],
        [6, 2, 1],
        [6, 7, 3],
        [2, 6, 3],
        [7, 4, 0],
        [3, 7, 0],
        [0, 1, 2],
        [3, 0, 2],
        [7, 6, 5],
        [4, 7, 5],
    ];

    PolyhedralMesh::new_unchecked(vertices, indices)
}

/// Discretizes the boundary of a cylinder with its axis along `y`.
///
/// Each circle is discretized with `nsubdiv` points, clamped to at least 3.
pub fn cylinder(half_height: Real, radius: Real, nsubdiv: u32) -> PolyhedralMesh {
    let nsubdiv = nsubdiv.max(3);
    let dtheta = Real::two_pi() / (nsubdiv as Real);
    let mut vertices = Vec::with_capacity(2 * nsubdiv as usize);
    let mut indices = Vec::with_capacity(4 * nsubdiv as usize);

    utils::push_circle(radius, nsubdiv, dtheta, -half_height, &mut vertices);
    utils::push_circle(radius, nsubdiv, dtheta, half_height, &mut vertices);

    utils::push_ring_indices(0, nsubdiv, nsubdiv, &mut indices);
    utils::push_filled_circle_indices(0, nsubdiv, &mut indices);

    let top_start = indices.len();
    utils::push_filled_circle_indices(nsubdiv, nsubdiv, &mut indices);
    utils::reverse_winding(&mut indices[top_start..]);

    PolyhedralMesh::new_unchecked(vertices, indices)
}

/// Discretizes the boundary of a cone with its axis along `y` and its apex toward `+y`.
///
/// The base circle is discretized with `nsubdiv` points, clamped to at least 3.
pub fn cone(half_height: Real, radius: Real, nsubdiv: u32) -> PolyhedralMesh {
    let nsubdiv = nsubdiv.max(3);
    let dtheta = Real::two_pi() / (nsubdiv as Real);
    let mut vertices = Vec::with_capacity(nsubdiv as usize + 1);
    let mut indices = Vec::with_capacity(2 * nsubdiv as usize);

    utils::push_circle(radius, nsubdiv, dtheta, -half_height, &mut vertices);
    vertices.push(Point::new(0.0, half_height, 0.0));

    utils::push_apex_fan_indices(0, nsubdiv, nsubdiv, &mut indices);
    utils::push_filled_circle_indices(0, nsubdiv, &mut indices);

    PolyhedralMesh::new_unchecked(vertices, indices)
}

/// Discretizes the boundary of a ball centered at the origin.
///
/// The sphere is split into `ntheta_subdiv` meridians (at least 3) and `nphi_subdiv`
/// latitude bands (at least 2). Each pole is a single vertex.
pub fn ball(radius: Real, ntheta_subdiv: u32, nphi_subdiv: u32) -> PolyhedralMesh {
    let ntheta = ntheta_subdiv.max(3);
    let nphi = nphi_subdiv.max(2);
    let dtheta = Real::two_pi() / (ntheta as Real);
    let dphi = Real::pi() / (nphi as Real);
    let nrings = nphi - 1;

    let mut vertices = Vec::with_capacity((nrings * ntheta + 2) as usize);
    let mut indices = Vec::with_capacity((2 * nphi * ntheta) as usize);
    let mut curr_phi = -Real::frac_pi_2() + dphi;

    for _ in 0..nrings {
        utils::push_circle(
            ComplexField::cos(curr_phi) * radius,
            ntheta,
            dtheta,
            ComplexField::sin(curr_phi) * radius,
            &mut vertices,
        );
        curr_phi += dphi;
    }

    let south_pole = vertices.len() as u32;
    vertices.push(Point::new(0.0, -radius, 0.0));
    let north_pole = vertices.len() as u32;
    vertices.push(Point::new(0.0, radius, 0.0));

    for i in 0..nrings - 1 {
        utils::push_ring_indices(i * ntheta, (i + 1) * ntheta, ntheta, &mut indices);
    }

    utils::push_apex_fan_indices((nrings - 1) * ntheta, north_pole, ntheta, &mut indices);

    // The south pole lies below its circle, so its fan must be flipped.
    let south_start = indices.len();
    utils::push_apex_fan_indices(0, south_pole, ntheta, &mut indices);
    utils::reverse_winding(&mut indices[south_start..]);

    PolyhedralMesh::new_unchecked(vertices, indices)
}
