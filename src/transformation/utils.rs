//! Low-level building blocks for the generation of closed polyhedral meshes.
//!
//! Vertices are pushed to a `Vec<Point>` and triangles to a `Vec<[u32; 3]>`. Index
//! generation works with offsets into the vertex buffer so that several pieces can be
//! assembled incrementally. Every triangle pushed by these functions is wound
//! counter-clock-wise when seen from outside of the surface being built, unless stated
//! otherwise.

use crate::math::{Point, Real};
use alloc::vec::Vec;
use na::ComplexField;

/// Pushes `nsubdiv` points evenly spaced on a circle of the plane `y = y`, centered on the
/// `y` axis.
///
/// The angle increases from the `+x` axis toward the `+z` axis.
#[inline]
pub fn push_circle(radius: Real, nsubdiv: u32, dtheta: Real, y: Real, out: &mut Vec<Point>) {
    let mut curr_theta: Real = 0.0;

    for _ in 0..nsubdiv {
        out.push(Point::new(
            ComplexField::cos(curr_theta) * radius,
            y,
            ComplexField::sin(curr_theta) * radius,
        ));
        curr_theta += dtheta;
    }
}

/// Pushes the two triangles of the quad `ul, ur, dr, dl`.
#[inline]
pub(crate) fn push_rectangle_indices(
    ul: u32,
    ur: u32,
    dl: u32,
    dr: u32,
    out: &mut Vec<[u32; 3]>,
) {
    out.push([ul, dl, dr]);
    out.push([dr, ur, ul]);
}

/// Pushes the triangles of the band joining two circles generated by [`push_circle`], the
/// upper circle being the one with the largest `y`.
///
/// The band is closed: the last points of each circle are joined to their first points.
#[inline]
pub fn push_ring_indices(
    base_lower_circle: u32,
    base_upper_circle: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; 3]>,
) {
    for i in 0..nsubdiv {
        let next = (i + 1) % nsubdiv;
        push_rectangle_indices(
            base_upper_circle + next,
            base_upper_circle + i,
            base_lower_circle + next,
            base_lower_circle + i,
            out,
        );
    }
}

/// Pushes the triangles joining every edge of a circle generated by [`push_circle`] to the
/// `apex` point, located above the circle.
#[inline]
pub fn push_apex_fan_indices(base_circle: u32, apex: u32, nsubdiv: u32, out: &mut Vec<[u32; 3]>) {
    for i in 0..nsubdiv {
        let next = (i + 1) % nsubdiv;
        out.push([base_circle + i, apex, base_circle + next]);
    }
}

/// Pushes the triangles filling a circle generated by [`push_circle`].
///
/// The triangles face the `-y` direction.
#[inline]
pub fn push_filled_circle_indices(base_circle: u32, nsubdiv: u32, out: &mut Vec<[u32; 3]>) {
    for i in base_circle + 1..base_circle + nsubdiv - 1 {
        out.push([base_circle, i, i + 1]);
    }
}

/// Flips the winding of the given triangles.
#[inline]
pub fn reverse_winding(indices: &mut [[u32; 3]]) {
    indices.iter_mut().for_each(|idx| idx.swap(0, 1));
}
