use crate::math::*;

/// Computes the normal of a counter-clock-wise triangle.
///
/// Returns `None` if the triangle is degenerate, i.e., if one of its edges
/// has a zero length or if the sine of the angle between its first two edges
/// is negligible.
#[inline]
pub fn ccw_face_normal(pts: [&Point; 3]) -> Option<UnitVector> {
    let ab = *pts[1] - *pts[0];
    let ac = *pts[2] - *pts[0];
    let res = ab.cross(&ac);
    let threshold = DEFAULT_EPSILON * ab.norm() * ac.norm();

    if threshold == 0.0 {
        return None;
    }

    UnitVector::try_new(res, threshold)
}
