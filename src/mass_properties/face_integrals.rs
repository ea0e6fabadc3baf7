use super::{AxisPermutation, ProjectionIntegrals};
use crate::math::{Point, Real, UnitVector};

/// Integrals of monomials of degree up to three over a single triangular face.
///
/// The monomials are expressed with the face-local `a`, `b`, `c` coordinates given by
/// the face's [`AxisPermutation`]. Only the integrals needed by the volume integrals are
/// computed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FaceIntegrals {
    /// The axis roles used to compute these integrals.
    pub permutation: AxisPermutation,
    /// `∫ a`.
    pub fa: Real,
    /// `∫ b`.
    pub fb: Real,
    /// `∫ c`.
    pub fc: Real,
    /// `∫ a²`.
    pub faa: Real,
    /// `∫ b²`.
    pub fbb: Real,
    /// `∫ c²`.
    pub fcc: Real,
    /// `∫ a³`.
    pub faaa: Real,
    /// `∫ b³`.
    pub fbbb: Real,
    /// `∫ c³`.
    pub fccc: Real,
    /// `∫ a²b`.
    pub faab: Real,
    /// `∫ b²c`.
    pub fbbc: Real,
    /// `∫ c²a`.
    pub fcca: Real,
}

impl FaceIntegrals {
    /// Computes the face integrals of the triangle with the given vertices and outward
    /// unit normal.
    ///
    /// The face is projected on the plane orthogonal to the axis most aligned with
    /// `normal`, and the projection integrals are lifted back onto the face plane
    /// `n · x + w = 0`.
    pub fn new(vertices: &[Point; 3], normal: &UnitVector) -> Self {
        let permutation = AxisPermutation::from_normal(normal);
        let p = ProjectionIntegrals::new(vertices, permutation);

        let na = normal[permutation.alpha()];
        let nb = normal[permutation.beta()];
        let nc = normal[permutation.gamma()];
        let w = -normal.dot(&vertices[0].coords);

        // |nc| >= 1/sqrt(3) thanks to the choice of permutation.
        let k1 = 1.0 / nc;
        let k2 = k1 * k1;
        let k3 = k2 * k1;
        let k4 = k3 * k1;

        let na_2 = na * na;
        let nb_2 = nb * nb;

        let fa = k1 * p.pa;
        let fb = k1 * p.pb;
        let fc = -k2 * (na * p.pa + nb * p.pb + w * p.p1);

        let faa = k1 * p.paa;
        let fbb = k1 * p.pbb;
        let fcc = k3
            * (na_2 * p.paa
                + 2.0 * na * nb * p.pab
                + nb_2 * p.pbb
                + w * (2.0 * (na * p.pa + nb * p.pb) + w * p.p1));

        let faaa = k1 * p.paaa;
        let fbbb = k1 * p.pbbb;
        let fccc = -k4
            * (na_2 * na * p.paaa
                + 3.0 * na_2 * nb * p.paab
                + 3.0 * na * nb_2 * p.pabb
                + nb_2 * nb * p.pbbb
                + 3.0 * w * (na_2 * p.paa + 2.0 * na * nb * p.pab + nb_2 * p.pbb)
                + w * w * (3.0 * (na * p.pa + nb * p.pb) + w * p.p1));

        let faab = k1 * p.paab;
        let fbbc = -k2 * (na * p.pabb + nb * p.pbbb + w * p.pbb);
        let fcca = k3
            * (na_2 * p.paaa
                + 2.0 * na * nb * p.paab
                + nb_2 * p.pabb
                + w * (2.0 * (na * p.paa + nb * p.pab) + w * p.pa));

        Self {
            permutation,
            fa,
            fb,
            fc,
            faa,
            fbb,
            fcc,
            faaa,
            fbbb,
            fccc,
            faab,
            fbbc,
            fcca,
        }
    }
}
