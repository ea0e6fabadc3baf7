use crate::math::{Point, Real, Vector};

/// Assignment of the alpha (A), beta (B) and gamma (C) roles to the coordinate axes, for
/// the integration of a single face.
///
/// The gamma axis is the one most aligned with the face normal, and the face is integrated
/// through its projection on the plane spanned by the alpha and beta axes. The roles are
/// always a cyclic permutation of `(X, Y, Z)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AxisPermutation {
    /// `A = Y`, `B = Z`, `C = X`: the face is projected on the YZ plane.
    Yzx,
    /// `A = Z`, `B = X`, `C = Y`: the face is projected on the ZX plane.
    Zxy,
    /// `A = X`, `B = Y`, `C = Z`: the face is projected on the XY plane.
    Xyz,
}

impl AxisPermutation {
    /// Selects the permutation where the gamma axis is the one with the largest absolute
    /// component of `normal`.
    ///
    /// This maximizes the area of the projected face, so that the division by the gamma
    /// component of the normal remains well-conditioned.
    pub fn from_normal(normal: &Vector) -> Self {
        let nx = normal.x.abs();
        let ny = normal.y.abs();
        let nz = normal.z.abs();

        if nx > ny && nx > nz {
            AxisPermutation::Yzx
        } else if ny > nz {
            AxisPermutation::Zxy
        } else {
            AxisPermutation::Xyz
        }
    }

    /// The index of the coordinate axis playing the alpha role.
    #[inline]
    pub fn alpha(self) -> usize {
        (self.gamma() + 1) % 3
    }

    /// The index of the coordinate axis playing the beta role.
    #[inline]
    pub fn beta(self) -> usize {
        (self.gamma() + 2) % 3
    }

    /// The index of the coordinate axis playing the gamma role.
    #[inline]
    pub fn gamma(self) -> usize {
        match self {
            AxisPermutation::Yzx => 0,
            AxisPermutation::Zxy => 1,
            AxisPermutation::Xyz => 2,
        }
    }
}

/// Integrals of monomials of degree up to three over the projection of a triangle on the
/// plane of the alpha and beta axes.
///
/// These are signed integrals: they are positive if the projected triangle is
/// counter-clock-wise in the `(A, B)` plane, and negative otherwise.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ProjectionIntegrals {
    /// `∫ 1` (the signed projected area).
    pub p1: Real,
    /// `∫ a`.
    pub pa: Real,
    /// `∫ b`.
    pub pb: Real,
    /// `∫ a²`.
    pub paa: Real,
    /// `∫ ab`.
    pub pab: Real,
    /// `∫ b²`.
    pub pbb: Real,
    /// `∫ a³`.
    pub paaa: Real,
    /// `∫ a²b`.
    pub paab: Real,
    /// `∫ ab²`.
    pub pabb: Real,
    /// `∫ b³`.
    pub pbbb: Real,
}

impl ProjectionIntegrals {
    /// Computes the projection integrals of the given triangle.
    ///
    /// The integrals are obtained by walking along the edges of the projected triangle
    /// and summing closed-form polynomials of the edge endpoints, which is a discrete form
    /// of Green's theorem.
    pub fn new(vertices: &[Point; 3], permutation: AxisPermutation) -> Self {
        let ia = permutation.alpha();
        let ib = permutation.beta();
        let mut result = Self::default();

        for i in 0..3 {
            let a0 = vertices[i][ia];
            let b0 = vertices[i][ib];
            let a1 = vertices[(i + 1) % 3][ia];
            let b1 = vertices[(i + 1) % 3][ib];
            let da = a1 - a0;
            let db = b1 - b0;

            let a0_2 = a0 * a0;
            let a0_3 = a0_2 * a0;
            let a0_4 = a0_3 * a0;
            let b0_2 = b0 * b0;
            let b0_3 = b0_2 * b0;
            let b0_4 = b0_3 * b0;
            let a1_2 = a1 * a1;
            let a1_3 = a1_2 * a1;
            let b1_2 = b1 * b1;
            let b1_3 = b1_2 * b1;

            let c1 = a1 + a0;
            let ca = a1 * c1 + a0_2;
            let caa = a1 * ca + a0_3;
            let caaa = a1 * caa + a0_4;
            let cb = b1 * (b1 + b0) + b0_2;
            let cbb = b1 * cb + b0_3;
            let cbbb = b1 * cbb + b0_4;
            let cab = 3.0 * a1_2 + 2.0 * a1 * a0 + a0_2;
            let kab = a1_2 + 2.0 * a1 * a0 + 3.0 * a0_2;
            let caab = a0 * cab + 4.0 * a1_3;
            let kaab = a1 * kab + 4.0 * a0_3;
            let cabb = 4.0 * b1_3 + 3.0 * b1_2 * b0 + 2.0 * b1 * b0_2 + b0_3;
            let kabb = b1_3 + 2.0 * b1_2 * b0 + 3.0 * b1 * b0_2 + 4.0 * b0_3;

            result.p1 += db * c1;
            result.pa += db * ca;
            result.paa += db * caa;
            result.paaa += db * caaa;
            result.pb += da * cb;
            result.pbb += da * cbb;
            result.pbbb += da * cbbb;
            result.pab += db * (b1 * cab + b0 * kab);
            result.paab += db * (b1 * caab + b0 * kaab);
            result.pabb += da * (a1 * cabb + a0 * kabb);
        }

        result.p1 /= 2.0;
        result.pa /= 6.0;
        result.paa /= 12.0;
        result.paaa /= 20.0;
        result.pb /= -6.0;
        result.pbb /= -12.0;
        result.pbbb /= -20.0;
        result.pab /= 24.0;
        result.paab /= 60.0;
        result.pabb /= -60.0;

        result
    }
}
