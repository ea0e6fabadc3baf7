pub use super::Real;
use na::{Isometry3, Matrix3, Point3, Quaternion, Rotation3, UnitQuaternion, UnitVector3, Vector3};

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The point type.
pub type Point = Point3<Real>;

/// The vector type.
pub type Vector = Vector3<Real>;

/// The unit vector type.
pub type UnitVector = UnitVector3<Real>;

/// The matrix type.
pub type Matrix = Matrix3<Real>;

/// The transformation matrix type.
pub type Isometry = Isometry3<Real>;

/// The rotation type.
pub type Rotation = UnitQuaternion<Real>;

/// A quaternion that is not yet known to have a unit norm.
pub type Orientation = Quaternion<Real>;

/// The rotation matrix type.
pub type RotationMatrix = Rotation3<Real>;

/// The principal angular inertia of a rigid body.
pub type PrincipalAngularInertia = Vector3<Real>;
