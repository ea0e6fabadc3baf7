//! Rigid bodies whose inertia is derived from their polyhedral mesh.

pub use self::rigid_body::RigidBody;

mod rigid_body;
