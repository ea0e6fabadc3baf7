//! Shapes whose mass properties can be computed.

pub use self::polyhedral_mesh::{MeshBuilderError, PolyhedralMesh, TopologyError};

mod polyhedral_mesh;
