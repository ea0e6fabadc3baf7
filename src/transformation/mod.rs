//! Generation of polyhedral meshes.

pub mod to_polyhedral_mesh;
pub mod utils;
