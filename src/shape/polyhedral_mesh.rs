use crate::math::{Isometry, Point, Vector};
use crate::utils::hashmap::HashMap;
use alloc::vec::Vec;

/// Indicated an inconsistency in the topology of a polyhedral mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// Found a triangle with two or three identical vertices.
    #[error("the triangle {0} has at least two identical vertices.")]
    BadTriangle(u32),
    /// At least two adjacent triangles have opposite orientations, or more than two
    /// triangles share the same edge.
    #[error("the triangles {triangle1} and {triangle2} sharing the edge {edge:?} have opposite orientations.")]
    BadAdjacentTrianglesOrientation {
        /// The first triangle, with an orientation opposite to the second triangle.
        triangle1: u32,
        /// The second triangle, with an orientation opposite to the first triangle.
        triangle2: u32,
        /// The edge shared between the two triangles.
        edge: (u32, u32),
    },
    /// An edge is not shared by any other triangle, so the mesh does not enclose a volume.
    #[error("the edge {edge:?} of the triangle {triangle} has no adjacent triangle.")]
    OpenEdge {
        /// The triangle owning the border edge.
        triangle: u32,
        /// The border edge, in the winding order of `triangle`.
        edge: (u32, u32),
    },
}

/// Indicated an inconsistency while building a polyhedral mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshBuilderError {
    /// A polyhedral mesh must contain at least one triangle.
    #[error("A polyhedral mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {index} which is out of bounds.")]
    VertexIndexOutOfBounds {
        /// The faulty triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
    },
}

/// A closed surface made of triangles with outward-facing counter-clock-wise winding.
///
/// This is the mesh representation consumed by the mass-properties computations. Only the
/// index buffer bounds are checked at construction: the closedness and orientation
/// consistency are checked by [`PolyhedralMesh::check_topology`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PolyhedralMesh {
    vertices: Vec<Point>,
    indices: Vec<[u32; 3]>,
}

impl PolyhedralMesh {
    /// Creates a new polyhedral mesh from a vertex buffer and an index buffer.
    pub fn new(vertices: Vec<Point>, indices: Vec<[u32; 3]>) -> Result<Self, MeshBuilderError> {
        if indices.is_empty() {
            return Err(MeshBuilderError::EmptyIndices);
        }

        for (fid, idx) in indices.iter().enumerate() {
            if let Some(index) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(MeshBuilderError::VertexIndexOutOfBounds {
                    triangle: fid as u32,
                    index: *index,
                });
            }
        }

        Ok(Self { vertices, indices })
    }

    /// Creates a new polyhedral mesh from buffers known to be valid.
    pub(crate) fn new_unchecked(vertices: Vec<Point>, indices: Vec<[u32; 3]>) -> Self {
        debug_assert!(!indices.is_empty());
        debug_assert!(indices
            .iter()
            .flatten()
            .all(|i| (*i as usize) < vertices.len()));
        Self { vertices, indices }
    }

    /// The vertex buffer of this mesh.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    pub fn num_faces(&self) -> usize {
        self.indices.len()
    }

    /// The three vertices of the `i`-th triangle, in winding order.
    pub fn face(&self, i: u32) -> [Point; 3] {
        let idx = self.indices[i as usize];
        idx.map(|vid| self.vertices[vid as usize])
    }

    /// An iterator through the vertices of all the triangles of this mesh.
    pub fn faces(&self) -> impl ExactSizeIterator<Item = [Point; 3]> + '_ {
        self.indices
            .iter()
            .map(|idx| idx.map(|vid| self.vertices[vid as usize]))
    }

    /// Returns a scaled version of this mesh.
    ///
    /// Each vertex coordinate is multiplied by the corresponding component of `scale`.
    pub fn scaled(mut self, scale: &Vector) -> Self {
        self.vertices
            .iter_mut()
            .for_each(|pt| pt.coords.component_mul_assign(scale));
        self
    }

    /// Transforms in-place the vertices of this mesh.
    pub fn transform_vertices(&mut self, transform: &Isometry) {
        self.vertices
            .iter_mut()
            .for_each(|pt| *pt = transform * *pt);
    }

    /// Reverse the orientation of every triangle of this mesh.
    pub fn reverse(&mut self) {
        self.indices.iter_mut().for_each(|idx| idx.swap(0, 1));
    }

    /// Checks that this mesh is a closed two-manifold with consistently oriented triangles.
    ///
    /// Every directed edge `(i, j)` must appear exactly once, and its twin `(j, i)` must
    /// appear exactly once too.
    pub fn check_topology(&self) -> Result<(), TopologyError> {
        let mut half_edge_map = HashMap::default();

        for (fid, idx) in self.indices.iter().enumerate() {
            if idx[0] == idx[1] || idx[0] == idx[2] || idx[1] == idx[2] {
                return Err(TopologyError::BadTriangle(fid as u32));
            }

            for k in 0..3 {
                let edge_key = (idx[k], idx[(k + 1) % 3]);

                if let Some(existing) = half_edge_map.insert(edge_key, fid as u32) {
                    // The same edge already exists with the same vertex order, so
                    // the two triangles have incompatible orientations.
                    return Err(TopologyError::BadAdjacentTrianglesOrientation {
                        edge: edge_key,
                        triangle1: existing,
                        triangle2: fid as u32,
                    });
                }
            }
        }

        // Iterate on the index buffer rather than on the map to report the first open
        // edge deterministically.
        for (fid, idx) in self.indices.iter().enumerate() {
            for k in 0..3 {
                let edge_key = (idx[k], idx[(k + 1) % 3]);

                if !half_edge_map.contains_key(&(edge_key.1, edge_key.0)) {
                    return Err(TopologyError::OpenEdge {
                        triangle: fid as u32,
                        edge: edge_key,
                    });
                }
            }
        }

        Ok(())
    }
}
