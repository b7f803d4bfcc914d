//! Mesh construction utilities.
//!
//! This module provides functions for building half-edge meshes from
//! face-vertex lists as commonly found in mesh file formats, with input
//! validation up front. The topological core itself carries no geometry;
//! these helpers store the vertex positions as the vertex payload of a
//! [`SurfaceMesh`].

use nalgebra::Point3;

use super::halfedge::{HalfEdgeMesh, MeshPolicy};
use super::index::{MeshIndex, VertexId};
use crate::error::{MeshError, Result};

/// A manifold polygon mesh with a 3D position per vertex and no other
/// payloads.
pub type SurfaceMesh<I = u32> = HalfEdgeMesh<Point3<f64>, (), (), (), I>;

/// Build a half-edge mesh from vertices and triangle faces.
///
/// # Arguments
/// * `vertices` - List of vertex positions
/// * `faces` - List of triangle faces, each as [v0, v1, v2] indices
///
/// # Returns
/// A manifold half-edge mesh, or an error if the input is invalid or a
/// face cannot be inserted without breaking the topology.
///
/// # Example
/// ```
/// use hedra::mesh::{build_from_triangles, SurfaceMesh};
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let faces = vec![[0, 1, 2]];
///
/// let mesh: SurfaceMesh = build_from_triangles(&vertices, &faces).unwrap();
/// assert_eq!(mesh.num_vertices(), 3);
/// assert_eq!(mesh.num_faces(), 1);
/// ```
pub fn build_from_triangles<I: MeshIndex>(
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
) -> Result<SurfaceMesh<I>> {
    let polygons: Vec<Vec<usize>> = faces.iter().map(|f| f.to_vec()).collect();
    build_from_polygons(vertices, &polygons, MeshPolicy::Manifold)
}

/// Build a half-edge mesh from vertices and arbitrary polygon faces.
///
/// Faces may mix arities (n >= 3 each). The `policy` selects between
/// manifold and non-manifold insertion semantics.
///
/// # Errors
///
/// * [`MeshError::EmptyMesh`] when `faces` is empty
/// * [`MeshError::InvalidVertexIndex`] for an out-of-range vertex index
/// * [`MeshError::DegenerateFace`] for a face with repeated vertices or
///   fewer than three of them
/// * [`MeshError::FaceRejected`] when the insertion checks turn a face
///   down (occupied slot, closed star, unspliceable fan)
pub fn build_from_polygons<I: MeshIndex>(
    vertices: &[Point3<f64>],
    faces: &[Vec<usize>],
    policy: MeshPolicy,
) -> Result<SurfaceMesh<I>> {
    if faces.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    // Validate the input before touching the mesh.
    for (fi, face) in faces.iter().enumerate() {
        if face.len() < 3 {
            return Err(MeshError::DegenerateFace { face: fi });
        }
        for &vi in face {
            if vi >= vertices.len() {
                return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
            }
        }
        for (k, &vi) in face.iter().enumerate() {
            if face[..k].contains(&vi) {
                return Err(MeshError::DegenerateFace { face: fi });
            }
        }
    }

    let mut mesh = SurfaceMesh::<I>::with_policy(policy);
    mesh.reserve_vertices(vertices.len());
    mesh.reserve_faces(faces.len());

    let vertex_ids: Vec<VertexId<I>> = vertices
        .iter()
        .map(|&pos| mesh.add_vertex_with(pos))
        .collect();

    for (fi, face) in faces.iter().enumerate() {
        let corners: Vec<VertexId<I>> = face.iter().map(|&vi| vertex_ids[vi]).collect();
        if !mesh.add_face(&corners).is_valid() {
            return Err(MeshError::FaceRejected { face: fi });
        }
    }

    Ok(mesh)
}

/// Convert a half-edge mesh back to a face-vertex representation.
///
/// Returns a (vertices, faces) tuple. Deleted faces are skipped; call
/// [`collect_garbage`](HalfEdgeMesh::collect_garbage) first if the mesh
/// has tombstoned vertices, otherwise their (stale) positions are included
/// and the face indices refer to the uncompacted vertex sequence.
pub fn to_face_vertex<I: MeshIndex>(mesh: &SurfaceMesh<I>) -> (Vec<Point3<f64>>, Vec<Vec<usize>>) {
    let vertices: Vec<Point3<f64>> = mesh.vertex_data().to_vec();

    let faces: Vec<Vec<usize>> = mesh
        .face_ids()
        .filter(|&f| !mesh.is_deleted_face(f))
        .map(|f| mesh.face_vertices(f).map(|v| v.index()).collect())
        .collect();

    (vertices, faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> (Vec<Point3<f64>>, Vec<[usize; 3]>) {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
        ];
        let faces = vec![[0, 1, 2]];
        (vertices, faces)
    }

    fn two_triangles() -> (Vec<Point3<f64>>, Vec<[usize; 3]>) {
        // Two triangles sharing an edge
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, -1.0, 0.0),
        ];
        let faces = vec![[0, 1, 2], [1, 0, 3]];
        (vertices, faces)
    }

    #[test]
    fn test_single_triangle() {
        let (vertices, faces) = single_triangle();
        let mesh: SurfaceMesh = build_from_triangles(&vertices, &faces).unwrap();

        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.num_halfedges(), 6);
        mesh.validate().unwrap();

        // All vertices should be on boundary
        for v in mesh.vertex_ids() {
            assert!(mesh.is_boundary_vertex(v));
        }
    }

    #[test]
    fn test_two_triangles() {
        let (vertices, faces) = two_triangles();
        let mesh: SurfaceMesh = build_from_triangles(&vertices, &faces).unwrap();

        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_faces(), 2);
        assert_eq!(mesh.num_edges(), 5);
        mesh.validate().unwrap();
    }

    #[test]
    fn test_roundtrip() {
        let (vertices, faces) = two_triangles();
        let mesh: SurfaceMesh = build_from_triangles(&vertices, &faces).unwrap();

        let (out_verts, out_faces) = to_face_vertex(&mesh);

        assert_eq!(vertices.len(), out_verts.len());
        assert_eq!(faces.len(), out_faces.len());

        // Positions should match
        for (v_in, v_out) in vertices.iter().zip(out_verts.iter()) {
            assert!((v_in - v_out).norm() < 1e-10);
        }
        // Each face comes back as a rotation of its input cycle.
        for (f_in, f_out) in faces.iter().zip(out_faces.iter()) {
            assert_eq!(f_out.len(), 3);
            let pos = f_out.iter().position(|&v| v == f_in[0]).unwrap();
            assert_eq!(f_out[(pos + 1) % 3], f_in[1]);
            assert_eq!(f_out[(pos + 2) % 3], f_in[2]);
        }
    }

    #[test]
    fn test_invalid_vertex_index() {
        let vertices = vec![Point3::new(0.0, 0.0, 0.0)];
        let faces = vec![[0, 1, 2]]; // Indices 1 and 2 are invalid

        let result: Result<SurfaceMesh> = build_from_triangles(&vertices, &faces);
        assert!(matches!(
            result,
            Err(MeshError::InvalidVertexIndex { face: 0, .. })
        ));
    }

    #[test]
    fn test_degenerate_face() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
        ];
        let faces = vec![[0, 0, 2]]; // Degenerate: v0 == v1

        let result: Result<SurfaceMesh> = build_from_triangles(&vertices, &faces);
        assert!(matches!(result, Err(MeshError::DegenerateFace { face: 0 })));
    }

    #[test]
    fn test_empty_input() {
        let result: Result<SurfaceMesh> = build_from_triangles(&[], &[]);
        assert!(matches!(result, Err(MeshError::EmptyMesh)));
    }

    #[test]
    fn test_rejected_face_is_reported() {
        // The second triangle claims the oriented slot 0 -> 1 again.
        let (vertices, _) = two_triangles();
        let faces = vec![[0, 1, 2], [0, 1, 3]];

        let result: Result<SurfaceMesh> = build_from_triangles(&vertices, &faces);
        assert!(matches!(result, Err(MeshError::FaceRejected { face: 1 })));
    }

    #[test]
    fn test_mixed_arity_polygons() {
        // A quad with a triangle glued to one side.
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.5, -1.0, 0.0),
        ];
        let faces = vec![vec![0, 1, 2, 3], vec![1, 0, 4]];

        let mesh: SurfaceMesh =
            build_from_polygons(&vertices, &faces, MeshPolicy::Manifold).unwrap();
        assert_eq!(mesh.num_faces(), 2);
        assert_eq!(mesh.num_edges(), 7);
        mesh.validate().unwrap();
    }
}
