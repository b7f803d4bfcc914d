//! Core mesh data structures.
//!
//! This module provides the half-edge mesh representation and related types
//! for representing and manipulating polygon meshes.
//!
//! # Overview
//!
//! The primary type is [`HalfEdgeMesh`], a half-edge (doubly-connected edge
//! list) data structure with O(1) adjacency queries, incremental
//! construction ([`add_vertex`](HalfEdgeMesh::add_vertex),
//! [`add_face`](HalfEdgeMesh::add_face)), lazy deletion
//! ([`delete_face`](HalfEdgeMesh::delete_face) and friends) and compaction
//! ([`collect_garbage`](HalfEdgeMesh::collect_garbage)).
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`HalfEdgeId`] - Identifies a half-edge
//! - [`EdgeId`] - Identifies a full edge (a half-edge pair)
//! - [`FaceId`] - Identifies a face
//!
//! These indices are generic over the underlying integer type
//! ([`MeshIndex`] trait), allowing you to choose `u16`, `u32`, or `u64`
//! based on mesh size.
//!
//! # Construction
//!
//! Meshes are built incrementally, or from face-vertex lists:
//!
//! ```
//! use hedra::mesh::{build_from_triangles, SurfaceMesh};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//!
//! let mesh: SurfaceMesh = build_from_triangles(&vertices, &faces).unwrap();
//! ```

pub mod builder;
mod circulators;
mod compact;
mod delete;
mod halfedge;
mod index;
mod topology;

pub use builder::{build_from_polygons, build_from_triangles, to_face_vertex, SurfaceMesh};
pub use circulators::{
    FaceFaceIter, FaceHalfEdgeIter, FaceOuterHalfEdgeIter, FaceVertexIter, VertexFaceIter,
    VertexHalfEdgeIter, VertexIncomingHalfEdgeIter, VertexVertexIter,
};
pub use halfedge::{Face, HalfEdge, HalfEdgeMesh, MeshPolicy, Vertex};
pub use index::{EdgeId, FaceId, HalfEdgeId, MeshIndex, VertexId};
