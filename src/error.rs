//! Error types for hedra.
//!
//! This module defines all error types used throughout the library.
//!
//! The incremental mutation API ([`add_face`](crate::mesh::HalfEdgeMesh::add_face))
//! reports structural rejection through an invalid [`FaceId`](crate::mesh::FaceId)
//! rather than an error, so that a rejected insertion costs nothing. The
//! batch construction API in [`crate::mesh::builder`] and the integrity
//! checks surface [`MeshError`] instead.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh operations.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has duplicate vertex indices (degenerate polygon).
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// A face was rejected because inserting it would break the mesh
    /// topology (occupied half-edge slot, closed vertex star, or a fan that
    /// cannot be spliced).
    #[error("face {face} was rejected: inserting it would break the topology")]
    FaceRejected {
        /// The face index.
        face: usize,
    },

    /// Invalid mesh state for the requested operation.
    #[error("invalid mesh state: {0}")]
    InvalidState(String),
}
