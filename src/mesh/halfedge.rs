//! Half-edge mesh data structure.
//!
//! This module provides a half-edge (doubly-connected edge list) representation
//! for polygon meshes. This structure enables O(1) adjacency queries and is
//! the foundation for most geometry processing algorithms.
//!
//! # Structure
//!
//! - Each edge is split into two **half-edges** pointing in opposite directions.
//!   The two halves of an edge are stored next to each other, so the opposite
//!   half-edge is computed by flipping the lowest index bit and never stored.
//! - Each half-edge knows its **target vertex** (the vertex it points to),
//!   **next** and **prev** (the half-edges around its face cycle), and its
//!   incident **face**
//! - Each vertex stores one outgoing half-edge
//! - Each face stores one half-edge of its inner cycle
//!
//! # Boundary Handling
//!
//! Boundary half-edges (on mesh boundaries) have an invalid face ID. Boundary
//! loops can be traversed using the `next` pointer on boundary half-edges. In
//! a manifold mesh, a boundary vertex always stores a boundary half-edge as
//! its outgoing half-edge.
//!
//! # Deletion
//!
//! Elements are deleted lazily: `delete_vertex`, `delete_edge` and
//! `delete_face` only mark elements by writing a sentinel into one
//! distinguished field (a vertex's outgoing half-edge, a half-edge's target
//! vertex, a face's inner half-edge). Marked elements stay addressable until
//! [`HalfEdgeMesh::collect_garbage`] compacts the storage and renumbers every
//! index.

use super::index::{EdgeId, FaceId, HalfEdgeId, MeshIndex, VertexId};
use crate::error::{MeshError, Result};

/// A vertex in the half-edge mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex<I: MeshIndex = u32> {
    /// One outgoing half-edge from this vertex.
    ///
    /// Invalid for isolated and for deleted vertices. For boundary vertices
    /// of a manifold mesh, this is guaranteed to be a boundary half-edge.
    pub halfedge: HalfEdgeId<I>,
}

impl<I: MeshIndex> Vertex<I> {
    /// Create a new isolated vertex.
    pub fn new() -> Self {
        Self {
            halfedge: HalfEdgeId::invalid(),
        }
    }
}

impl<I: MeshIndex> Default for Vertex<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// A half-edge in the mesh.
///
/// The opposite half-edge is not stored; it is the pair sibling at index
/// `i ^ 1` (see [`HalfEdgeId::opposite`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfEdge<I: MeshIndex = u32> {
    /// The vertex this half-edge points to.
    /// Invalid for deleted half-edges.
    pub target: VertexId<I>,

    /// The next half-edge around the face (counter-clockwise).
    pub next: HalfEdgeId<I>,

    /// The previous half-edge around the face (clockwise).
    pub prev: HalfEdgeId<I>,

    /// The face this half-edge belongs to.
    /// Invalid for boundary half-edges.
    pub face: FaceId<I>,
}

impl<I: MeshIndex> HalfEdge<I> {
    /// Create a new uninitialized half-edge.
    pub fn new() -> Self {
        Self {
            target: VertexId::invalid(),
            next: HalfEdgeId::invalid(),
            prev: HalfEdgeId::invalid(),
            face: FaceId::invalid(),
        }
    }

    /// Create a half-edge pointing at the given vertex, not yet linked into
    /// any cycle.
    pub fn pointing_at(target: VertexId<I>) -> Self {
        Self {
            target,
            ..Self::new()
        }
    }

    /// Check if this half-edge is on the boundary.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        !self.face.is_valid()
    }
}

impl<I: MeshIndex> Default for HalfEdge<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// A face in the half-edge mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face<I: MeshIndex = u32> {
    /// One half-edge of the inner cycle of this face.
    /// Invalid for deleted faces.
    pub halfedge: HalfEdgeId<I>,
}

impl<I: MeshIndex> Face<I> {
    /// Create a new face with the given inner half-edge.
    pub fn new(halfedge: HalfEdgeId<I>) -> Self {
        Self { halfedge }
    }
}

impl<I: MeshIndex> Default for Face<I> {
    fn default() -> Self {
        Self {
            halfedge: HalfEdgeId::invalid(),
        }
    }
}

/// Topology policy of a mesh, chosen at construction.
///
/// The policy selects between two variants of the face insertion checks and
/// of the face deletion repair:
///
/// - [`MeshPolicy::Manifold`] keeps every vertex star a single fan. Face
///   insertions that would pinch a vertex are rejected, and face deletions
///   cascade onto neighboring faces when removing a single face would split
///   a star.
/// - [`MeshPolicy::NonManifold`] admits multi-fan vertices. Face insertions
///   splice fans as needed, and face deletions never cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeshPolicy {
    /// Keep the mesh a 2-manifold (with boundary) at all times.
    #[default]
    Manifold,
    /// Allow vertices whose star consists of several fans.
    NonManifold,
}

/// A half-edge mesh data structure for polygon meshes.
///
/// The mesh stores pure topology: three element sequences (vertices,
/// half-edges, faces) whose records only hold index links. Per-element
/// payloads are optional and chosen by the type parameters; `()` means "no
/// payload" and costs nothing at runtime.
///
/// # Type parameters
///
/// * `VD`, `HD`, `ED`, `FD` - payload types stored per vertex, half-edge,
///   edge and face. Payload sequences always have the same length as the
///   corresponding element sequence.
/// * `I` - the underlying index type (`u16`, `u32` or `u64`).
///
/// # Index stability
///
/// Element IDs are stable across additions and deletions (deleted elements
/// are only marked), but every ID is invalidated by
/// [`collect_garbage`](Self::collect_garbage).
#[derive(Debug, Clone, PartialEq)]
pub struct HalfEdgeMesh<VD = (), HD = (), ED = (), FD = (), I: MeshIndex = u32> {
    /// Topology policy selected at construction.
    policy: MeshPolicy,

    /// All vertices in the mesh.
    pub(crate) vertices: Vec<Vertex<I>>,

    /// All half-edges in the mesh. The length is always even; the half-edges
    /// `2e` and `2e + 1` are opposites.
    pub(crate) halfedges: Vec<HalfEdge<I>>,

    /// All faces in the mesh.
    pub(crate) faces: Vec<Face<I>>,

    /// Payload per vertex.
    pub(crate) vertex_data: Vec<VD>,

    /// Payload per half-edge.
    pub(crate) halfedge_data: Vec<HD>,

    /// Payload per edge (one entry per half-edge pair).
    pub(crate) edge_data: Vec<ED>,

    /// Payload per face.
    pub(crate) face_data: Vec<FD>,
}

impl<VD, HD, ED, FD, I: MeshIndex> Default for HalfEdgeMesh<VD, HD, ED, FD, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> HalfEdgeMesh<VD, HD, ED, FD, I> {
    /// Create a new empty manifold mesh.
    pub fn new() -> Self {
        Self::with_policy(MeshPolicy::Manifold)
    }

    /// Create a new empty mesh with the given topology policy.
    pub fn with_policy(policy: MeshPolicy) -> Self {
        Self {
            policy,
            vertices: Vec::new(),
            halfedges: Vec::new(),
            faces: Vec::new(),
            vertex_data: Vec::new(),
            halfedge_data: Vec::new(),
            edge_data: Vec::new(),
            face_data: Vec::new(),
        }
    }

    /// Get the topology policy of this mesh.
    #[inline]
    pub fn policy(&self) -> MeshPolicy {
        self.policy
    }

    #[inline]
    pub(crate) fn is_manifold_policy(&self) -> bool {
        self.policy == MeshPolicy::Manifold
    }

    // ==================== Sizes ====================

    /// Get the number of vertices (including deleted ones).
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of half-edges (including deleted ones).
    #[inline]
    pub fn num_halfedges(&self) -> usize {
        debug_assert!(self.halfedges.len() % 2 == 0);
        self.halfedges.len()
    }

    /// Get the number of edges (including deleted ones).
    #[inline]
    pub fn num_edges(&self) -> usize {
        debug_assert!(self.halfedges.len() % 2 == 0);
        self.halfedges.len() / 2
    }

    /// Get the number of faces (including deleted ones).
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no elements at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.halfedges.is_empty() && self.faces.is_empty()
    }

    /// Check if the mesh has vertices.
    #[inline]
    pub fn has_vertices(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// Check if the mesh has edges.
    #[inline]
    pub fn has_edges(&self) -> bool {
        !self.halfedges.is_empty()
    }

    /// Check if the mesh has faces.
    #[inline]
    pub fn has_faces(&self) -> bool {
        !self.faces.is_empty()
    }

    // ==================== Element accessors ====================

    /// Get a vertex record by ID.
    #[inline]
    pub fn vertex(&self, id: VertexId<I>) -> &Vertex<I> {
        &self.vertices[id.index()]
    }

    /// Get a half-edge record by ID.
    #[inline]
    pub fn halfedge(&self, id: HalfEdgeId<I>) -> &HalfEdge<I> {
        &self.halfedges[id.index()]
    }

    /// Get a face record by ID.
    #[inline]
    pub fn face(&self, id: FaceId<I>) -> &Face<I> {
        &self.faces[id.index()]
    }

    #[inline]
    pub(crate) fn vertex_mut(&mut self, id: VertexId<I>) -> &mut Vertex<I> {
        &mut self.vertices[id.index()]
    }

    #[inline]
    pub(crate) fn halfedge_mut(&mut self, id: HalfEdgeId<I>) -> &mut HalfEdge<I> {
        &mut self.halfedges[id.index()]
    }

    #[inline]
    pub(crate) fn face_mut(&mut self, id: FaceId<I>) -> &mut Face<I> {
        &mut self.faces[id.index()]
    }

    // ==================== Topology queries ====================

    /// Get the outgoing half-edge of a vertex.
    ///
    /// Invalid for isolated and for deleted vertices.
    #[inline]
    pub fn outgoing_halfedge(&self, v: VertexId<I>) -> HalfEdgeId<I> {
        self.vertex(v).halfedge
    }

    /// Get the incoming half-edge of a vertex (the opposite of its outgoing
    /// half-edge).
    #[inline]
    pub fn incoming_halfedge(&self, v: VertexId<I>) -> HalfEdgeId<I> {
        self.outgoing_halfedge(v).opposite()
    }

    /// Get the opposite half-edge.
    #[inline]
    pub fn opposite(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        debug_assert!(self.is_valid_halfedge(he));
        he.opposite()
    }

    /// Get the next half-edge around the face (or hole).
    #[inline]
    pub fn next(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.halfedge(he).next
    }

    /// Get the previous half-edge around the face (or hole).
    #[inline]
    pub fn prev(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.halfedge(he).prev
    }

    /// Get the vertex a half-edge points to.
    #[inline]
    pub fn dest(&self, he: HalfEdgeId<I>) -> VertexId<I> {
        self.halfedge(he).target
    }

    /// Get the vertex a half-edge originates from.
    #[inline]
    pub fn origin(&self, he: HalfEdgeId<I>) -> VertexId<I> {
        self.dest(he.opposite())
    }

    /// Get the face of a half-edge. Invalid for boundary half-edges.
    #[inline]
    pub fn face_of(&self, he: HalfEdgeId<I>) -> FaceId<I> {
        self.halfedge(he).face
    }

    /// Get the face on the other side of a half-edge's edge.
    #[inline]
    pub fn opposite_face(&self, he: HalfEdgeId<I>) -> FaceId<I> {
        self.face_of(he.opposite())
    }

    /// Get the inner half-edge of a face. Invalid for deleted faces.
    #[inline]
    pub fn inner_halfedge(&self, f: FaceId<I>) -> HalfEdgeId<I> {
        self.face(f).halfedge
    }

    /// Get the outer half-edge of a face (the opposite of its inner
    /// half-edge).
    #[inline]
    pub fn outer_halfedge(&self, f: FaceId<I>) -> HalfEdgeId<I> {
        self.inner_halfedge(f).opposite()
    }

    // ==================== Internal setters ====================

    #[inline]
    pub(crate) fn set_outgoing_halfedge(&mut self, v: VertexId<I>, he: HalfEdgeId<I>) {
        self.vertex_mut(v).halfedge = he;
    }

    #[inline]
    pub(crate) fn set_face(&mut self, he: HalfEdgeId<I>, f: FaceId<I>) {
        self.halfedge_mut(he).face = f;
    }

    /// Link two half-edges so that `b` follows `a`.
    #[inline]
    pub(crate) fn connect_prev_next(&mut self, a: HalfEdgeId<I>, b: HalfEdgeId<I>) {
        self.halfedge_mut(a).next = b;
        self.halfedge_mut(b).prev = a;
    }

    // ==================== Validity ====================

    /// Check if a vertex ID is in bounds.
    #[inline]
    pub fn is_valid_vertex(&self, v: VertexId<I>) -> bool {
        v.is_valid() && v.index() < self.vertices.len()
    }

    /// Check if a half-edge ID is in bounds.
    #[inline]
    pub fn is_valid_halfedge(&self, he: HalfEdgeId<I>) -> bool {
        he.is_valid() && he.index() < self.halfedges.len()
    }

    /// Check if an edge ID is in bounds.
    #[inline]
    pub fn is_valid_edge(&self, e: EdgeId<I>) -> bool {
        e.is_valid() && e.index() < self.halfedges.len() / 2
    }

    /// Check if a face ID is in bounds.
    #[inline]
    pub fn is_valid_face(&self, f: FaceId<I>) -> bool {
        f.is_valid() && f.index() < self.faces.len()
    }

    // ==================== Deletion markers ====================

    /// Check if a vertex is marked as deleted.
    ///
    /// An isolated vertex has the same representation as a deleted one; the
    /// two are told apart by allocation history only (see
    /// [`is_isolated`](Self::is_isolated)).
    #[inline]
    pub fn is_deleted_vertex(&self, v: VertexId<I>) -> bool {
        !self.outgoing_halfedge(v).is_valid()
    }

    /// Check if a half-edge is marked as deleted.
    #[inline]
    pub fn is_deleted_halfedge(&self, he: HalfEdgeId<I>) -> bool {
        !self.dest(he).is_valid()
    }

    /// Check if an edge (either of its half-edges) is marked as deleted.
    #[inline]
    pub fn is_deleted_edge(&self, e: EdgeId<I>) -> bool {
        self.is_deleted_halfedge(e.halfedge(0)) || self.is_deleted_halfedge(e.halfedge(1))
    }

    /// Check if a face is marked as deleted.
    #[inline]
    pub fn is_deleted_face(&self, f: FaceId<I>) -> bool {
        !self.inner_halfedge(f).is_valid()
    }

    /// Check if a vertex is isolated (not connected to any half-edge).
    ///
    /// This observes the same sentinel as
    /// [`is_deleted_vertex`](Self::is_deleted_vertex): a vertex that has
    /// never been connected reports isolated from birth and stays
    /// addressable until [`collect_garbage`](Self::collect_garbage).
    #[inline]
    pub fn is_isolated(&self, v: VertexId<I>) -> bool {
        !self.outgoing_halfedge(v).is_valid()
    }

    // ==================== Boundary predicates ====================

    /// Check if a half-edge is on the boundary (has no incident face).
    #[inline]
    pub fn is_boundary_halfedge(&self, he: HalfEdgeId<I>) -> bool {
        !self.face_of(he).is_valid()
    }

    /// Check if a vertex is on the boundary.
    ///
    /// This inspects the outgoing half-edge only, which suffices because a
    /// boundary vertex always stores a boundary half-edge as its outgoing
    /// half-edge. Isolated vertices report `true`.
    #[inline]
    pub fn is_boundary_vertex(&self, v: VertexId<I>) -> bool {
        let he = self.outgoing_halfedge(v);
        if !he.is_valid() {
            return true; // Isolated vertex
        }
        self.is_boundary_halfedge(he)
    }

    /// Check if an edge is on the boundary (at least one of its half-edges
    /// has no incident face).
    #[inline]
    pub fn is_boundary_edge(&self, e: EdgeId<I>) -> bool {
        self.is_boundary_halfedge(e.halfedge(0)) || self.is_boundary_halfedge(e.halfedge(1))
    }

    /// Check if a face touches the boundary through any of its vertices.
    ///
    /// This is the stronger of the two face boundary checks: a face whose
    /// edges are all interior still reports `true` when one of its vertices
    /// lies on the boundary. See
    /// [`is_boundary_face_edges`](Self::is_boundary_face_edges) for the
    /// edge-only variant.
    pub fn is_boundary_face(&self, f: FaceId<I>) -> bool {
        let start = self.inner_halfedge(f);
        let mut he = start;
        loop {
            if self.is_boundary_vertex(self.dest(he)) {
                return true;
            }
            he = self.next(he);
            if he == start {
                return false;
            }
        }
    }

    /// Check if a face has an edge on the boundary (any of its outer
    /// half-edges has no incident face).
    pub fn is_boundary_face_edges(&self, f: FaceId<I>) -> bool {
        let start = self.inner_halfedge(f);
        let mut he = start;
        loop {
            if self.is_boundary_halfedge(he.opposite()) {
                return true;
            }
            he = self.next(he);
            if he == start {
                return false;
            }
        }
    }

    // ==================== Manifold predicates ====================

    /// Check if a vertex is manifold (its star is a single fan).
    ///
    /// Trivially `true` in a [`MeshPolicy::Manifold`] mesh. In a
    /// non-manifold mesh a vertex is manifold iff at most one outgoing
    /// half-edge in its star is a boundary half-edge.
    pub fn is_manifold_vertex(&self, v: VertexId<I>) -> bool {
        if self.is_manifold_policy() {
            return true;
        }

        // The outgoing half-edge is kept on the boundary whenever the star
        // has a boundary half-edge, so a non-boundary outgoing half-edge
        // means a closed (single) fan.
        let start = self.outgoing_halfedge(v);
        if !start.is_valid() || !self.is_boundary_halfedge(start) {
            return true;
        }
        let mut he = self.next(start.opposite());
        while he != start {
            if self.is_boundary_halfedge(he) {
                return false;
            }
            he = self.next(he.opposite());
        }
        true
    }

    /// Check if every vertex in the mesh is manifold.
    ///
    /// Trivially `true` in a [`MeshPolicy::Manifold`] mesh.
    pub fn is_manifold(&self) -> bool {
        if self.is_manifold_policy() {
            return true;
        }
        (0..self.vertices.len()).all(|i| self.is_manifold_vertex(VertexId::new(i)))
    }

    // ==================== Validation ====================

    /// Check that all connectivity is consistent.
    ///
    /// Verifies the structural invariants of the half-edge representation:
    /// pairwise half-edge allocation, payload lengths, `next`/`prev`
    /// inverses, face cycles of length at least three, outgoing half-edge
    /// origination, and (for [`MeshPolicy::Manifold`] meshes) the
    /// single-boundary-fan property of every vertex star. Deleted elements
    /// are skipped.
    ///
    /// Intended for tests and debugging; runs in time linear in the mesh
    /// size times the maximum face degree and vertex valence.
    pub fn validate(&self) -> Result<()> {
        if self.halfedges.len() % 2 != 0 {
            return Err(MeshError::InvalidState("odd number of half-edges".into()));
        }
        if self.vertex_data.len() != self.vertices.len()
            || self.halfedge_data.len() != self.halfedges.len()
            || self.edge_data.len() != self.halfedges.len() / 2
            || self.face_data.len() != self.faces.len()
        {
            return Err(MeshError::InvalidState(
                "payload length out of sync with elements".into(),
            ));
        }

        for he in self.halfedge_ids() {
            if self.is_deleted_halfedge(he) {
                continue;
            }
            let record = self.halfedge(he);
            if !self.is_valid_vertex(record.target) {
                return Err(MeshError::InvalidState(format!(
                    "{:?} points at out-of-bounds vertex",
                    he
                )));
            }
            if !self.is_valid_halfedge(record.next) || !self.is_valid_halfedge(record.prev) {
                return Err(MeshError::InvalidState(format!(
                    "{:?} has an unlinked cycle pointer",
                    he
                )));
            }
            if self.prev(record.next) != he || self.next(record.prev) != he {
                return Err(MeshError::InvalidState(format!(
                    "next/prev of {:?} are not inverse",
                    he
                )));
            }
            if self.dest(record.prev) != self.origin(he) {
                return Err(MeshError::InvalidState(format!(
                    "cycle through {:?} is not vertex-continuous",
                    he
                )));
            }
            if record.face.is_valid() && !self.is_valid_face(record.face) {
                return Err(MeshError::InvalidState(format!(
                    "{:?} references an out-of-bounds face",
                    he
                )));
            }
        }

        for f in self.face_ids() {
            if self.is_deleted_face(f) {
                continue;
            }
            let start = self.inner_halfedge(f);
            let mut he = start;
            let mut len = 0usize;
            loop {
                if self.face_of(he) != f {
                    return Err(MeshError::InvalidState(format!(
                        "inner cycle of {:?} leaves the face",
                        f
                    )));
                }
                len += 1;
                if len > self.halfedges.len() {
                    return Err(MeshError::InvalidState(format!(
                        "inner cycle of {:?} does not close",
                        f
                    )));
                }
                he = self.next(he);
                if he == start {
                    break;
                }
            }
            if len < 3 {
                return Err(MeshError::InvalidState(format!(
                    "{:?} has a cycle of length {}",
                    f, len
                )));
            }
        }

        for v in self.vertex_ids() {
            if self.is_deleted_vertex(v) {
                continue;
            }
            let start = self.outgoing_halfedge(v);
            if !self.is_valid_halfedge(start) {
                return Err(MeshError::InvalidState(format!(
                    "{:?} stores an out-of-bounds half-edge",
                    v
                )));
            }
            if self.origin(start) != v {
                return Err(MeshError::InvalidState(format!(
                    "outgoing half-edge of {:?} does not originate there",
                    v
                )));
            }
            if self.is_manifold_policy() {
                // At most one boundary half-edge per star, and if there is
                // one it must be the stored outgoing half-edge.
                let mut boundary = 0usize;
                let mut he = start;
                let mut steps = 0usize;
                loop {
                    if self.is_boundary_halfedge(he) {
                        boundary += 1;
                        if he != start {
                            return Err(MeshError::InvalidState(format!(
                                "boundary half-edge of {:?} is not its anchor",
                                v
                            )));
                        }
                    }
                    steps += 1;
                    if steps > self.halfedges.len() {
                        return Err(MeshError::InvalidState(format!(
                            "star of {:?} does not close",
                            v
                        )));
                    }
                    he = self.next(he.opposite());
                    if he == start {
                        break;
                    }
                }
                if boundary > 1 {
                    return Err(MeshError::InvalidState(format!(
                        "{:?} has {} boundary half-edges in its star",
                        v, boundary
                    )));
                }
            }
        }

        Ok(())
    }

    // ==================== Iteration ====================

    /// Iterate over all vertex IDs (including deleted ones).
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId<I>> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Iterate over all half-edge IDs (including deleted ones).
    pub fn halfedge_ids(&self) -> impl Iterator<Item = HalfEdgeId<I>> + '_ {
        (0..self.halfedges.len()).map(HalfEdgeId::new)
    }

    /// Iterate over all edge IDs (including deleted ones).
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId<I>> + '_ {
        (0..self.halfedges.len() / 2).map(EdgeId::new)
    }

    /// Iterate over all face IDs (including deleted ones).
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId<I>> + '_ {
        (0..self.faces.len()).map(FaceId::new)
    }

    // ==================== Construction ====================

    /// Add a new isolated vertex with a default payload and return its ID.
    pub fn add_vertex(&mut self) -> VertexId<I>
    where
        VD: Default,
    {
        self.add_vertex_with(VD::default())
    }

    /// Add a new isolated vertex carrying the given payload.
    pub fn add_vertex_with(&mut self, data: VD) -> VertexId<I> {
        self.vertices.push(Vertex::new());
        self.vertex_data.push(data);
        VertexId::new(self.vertices.len() - 1)
    }

    // ==================== Capacity ====================

    /// Reserve storage for `n` additional vertices.
    pub fn reserve_vertices(&mut self, n: usize) {
        self.vertices.reserve(n);
        self.vertex_data.reserve(n);
    }

    /// Reserve storage for `n` additional edges (`2 * n` half-edges).
    pub fn reserve_edges(&mut self, n: usize) {
        self.halfedges.reserve(2 * n);
        self.halfedge_data.reserve(2 * n);
        self.edge_data.reserve(n);
    }

    /// Reserve storage for `n` additional faces.
    pub fn reserve_faces(&mut self, n: usize) {
        self.faces.reserve(n);
        self.face_data.reserve(n);
    }

    /// Resize the vertex sequence to `n` elements, filling new slots with
    /// isolated vertices carrying the given payload.
    pub fn resize_vertices(&mut self, n: usize, data: VD)
    where
        VD: Clone,
    {
        self.vertices.resize(n, Vertex::new());
        self.vertex_data.resize(n, data);
    }

    /// Resize the edge sequence to `n` elements (`2 * n` half-edges),
    /// filling new slots with unlinked half-edges and the given payloads.
    pub fn resize_edges(&mut self, n: usize, edge_data: ED, halfedge_data: HD)
    where
        ED: Clone,
        HD: Clone,
    {
        self.halfedges.resize(2 * n, HalfEdge::new());
        self.halfedge_data.resize(2 * n, halfedge_data);
        self.edge_data.resize(n, edge_data);
    }

    /// Resize the face sequence to `n` elements, filling new slots with
    /// deleted faces carrying the given payload.
    pub fn resize_faces(&mut self, n: usize, data: FD)
    where
        FD: Clone,
    {
        self.faces.resize(n, Face::default());
        self.face_data.resize(n, data);
    }

    /// Remove all elements and payloads. The policy is kept.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.halfedges.clear();
        self.faces.clear();
        self.vertex_data.clear();
        self.halfedge_data.clear();
        self.edge_data.clear();
        self.face_data.clear();
    }

    // ==================== Payload access ====================

    /// Get the vertex payload sequence.
    #[inline]
    pub fn vertex_data(&self) -> &[VD] {
        &self.vertex_data
    }

    /// Get mutable access to the vertex payload sequence.
    ///
    /// The slice has a fixed length, so entries can be changed but never
    /// added or removed.
    #[inline]
    pub fn vertex_data_mut(&mut self) -> &mut [VD] {
        &mut self.vertex_data
    }

    /// Replace the vertex payload sequence.
    ///
    /// Succeeds only if `data` has the same length as the current vertex
    /// sequence; otherwise the mesh is left unchanged and `false` is
    /// returned. Never changes topology.
    pub fn set_vertex_data(&mut self, data: Vec<VD>) -> bool {
        if data.len() == self.vertex_data.len() {
            self.vertex_data = data;
            true
        } else {
            false
        }
    }

    /// Recover the vertex ID of a payload entry by address.
    ///
    /// Returns an invalid ID if the reference does not point into this
    /// mesh's vertex payload sequence (always the case for zero-sized
    /// payload types).
    pub fn vertex_data_index(&self, data: &VD) -> VertexId<I> {
        match slot_of(&self.vertex_data, data) {
            Some(i) => VertexId::new(i),
            None => VertexId::invalid(),
        }
    }

    /// Get the half-edge payload sequence.
    #[inline]
    pub fn halfedge_data(&self) -> &[HD] {
        &self.halfedge_data
    }

    /// Get mutable access to the half-edge payload sequence.
    #[inline]
    pub fn halfedge_data_mut(&mut self) -> &mut [HD] {
        &mut self.halfedge_data
    }

    /// Replace the half-edge payload sequence. See
    /// [`set_vertex_data`](Self::set_vertex_data) for the length contract.
    pub fn set_halfedge_data(&mut self, data: Vec<HD>) -> bool {
        if data.len() == self.halfedge_data.len() {
            self.halfedge_data = data;
            true
        } else {
            false
        }
    }

    /// Recover the half-edge ID of a payload entry by address.
    pub fn halfedge_data_index(&self, data: &HD) -> HalfEdgeId<I> {
        match slot_of(&self.halfedge_data, data) {
            Some(i) => HalfEdgeId::new(i),
            None => HalfEdgeId::invalid(),
        }
    }

    /// Get the edge payload sequence (one entry per half-edge pair).
    #[inline]
    pub fn edge_data(&self) -> &[ED] {
        &self.edge_data
    }

    /// Get mutable access to the edge payload sequence.
    #[inline]
    pub fn edge_data_mut(&mut self) -> &mut [ED] {
        &mut self.edge_data
    }

    /// Replace the edge payload sequence. See
    /// [`set_vertex_data`](Self::set_vertex_data) for the length contract.
    pub fn set_edge_data(&mut self, data: Vec<ED>) -> bool {
        if data.len() == self.edge_data.len() {
            self.edge_data = data;
            true
        } else {
            false
        }
    }

    /// Recover the edge ID of a payload entry by address.
    pub fn edge_data_index(&self, data: &ED) -> EdgeId<I> {
        match slot_of(&self.edge_data, data) {
            Some(i) => EdgeId::new(i),
            None => EdgeId::invalid(),
        }
    }

    /// Get the face payload sequence.
    #[inline]
    pub fn face_data(&self) -> &[FD] {
        &self.face_data
    }

    /// Get mutable access to the face payload sequence.
    #[inline]
    pub fn face_data_mut(&mut self) -> &mut [FD] {
        &mut self.face_data
    }

    /// Replace the face payload sequence. See
    /// [`set_vertex_data`](Self::set_vertex_data) for the length contract.
    pub fn set_face_data(&mut self, data: Vec<FD>) -> bool {
        if data.len() == self.face_data.len() {
            self.face_data = data;
            true
        } else {
            false
        }
    }

    /// Recover the face ID of a payload entry by address.
    pub fn face_data_index(&self, data: &FD) -> FaceId<I> {
        match slot_of(&self.face_data, data) {
            Some(i) => FaceId::new(i),
            None => FaceId::invalid(),
        }
    }
}

/// Recover the slot index of `entry` inside `data` by address identity.
///
/// Returns `None` when the reference lies outside the sequence or the
/// payload type is zero-sized (every reference aliases then).
fn slot_of<T>(data: &[T], entry: &T) -> Option<usize> {
    let size = std::mem::size_of::<T>();
    if size == 0 {
        return None;
    }
    let base = data.as_ptr() as usize;
    let addr = entry as *const T as usize;
    if addr < base || (addr - base) % size != 0 {
        return None;
    }
    let index = (addr - base) / size;
    if index < data.len() {
        Some(index)
    } else {
        None
    }
}
