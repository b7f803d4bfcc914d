//! Deletion by tombstoning.
//!
//! Deleting never moves or frees storage: an element is marked by writing
//! the sentinel into its distinguished field and stays addressable until
//! [`HalfEdgeMesh::collect_garbage`](super::halfedge::HalfEdgeMesh::collect_garbage)
//! compacts the mesh. All deletions are idempotent.
//!
//! [`delete_face`](super::halfedge::HalfEdgeMesh::delete_face) is the heart
//! of this module: it walks the corners of the doomed face and repairs the
//! surrounding connectivity (`reconnect`), removing edges that end up
//! without a face on either side and vertices that end up without edges. In
//! a manifold mesh, deleting a face can pinch a vertex star in two; the
//! repair then cascades onto neighboring faces until every star is a single
//! fan again.

use super::halfedge::HalfEdgeMesh;
use super::index::{EdgeId, FaceId, HalfEdgeId, MeshIndex, VertexId};

impl<VD, HD, ED, FD, I: MeshIndex> HalfEdgeMesh<VD, HD, ED, FD, I> {
    // ==================== Tombstones ====================

    #[inline]
    pub(crate) fn mark_deleted_vertex(&mut self, v: VertexId<I>) {
        self.vertex_mut(v).halfedge = HalfEdgeId::invalid();
    }

    #[inline]
    pub(crate) fn mark_deleted_halfedge(&mut self, he: HalfEdgeId<I>) {
        self.halfedge_mut(he).target = VertexId::invalid();
    }

    #[inline]
    pub(crate) fn mark_deleted_face(&mut self, f: FaceId<I>) {
        self.face_mut(f).halfedge = HalfEdgeId::invalid();
    }

    // ==================== delete_vertex ====================

    /// Mark the given vertex and all connected edges and faces as deleted.
    ///
    /// Every face around the vertex is deleted (which also tombstones the
    /// incident edges), and the vertex itself becomes isolated and thereby
    /// deleted. Already-deleted and isolated vertices are left as they are.
    ///
    /// Call [`collect_garbage`](Self::collect_garbage) to physically remove
    /// the marked elements.
    pub fn delete_vertex(&mut self, v: VertexId<I>) {
        debug_assert!(self.is_valid_vertex(v));
        if self.is_deleted_vertex(v) {
            return;
        }

        // Snapshot the incident faces first; the circulator cannot be held
        // across the mutation below. Boundary gaps yield invalid IDs.
        let faces: Vec<FaceId<I>> = self.vertex_faces(v).filter(|f| f.is_valid()).collect();
        for f in faces {
            self.delete_face(f);
        }
    }

    // ==================== delete_edge ====================

    /// Mark the given half-edge, its opposite and the incident faces as
    /// deleted.
    ///
    /// A boundary half-edge is tombstoned directly; a half-edge with a face
    /// deletes that face (which tombstones the half-edge along the way).
    pub fn delete_halfedge(&mut self, he: HalfEdgeId<I>) {
        debug_assert!(self.is_valid_halfedge(he));
        if self.is_deleted_halfedge(he) {
            return;
        }

        let opposite = he.opposite();

        if self.is_boundary_halfedge(he) {
            self.mark_deleted_halfedge(he);
        } else {
            let f = self.face_of(he);
            self.delete_face(f);
        }
        if self.is_boundary_halfedge(opposite) {
            self.mark_deleted_halfedge(opposite);
        } else {
            let f = self.face_of(opposite);
            self.delete_face(f);
        }
    }

    /// Mark the given edge (both half-edges) and the incident faces as
    /// deleted.
    pub fn delete_edge(&mut self, e: EdgeId<I>) {
        debug_assert!(self.is_valid_edge(e));
        if self.is_deleted_edge(e) {
            return;
        }
        self.delete_halfedge(e.halfedge(0));
    }

    // ==================== delete_face ====================

    /// Mark the given face as deleted.
    ///
    /// In a [`Manifold`](super::halfedge::MeshPolicy::Manifold) mesh, more
    /// faces are deleted if removing this one would pinch a vertex star in
    /// two; the cascade continues until the mesh is manifold again.
    pub fn delete_face(&mut self, f: FaceId<I>) {
        debug_assert!(self.is_valid_face(f));
        if self.is_deleted_face(f) {
            return;
        }

        // The worklist only ever grows in the manifold policy.
        let mut cascade: Vec<FaceId<I>> = vec![f];
        while let Some(next) = cascade.pop() {
            self.delete_face_one(next, &mut cascade);
        }
    }

    /// Delete a single face, pushing any cascade victims onto `cascade`.
    fn delete_face_one(&mut self, f: FaceId<I>, cascade: &mut Vec<FaceId<I>>) {
        if self.is_deleted_face(f) {
            return;
        }

        // Snapshot the inner cycle and the boundary state of the opposite
        // half-edges before any rewiring.
        let mut inner: Vec<HalfEdgeId<I>> = Vec::new();
        let mut opposite_is_boundary: Vec<bool> = Vec::new();
        let start = self.inner_halfedge(f);
        let mut he = start;
        loop {
            inner.push(he);
            opposite_is_boundary.push(self.is_boundary_halfedge(he.opposite()));
            he = self.next(he);
            if he == start {
                break;
            }
        }
        let n = inner.len();
        debug_assert!(n >= 3);

        for i in 0..n {
            let j = (i + 1) % n;
            self.reconnect(
                inner[i],
                inner[j],
                opposite_is_boundary[i],
                opposite_is_boundary[j],
                cascade,
            );
        }

        // Clear the face fields only after every corner is repaired: the
        // cascade test above reads them, and a half-cleared cycle would
        // make an interior vertex look pinched.
        for &he in &inner {
            self.set_face(he, FaceId::invalid());
        }
        self.mark_deleted_face(f);
    }

    /// Disconnect the corner between the inner half-edges `a -> b` and
    /// `b -> c` of a face being deleted, repairing the cycles around their
    /// shared vertex `b`.
    ///
    /// `boundary_ba` / `boundary_cb` are the snapshotted boundary states of
    /// the opposite half-edges. Edges whose other side is already boundary
    /// lose their last face here and are tombstoned.
    fn reconnect(
        &mut self,
        he_ab: HalfEdgeId<I>,
        he_bc: HalfEdgeId<I>,
        boundary_ba: bool,
        boundary_cb: bool,
        cascade: &mut Vec<FaceId<I>>,
    ) {
        let he_ba = he_ab.opposite();
        let he_cb = he_bc.opposite();
        let b = self.dest(he_ab);

        match (boundary_ba, boundary_cb) {
            (true, true) => {
                let he_cb_next = self.next(he_cb);
                if he_cb_next == he_ba {
                    // Both edges at this corner die and nothing else holds
                    // on to `b`.
                    self.mark_deleted_vertex(b);
                } else {
                    let he_ba_prev = self.prev(he_ba);
                    self.connect_prev_next(he_ba_prev, he_cb_next);
                    self.set_outgoing_halfedge(b, he_cb_next);
                }
                self.mark_deleted_halfedge(he_ab);
                self.mark_deleted_halfedge(he_ba);
            }
            (true, false) => {
                let he_ba_prev = self.prev(he_ba);
                self.connect_prev_next(he_ba_prev, he_bc);
                self.set_outgoing_halfedge(b, he_bc);

                self.mark_deleted_halfedge(he_ab);
                self.mark_deleted_halfedge(he_ba);
            }
            (false, true) => {
                let he_cb_next = self.next(he_cb);
                self.connect_prev_next(he_ab, he_cb_next);
                self.set_outgoing_halfedge(b, he_cb_next);
            }
            (false, false) => {
                if self.is_manifold_policy() {
                    if self.is_boundary_vertex(b) {
                        // Removing this face would split the star of `b`
                        // into two fans. Delete the neighboring faces on
                        // one side until the boundary is reached.
                        let mut he = he_cb;
                        while !self.is_boundary_halfedge(he) {
                            cascade.push(self.face_of(he));
                            he = self.next(he).opposite();
                        }
                    } else {
                        self.set_outgoing_halfedge(b, he_bc);
                    }
                } else if !self.is_boundary_vertex(b) {
                    self.set_outgoing_halfedge(b, he_bc);
                }
            }
        }
    }
}
