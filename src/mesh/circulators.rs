//! Circulators over topological neighborhoods.
//!
//! A circulator is a lazy cyclic cursor around a pivot element (a vertex or
//! a face). Every circulator stores the half-edge it currently stands on and
//! derives its target from it; iterating yields one full round-trip starting
//! at the canonical representative (the pivot's stored half-edge).
//!
//! Besides the [`Iterator`] interface (which walks counter-clockwise), each
//! circulator can be rotated manually in both directions with `rotate_ccw` /
//! `rotate_cw`, and two circulators compare equal when they stand on the
//! same half-edge. Manual rotation and iteration should not be mixed.
//!
//! Circulators borrow the mesh immutably and are invalidated by any
//! mutation (the borrow checker enforces this).
//!
//! # Rotation
//!
//! Around a vertex, counter-clockwise rotation of an outgoing half-edge `h`
//! is `next(opposite(h))` and clockwise rotation is `opposite(prev(h))`; for
//! incoming half-edges the formulas transpose to `opposite(next(h))` and
//! `prev(opposite(h))`. Around a face, rotation follows `next` / `prev`
//! along the inner cycle.

use super::halfedge::HalfEdgeMesh;
use super::index::{FaceId, HalfEdgeId, MeshIndex, VertexId};

// ==================== Circulators around a vertex ====================

/// Circulates over the vertices adjacent to a vertex.
///
/// The current half-edge is an outgoing half-edge of the pivot; the target
/// is the vertex it points to.
pub struct VertexVertexIter<'a, VD, HD, ED, FD, I: MeshIndex> {
    mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    done: bool,
}

impl<'a, VD, HD, ED, FD, I: MeshIndex> VertexVertexIter<'a, VD, HD, ED, FD, I> {
    /// Create a circulator around the given vertex.
    pub fn new(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, v: VertexId<I>) -> Self {
        Self::from_halfedge(mesh, mesh.outgoing_halfedge(v))
    }

    /// Create a circulator starting at the given outgoing half-edge.
    pub fn from_halfedge(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, he: HalfEdgeId<I>) -> Self {
        Self {
            mesh,
            start: he,
            current: he,
            done: !he.is_valid(),
        }
    }

    /// Get the half-edge the circulator currently stands on.
    #[inline]
    pub fn current_halfedge(&self) -> HalfEdgeId<I> {
        self.current
    }

    /// Rotate counter-clockwise around the pivot vertex.
    #[inline]
    pub fn rotate_ccw(&mut self) {
        self.current = self.mesh.next(self.current.opposite());
    }

    /// Rotate clockwise around the pivot vertex.
    #[inline]
    pub fn rotate_cw(&mut self) {
        self.current = self.mesh.prev(self.current).opposite();
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> PartialEq for VertexVertexIter<'_, VD, HD, ED, FD, I> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> Iterator for VertexVertexIter<'_, VD, HD, ED, FD, I> {
    type Item = VertexId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let out = self.mesh.dest(self.current);
        self.rotate_ccw();
        if self.current == self.start {
            self.done = true;
        }
        Some(out)
    }
}

/// Circulates over the outgoing half-edges of a vertex.
pub struct VertexHalfEdgeIter<'a, VD, HD, ED, FD, I: MeshIndex> {
    mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    done: bool,
}

impl<'a, VD, HD, ED, FD, I: MeshIndex> VertexHalfEdgeIter<'a, VD, HD, ED, FD, I> {
    /// Create a circulator around the given vertex.
    pub fn new(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, v: VertexId<I>) -> Self {
        Self::from_halfedge(mesh, mesh.outgoing_halfedge(v))
    }

    /// Create a circulator starting at the given outgoing half-edge.
    pub fn from_halfedge(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, he: HalfEdgeId<I>) -> Self {
        Self {
            mesh,
            start: he,
            current: he,
            done: !he.is_valid(),
        }
    }

    /// Get the half-edge the circulator currently stands on.
    #[inline]
    pub fn current_halfedge(&self) -> HalfEdgeId<I> {
        self.current
    }

    /// Rotate counter-clockwise around the pivot vertex.
    #[inline]
    pub fn rotate_ccw(&mut self) {
        self.current = self.mesh.next(self.current.opposite());
    }

    /// Rotate clockwise around the pivot vertex.
    #[inline]
    pub fn rotate_cw(&mut self) {
        self.current = self.mesh.prev(self.current).opposite();
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> PartialEq for VertexHalfEdgeIter<'_, VD, HD, ED, FD, I> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> Iterator for VertexHalfEdgeIter<'_, VD, HD, ED, FD, I> {
    type Item = HalfEdgeId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let out = self.current;
        self.rotate_ccw();
        if self.current == self.start {
            self.done = true;
        }
        Some(out)
    }
}

/// Circulates over the incoming half-edges of a vertex.
pub struct VertexIncomingHalfEdgeIter<'a, VD, HD, ED, FD, I: MeshIndex> {
    mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    done: bool,
}

impl<'a, VD, HD, ED, FD, I: MeshIndex> VertexIncomingHalfEdgeIter<'a, VD, HD, ED, FD, I> {
    /// Create a circulator around the given vertex.
    pub fn new(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, v: VertexId<I>) -> Self {
        let out = mesh.outgoing_halfedge(v);
        let start = if out.is_valid() {
            out.opposite()
        } else {
            HalfEdgeId::invalid()
        };
        Self::from_halfedge(mesh, start)
    }

    /// Create a circulator starting at the given incoming half-edge.
    pub fn from_halfedge(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, he: HalfEdgeId<I>) -> Self {
        Self {
            mesh,
            start: he,
            current: he,
            done: !he.is_valid(),
        }
    }

    /// Get the half-edge the circulator currently stands on.
    #[inline]
    pub fn current_halfedge(&self) -> HalfEdgeId<I> {
        self.current
    }

    /// Rotate counter-clockwise around the pivot vertex.
    #[inline]
    pub fn rotate_ccw(&mut self) {
        self.current = self.mesh.next(self.current).opposite();
    }

    /// Rotate clockwise around the pivot vertex.
    #[inline]
    pub fn rotate_cw(&mut self) {
        self.current = self.mesh.prev(self.current.opposite());
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> PartialEq for VertexIncomingHalfEdgeIter<'_, VD, HD, ED, FD, I> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> Iterator for VertexIncomingHalfEdgeIter<'_, VD, HD, ED, FD, I> {
    type Item = HalfEdgeId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let out = self.current;
        self.rotate_ccw();
        if self.current == self.start {
            self.done = true;
        }
        Some(out)
    }
}

/// Circulates over the faces around a vertex.
///
/// Boundary gaps in the star yield an **invalid** face ID; filter with
/// [`FaceId::is_valid`] when only real faces are wanted.
pub struct VertexFaceIter<'a, VD, HD, ED, FD, I: MeshIndex> {
    mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    done: bool,
}

impl<'a, VD, HD, ED, FD, I: MeshIndex> VertexFaceIter<'a, VD, HD, ED, FD, I> {
    /// Create a circulator around the given vertex.
    pub fn new(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, v: VertexId<I>) -> Self {
        Self::from_halfedge(mesh, mesh.outgoing_halfedge(v))
    }

    /// Create a circulator starting at the given outgoing half-edge.
    pub fn from_halfedge(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, he: HalfEdgeId<I>) -> Self {
        Self {
            mesh,
            start: he,
            current: he,
            done: !he.is_valid(),
        }
    }

    /// Get the half-edge the circulator currently stands on.
    #[inline]
    pub fn current_halfedge(&self) -> HalfEdgeId<I> {
        self.current
    }

    /// Rotate counter-clockwise around the pivot vertex.
    #[inline]
    pub fn rotate_ccw(&mut self) {
        self.current = self.mesh.next(self.current.opposite());
    }

    /// Rotate clockwise around the pivot vertex.
    #[inline]
    pub fn rotate_cw(&mut self) {
        self.current = self.mesh.prev(self.current).opposite();
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> PartialEq for VertexFaceIter<'_, VD, HD, ED, FD, I> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> Iterator for VertexFaceIter<'_, VD, HD, ED, FD, I> {
    type Item = FaceId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let out = self.mesh.face_of(self.current);
        self.rotate_ccw();
        if self.current == self.start {
            self.done = true;
        }
        Some(out)
    }
}

// ==================== Circulators around a face ====================

/// Circulates over the vertices of a face, following the inner cycle.
pub struct FaceVertexIter<'a, VD, HD, ED, FD, I: MeshIndex> {
    mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    done: bool,
}

impl<'a, VD, HD, ED, FD, I: MeshIndex> FaceVertexIter<'a, VD, HD, ED, FD, I> {
    /// Create a circulator around the given face.
    pub fn new(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, f: FaceId<I>) -> Self {
        Self::from_halfedge(mesh, mesh.inner_halfedge(f))
    }

    /// Create a circulator starting at the given inner half-edge.
    pub fn from_halfedge(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, he: HalfEdgeId<I>) -> Self {
        Self {
            mesh,
            start: he,
            current: he,
            done: !he.is_valid(),
        }
    }

    /// Get the half-edge the circulator currently stands on.
    #[inline]
    pub fn current_halfedge(&self) -> HalfEdgeId<I> {
        self.current
    }

    /// Rotate counter-clockwise along the inner cycle.
    #[inline]
    pub fn rotate_ccw(&mut self) {
        self.current = self.mesh.next(self.current);
    }

    /// Rotate clockwise along the inner cycle.
    #[inline]
    pub fn rotate_cw(&mut self) {
        self.current = self.mesh.prev(self.current);
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> PartialEq for FaceVertexIter<'_, VD, HD, ED, FD, I> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> Iterator for FaceVertexIter<'_, VD, HD, ED, FD, I> {
    type Item = VertexId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let out = self.mesh.dest(self.current);
        self.rotate_ccw();
        if self.current == self.start {
            self.done = true;
        }
        Some(out)
    }
}

/// Circulates over the inner half-edges of a face.
pub struct FaceHalfEdgeIter<'a, VD, HD, ED, FD, I: MeshIndex> {
    mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    done: bool,
}

impl<'a, VD, HD, ED, FD, I: MeshIndex> FaceHalfEdgeIter<'a, VD, HD, ED, FD, I> {
    /// Create a circulator around the given face.
    pub fn new(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, f: FaceId<I>) -> Self {
        Self::from_halfedge(mesh, mesh.inner_halfedge(f))
    }

    /// Create a circulator starting at the given inner half-edge.
    pub fn from_halfedge(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, he: HalfEdgeId<I>) -> Self {
        Self {
            mesh,
            start: he,
            current: he,
            done: !he.is_valid(),
        }
    }

    /// Get the half-edge the circulator currently stands on.
    #[inline]
    pub fn current_halfedge(&self) -> HalfEdgeId<I> {
        self.current
    }

    /// Rotate counter-clockwise along the inner cycle.
    #[inline]
    pub fn rotate_ccw(&mut self) {
        self.current = self.mesh.next(self.current);
    }

    /// Rotate clockwise along the inner cycle.
    #[inline]
    pub fn rotate_cw(&mut self) {
        self.current = self.mesh.prev(self.current);
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> PartialEq for FaceHalfEdgeIter<'_, VD, HD, ED, FD, I> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> Iterator for FaceHalfEdgeIter<'_, VD, HD, ED, FD, I> {
    type Item = HalfEdgeId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let out = self.current;
        self.rotate_ccw();
        if self.current == self.start {
            self.done = true;
        }
        Some(out)
    }
}

/// Circulates over the outer half-edges of a face (the opposites of the
/// inner cycle).
pub struct FaceOuterHalfEdgeIter<'a, VD, HD, ED, FD, I: MeshIndex> {
    mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    done: bool,
}

impl<'a, VD, HD, ED, FD, I: MeshIndex> FaceOuterHalfEdgeIter<'a, VD, HD, ED, FD, I> {
    /// Create a circulator around the given face.
    pub fn new(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, f: FaceId<I>) -> Self {
        Self::from_halfedge(mesh, mesh.inner_halfedge(f))
    }

    /// Create a circulator starting at the given inner half-edge.
    pub fn from_halfedge(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, he: HalfEdgeId<I>) -> Self {
        Self {
            mesh,
            start: he,
            current: he,
            done: !he.is_valid(),
        }
    }

    /// Get the (inner) half-edge the circulator currently stands on.
    #[inline]
    pub fn current_halfedge(&self) -> HalfEdgeId<I> {
        self.current
    }

    /// Rotate counter-clockwise along the inner cycle.
    #[inline]
    pub fn rotate_ccw(&mut self) {
        self.current = self.mesh.next(self.current);
    }

    /// Rotate clockwise along the inner cycle.
    #[inline]
    pub fn rotate_cw(&mut self) {
        self.current = self.mesh.prev(self.current);
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> PartialEq for FaceOuterHalfEdgeIter<'_, VD, HD, ED, FD, I> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> Iterator for FaceOuterHalfEdgeIter<'_, VD, HD, ED, FD, I> {
    type Item = HalfEdgeId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let out = self.current.opposite();
        self.rotate_ccw();
        if self.current == self.start {
            self.done = true;
        }
        Some(out)
    }
}

/// Circulates over the faces adjacent to a face (across its edges).
///
/// Boundary edges yield an **invalid** face ID; filter with
/// [`FaceId::is_valid`] when only real neighbors are wanted.
pub struct FaceFaceIter<'a, VD, HD, ED, FD, I: MeshIndex> {
    mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    done: bool,
}

impl<'a, VD, HD, ED, FD, I: MeshIndex> FaceFaceIter<'a, VD, HD, ED, FD, I> {
    /// Create a circulator around the given face.
    pub fn new(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, f: FaceId<I>) -> Self {
        Self::from_halfedge(mesh, mesh.inner_halfedge(f))
    }

    /// Create a circulator starting at the given inner half-edge.
    pub fn from_halfedge(mesh: &'a HalfEdgeMesh<VD, HD, ED, FD, I>, he: HalfEdgeId<I>) -> Self {
        Self {
            mesh,
            start: he,
            current: he,
            done: !he.is_valid(),
        }
    }

    /// Get the (inner) half-edge the circulator currently stands on.
    #[inline]
    pub fn current_halfedge(&self) -> HalfEdgeId<I> {
        self.current
    }

    /// Rotate counter-clockwise along the inner cycle.
    #[inline]
    pub fn rotate_ccw(&mut self) {
        self.current = self.mesh.next(self.current);
    }

    /// Rotate clockwise along the inner cycle.
    #[inline]
    pub fn rotate_cw(&mut self) {
        self.current = self.mesh.prev(self.current);
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> PartialEq for FaceFaceIter<'_, VD, HD, ED, FD, I> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<VD, HD, ED, FD, I: MeshIndex> Iterator for FaceFaceIter<'_, VD, HD, ED, FD, I> {
    type Item = FaceId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let out = self.mesh.face_of(self.current.opposite());
        self.rotate_ccw();
        if self.current == self.start {
            self.done = true;
        }
        Some(out)
    }
}

// ==================== Mesh entry points ====================

impl<VD, HD, ED, FD, I: MeshIndex> HalfEdgeMesh<VD, HD, ED, FD, I> {
    /// Circulate over the vertices adjacent to `v` (counter-clockwise).
    pub fn vertex_neighbors(&self, v: VertexId<I>) -> VertexVertexIter<'_, VD, HD, ED, FD, I> {
        VertexVertexIter::new(self, v)
    }

    /// Circulate over the outgoing half-edges of `v` (counter-clockwise).
    pub fn vertex_halfedges(&self, v: VertexId<I>) -> VertexHalfEdgeIter<'_, VD, HD, ED, FD, I> {
        VertexHalfEdgeIter::new(self, v)
    }

    /// Circulate over the incoming half-edges of `v` (counter-clockwise).
    pub fn vertex_incoming_halfedges(
        &self,
        v: VertexId<I>,
    ) -> VertexIncomingHalfEdgeIter<'_, VD, HD, ED, FD, I> {
        VertexIncomingHalfEdgeIter::new(self, v)
    }

    /// Circulate over the faces around `v` (counter-clockwise). Boundary
    /// gaps yield invalid face IDs.
    pub fn vertex_faces(&self, v: VertexId<I>) -> VertexFaceIter<'_, VD, HD, ED, FD, I> {
        VertexFaceIter::new(self, v)
    }

    /// Circulate over the vertices of `f`, in face orientation order.
    pub fn face_vertices(&self, f: FaceId<I>) -> FaceVertexIter<'_, VD, HD, ED, FD, I> {
        FaceVertexIter::new(self, f)
    }

    /// Circulate over the inner half-edges of `f`.
    pub fn face_halfedges(&self, f: FaceId<I>) -> FaceHalfEdgeIter<'_, VD, HD, ED, FD, I> {
        FaceHalfEdgeIter::new(self, f)
    }

    /// Circulate over the outer half-edges of `f`.
    pub fn face_outer_halfedges(
        &self,
        f: FaceId<I>,
    ) -> FaceOuterHalfEdgeIter<'_, VD, HD, ED, FD, I> {
        FaceOuterHalfEdgeIter::new(self, f)
    }

    /// Circulate over the faces adjacent to `f`. Boundary edges yield
    /// invalid face IDs.
    pub fn face_neighbors(&self, f: FaceId<I>) -> FaceFaceIter<'_, VD, HD, ED, FD, I> {
        FaceFaceIter::new(self, f)
    }
}
