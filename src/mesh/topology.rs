//! Incremental face insertion.
//!
//! [`HalfEdgeMesh::add_face`] inserts an oriented polygon into the mesh,
//! reusing boundary half-edges that already connect consecutive vertices and
//! creating fresh half-edge pairs for the rest. Insertion is transactional:
//! every topological precondition is checked before the first write, so a
//! rejected face leaves the mesh untouched and is reported by an invalid
//! [`FaceId`].
//!
//! # Algorithm
//!
//! For each edge slot `v[i] -> v[i+1]` of the new face:
//!
//! 1. `check_topology_1` decides whether the slot reuses an existing
//!    boundary half-edge or needs a fresh pair, and rejects occupied slots.
//! 2. `check_topology_2` inspects consecutive slots around their shared
//!    vertex and rejects insertions that would detach a fan. In a
//!    non-manifold mesh it may instead schedule a fan splice
//!    (`make_adjacent`).
//! 3. New half-edge pairs are allocated (`add_edge`), then every
//!    consecutive slot pair is linked by one of the four `connect_*`
//!    routines, and finally `connect_face` stamps the new face onto the
//!    inner cycle.

use std::collections::HashSet;

use super::halfedge::{Face, HalfEdge, HalfEdgeMesh};
use super::index::{FaceId, HalfEdgeId, MeshIndex, VertexId};

impl<VD, HD, ED, FD, I: MeshIndex> HalfEdgeMesh<VD, HD, ED, FD, I> {
    /// Add a face with default payloads.
    ///
    /// The vertices must be valid, pairwise distinct and at least three;
    /// the face is oriented `vertices[0] -> vertices[1] -> ... ->
    /// vertices[0]`. On rejection the mesh is unchanged and an invalid ID
    /// is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use hedra::mesh::HalfEdgeMesh;
    ///
    /// let mut mesh: HalfEdgeMesh = HalfEdgeMesh::new();
    /// let v0 = mesh.add_vertex();
    /// let v1 = mesh.add_vertex();
    /// let v2 = mesh.add_vertex();
    ///
    /// let f = mesh.add_face(&[v0, v1, v2]);
    /// assert!(f.is_valid());
    /// assert_eq!(mesh.num_faces(), 1);
    /// assert_eq!(mesh.num_edges(), 3);
    /// ```
    pub fn add_face(&mut self, vertices: &[VertexId<I>]) -> FaceId<I>
    where
        HD: Default + Clone,
        ED: Default + Clone,
        FD: Default,
    {
        self.add_face_with(vertices, FD::default(), ED::default(), HD::default())
    }

    /// Add a face carrying the given payloads.
    ///
    /// `face_data` is stored for the new face, `edge_data` for every newly
    /// created edge and `halfedge_data` for both halves of every newly
    /// created edge. Reused half-edges keep their payloads. See
    /// [`add_face`](Self::add_face) for the topological contract.
    pub fn add_face_with(
        &mut self,
        vertices: &[VertexId<I>],
        face_data: FD,
        edge_data: ED,
        halfedge_data: HD,
    ) -> FaceId<I>
    where
        HD: Clone,
        ED: Clone,
    {
        let n = vertices.len();
        if n < 3 {
            return FaceId::invalid();
        }

        // Check that the input indices are valid and unique.
        let mut unique = HashSet::with_capacity(n);
        let mut all_isolated = true;
        for &v in vertices {
            if !self.is_valid_vertex(v) || !unique.insert(v) {
                return FaceId::invalid();
            }
            if all_isolated && !self.is_isolated(v) {
                all_isolated = false;
            }
        }

        let mut inner = vec![HalfEdgeId::invalid(); n];

        // Avoid the topology checks for this special case.
        if all_isolated {
            for i in 0..n {
                inner[i] = self.add_edge(
                    vertices[i],
                    vertices[(i + 1) % n],
                    halfedge_data.clone(),
                    edge_data.clone(),
                );
            }
            for i in 0..n {
                self.connect_new_new(inner[i], inner[(i + 1) % n], vertices[(i + 1) % n]);
            }
            return self.connect_face(&inner, face_data);
        }

        // Check for topological errors. Nothing is written before both
        // checks have passed for every slot.
        let mut is_new = vec![true; n];
        let mut make_adjacent = vec![false; n];
        let mut free_he = vec![HalfEdgeId::invalid(); n];

        for i in 0..n {
            if !self.check_topology_1(
                vertices[i],
                vertices[(i + 1) % n],
                &mut inner[i],
                &mut is_new[i],
            ) {
                return FaceId::invalid();
            }
        }
        for i in 0..n {
            let j = (i + 1) % n;
            if !self.check_topology_2(
                inner[i],
                inner[j],
                is_new[i],
                is_new[j],
                self.is_isolated(vertices[j]),
                &mut make_adjacent[i],
                &mut free_he[i],
            ) {
                return FaceId::invalid();
            }
        }

        // Reconnect the existing half-edges if needed.
        if !self.is_manifold_policy() {
            for i in 0..n {
                if make_adjacent[i] {
                    self.make_adjacent(inner[i], inner[(i + 1) % n], free_he[i]);
                }
            }
        }

        // Add new half-edges if needed.
        for i in 0..n {
            if is_new[i] {
                inner[i] = self.add_edge(
                    vertices[i],
                    vertices[(i + 1) % n],
                    halfedge_data.clone(),
                    edge_data.clone(),
                );
            }
        }

        // Connect the consecutive slots around their shared vertex.
        for i in 0..n {
            let j = (i + 1) % n;
            match (is_new[i], is_new[j]) {
                (true, true) => self.connect_new_new(inner[i], inner[j], vertices[j]),
                (true, false) => self.connect_new_old(inner[i], inner[j], vertices[j]),
                (false, true) => self.connect_old_new(inner[i], inner[j], vertices[j]),
                (false, false) => self.connect_old_old(inner[i], inner[j], vertices[j]),
            }
        }

        self.connect_face(&inner, face_data)
    }

    // ==================== add_edge ====================

    /// Push the half-edge pair `a -> b`, `b -> a` and the matching payload
    /// slots. Returns the half-edge pointing at `b` (the even index of the
    /// new pair). The cycle pointers of both halves are left unlinked.
    pub(crate) fn add_edge(
        &mut self,
        a: VertexId<I>,
        b: VertexId<I>,
        halfedge_data: HD,
        edge_data: ED,
    ) -> HalfEdgeId<I>
    where
        HD: Clone,
    {
        self.halfedges.push(HalfEdge::pointing_at(b));
        self.halfedges.push(HalfEdge::pointing_at(a));
        self.halfedge_data.push(halfedge_data.clone());
        self.halfedge_data.push(halfedge_data);
        self.edge_data.push(edge_data);
        HalfEdgeId::new(self.halfedges.len() - 2)
    }

    // ==================== Topology checks ====================

    /// Decide how the slot `a -> b` is realized.
    ///
    /// Returns `false` if the face cannot be inserted. On success,
    /// `is_new_ab` says whether a fresh pair is needed; if not, `inner_ab`
    /// holds the boundary half-edge to reuse.
    fn check_topology_1(
        &self,
        a: VertexId<I>,
        b: VertexId<I>,
        inner_ab: &mut HalfEdgeId<I>,
        is_new_ab: &mut bool,
    ) -> bool {
        if self.is_manifold_policy() {
            if self.is_isolated(a) {
                return true;
            }
            // A single fan: the stored outgoing half-edge is the only
            // possible free slot out of `a`.
            *inner_ab = self.outgoing_halfedge(a);
            if !self.is_boundary_halfedge(*inner_ab) {
                return false;
            }
            if self.dest(*inner_ab) == b {
                *is_new_ab = false;
            }
            true
        } else {
            if self.is_isolated(a) {
                return true;
            }
            if !self.is_boundary_halfedge(self.outgoing_halfedge(a)) {
                return false;
            }

            // Search the whole star of `a` for an existing half-edge to `b`.
            *is_new_ab = true;
            let start = self.outgoing_halfedge(a);
            let mut he = start;
            loop {
                if self.dest(he) == b {
                    *inner_ab = he;
                    if !self.is_boundary_halfedge(he) {
                        return false; // The slot is occupied.
                    }
                    *is_new_ab = false;
                    return true;
                }
                he = self.next(he.opposite());
                if he == start {
                    return true;
                }
            }
        }
    }

    /// Check the corner between the consecutive slots `a -> b` and
    /// `b -> c`.
    ///
    /// Returns `false` if the face cannot be inserted. In a non-manifold
    /// mesh, `make_adjacent_ab_bc` and `free_he` record the fan splice that
    /// must be performed before connecting.
    #[allow(clippy::too_many_arguments)]
    fn check_topology_2(
        &self,
        he_ab: HalfEdgeId<I>,
        he_bc: HalfEdgeId<I>,
        is_new_ab: bool,
        is_new_bc: bool,
        is_isolated_b: bool,
        make_adjacent_ab_bc: &mut bool,
        free_he: &mut HalfEdgeId<I>,
    ) -> bool {
        if self.is_manifold_policy() {
            // Two fresh edges meeting at an already-connected vertex would
            // open a second fan there.
            !(is_new_ab && is_new_bc && !is_isolated_b)
        } else {
            if is_new_ab || is_new_bc {
                *make_adjacent_ab_bc = false;
                return true; // A splice is only needed between two old slots.
            }
            if self.next(he_ab) == he_bc {
                *make_adjacent_ab_bc = false;
                return true; // Already adjacent.
            }
            *make_adjacent_ab_bc = true;

            // Find the next boundary half-edge into `b`, starting after the
            // opposite of `b -> c`.
            let mut he = he_bc.opposite();
            loop {
                he = self.next(he).opposite();
                if self.is_boundary_halfedge(he) {
                    break;
                }
            }
            *free_he = he;

            // If the only free slot is `a -> b` itself, the splice would
            // detach the fans around `b` from each other.
            he != he_ab
        }
    }

    /// Splice the fans around the shared vertex so that `b -> c` follows
    /// `a -> b`.
    fn make_adjacent(&mut self, he_ab: HalfEdgeId<I>, he_bc: HalfEdgeId<I>, free_he: HalfEdgeId<I>) {
        let ab_next = self.next(he_ab);
        let bc_prev = self.prev(he_bc);
        let free_next = self.next(free_he);

        self.connect_prev_next(he_ab, he_bc);
        self.connect_prev_next(free_he, ab_next);
        self.connect_prev_next(bc_prev, free_next);
    }

    // ==================== Connect ====================

    /// Push the face record, stamp the face onto its inner cycle and append
    /// the face payload.
    fn connect_face(&mut self, inner: &[HalfEdgeId<I>], face_data: FD) -> FaceId<I> {
        self.faces.push(Face::new(inner[inner.len() - 1]));
        self.face_data.push(face_data);
        let f = FaceId::new(self.faces.len() - 1);
        for &he in inner {
            self.set_face(he, f);
        }
        f
    }

    /// Connect two fresh slots meeting at `b`.
    fn connect_new_new(&mut self, he_ab: HalfEdgeId<I>, he_bc: HalfEdgeId<I>, b: VertexId<I>) {
        if self.is_manifold_policy() || self.is_isolated(b) {
            let he_ba = he_ab.opposite();
            let he_cb = he_bc.opposite();

            self.connect_prev_next(he_ab, he_bc);
            self.connect_prev_next(he_cb, he_ba);

            self.set_outgoing_halfedge(b, he_ba);
        } else {
            // `b` already carries a fan; insert the new corner into its
            // boundary cycle without touching the anchor.
            let he_ba = he_ab.opposite();
            let he_cb = he_bc.opposite();
            let b_out = self.outgoing_halfedge(b);
            let b_out_prev = self.prev(b_out);

            self.connect_prev_next(he_ab, he_bc);
            self.connect_prev_next(he_cb, b_out);
            self.connect_prev_next(b_out_prev, he_ba);
        }
    }

    /// Connect a fresh slot to a reused one at `b`.
    fn connect_new_old(&mut self, he_ab: HalfEdgeId<I>, he_bc: HalfEdgeId<I>, b: VertexId<I>) {
        let he_ba = he_ab.opposite();
        let he_bc_prev = self.prev(he_bc);

        self.connect_prev_next(he_ab, he_bc);
        self.connect_prev_next(he_bc_prev, he_ba);

        self.set_outgoing_halfedge(b, he_ba);
    }

    /// Connect a reused slot to a fresh one at `b`.
    fn connect_old_new(&mut self, he_ab: HalfEdgeId<I>, he_bc: HalfEdgeId<I>, b: VertexId<I>) {
        let he_cb = he_bc.opposite();
        let he_ab_next = self.next(he_ab);

        self.connect_prev_next(he_ab, he_bc);
        self.connect_prev_next(he_cb, he_ab_next);

        self.set_outgoing_halfedge(b, he_ab_next);
    }

    /// Connect two reused slots at `b`.
    fn connect_old_old(&mut self, _he_ab: HalfEdgeId<I>, he_bc: HalfEdgeId<I>, b: VertexId<I>) {
        if self.is_manifold_policy() {
            // Both half-edges already exist and were checked to be
            // adjacent; there is nothing to rewire.
            return;
        }

        // `b -> c` leaves the boundary once the face is stamped; keep the
        // outgoing anchor on a boundary half-edge if one remains.
        if self.outgoing_halfedge(b) == he_bc {
            let start = he_bc;
            let mut he = self.next(start.opposite());
            while he != start {
                if self.is_boundary_halfedge(he) {
                    self.set_outgoing_halfedge(b, he);
                    return;
                }
                he = self.next(he.opposite());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::halfedge::{HalfEdgeMesh, MeshPolicy};
    use super::*;

    type TopoMesh = HalfEdgeMesh<(), (), (), (), u32>;

    fn mesh_with_vertices(n: usize, policy: MeshPolicy) -> (TopoMesh, Vec<VertexId<u32>>) {
        let mut mesh = TopoMesh::with_policy(policy);
        let vertices = (0..n).map(|_| mesh.add_vertex()).collect();
        (mesh, vertices)
    }

    /// Triangle strip: two triangles sharing the edge `v1 - v2`.
    fn strip() -> (TopoMesh, Vec<VertexId<u32>>, [FaceId<u32>; 2]) {
        let (mut mesh, v) = mesh_with_vertices(4, MeshPolicy::Manifold);
        let f0 = mesh.add_face(&[v[0], v[1], v[2]]);
        let f1 = mesh.add_face(&[v[1], v[3], v[2]]);
        assert!(f0.is_valid() && f1.is_valid());
        (mesh, v, [f0, f1])
    }

    #[test]
    fn test_single_triangle() {
        let (mut mesh, v) = mesh_with_vertices(3, MeshPolicy::Manifold);
        let f = mesh.add_face(&[v[0], v[1], v[2]]);
        assert!(f.is_valid());

        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_edges(), 3);
        assert_eq!(mesh.num_halfedges(), 6);
        assert_eq!(mesh.num_faces(), 1);
        assert!(mesh.is_manifold());
        assert_eq!(mesh.face_halfedges(f).count(), 3);
        for &vi in &v {
            assert!(mesh.is_boundary_vertex(vi));
        }
        mesh.validate().unwrap();
    }

    #[test]
    fn test_two_triangles_share_an_edge() {
        let (mesh, v, [f0, f1]) = strip();

        assert_eq!(mesh.num_edges(), 5);
        assert_eq!(mesh.num_halfedges(), 10);
        assert_eq!(mesh.num_faces(), 2);

        // The shared edge carries both faces.
        let shared = mesh
            .edge_ids()
            .find(|&e| {
                let (a, b) = (e.halfedge(0), e.halfedge(1));
                !mesh.is_boundary_halfedge(a) && !mesh.is_boundary_halfedge(b)
            })
            .expect("one interior edge");
        let faces = [
            mesh.face_of(shared.halfedge(0)),
            mesh.face_of(shared.halfedge(1)),
        ];
        assert!(faces.contains(&f0) && faces.contains(&f1));
        assert!(!mesh.is_boundary_edge(shared));

        // Every vertex still touches the boundary.
        for &vi in &v {
            assert!(mesh.is_boundary_vertex(vi));
            assert_eq!(mesh.dest(mesh.incoming_halfedge(vi)), vi);
        }
        mesh.validate().unwrap();
    }

    #[test]
    fn test_face_boundary_checks() {
        // Closed fan with an outer triangle ring: the fan faces have only
        // interior edges, but their rim corners lie on the boundary.
        let (mut mesh, v) = mesh_with_vertices(9, MeshPolicy::Manifold);
        let vc = v[0];
        let rim = [v[1], v[2], v[3], v[4]];
        let outer = [v[5], v[6], v[7], v[8]];
        let mut fan = Vec::new();
        for i in 0..4 {
            fan.push(mesh.add_face(&[vc, rim[i], rim[(i + 1) % 4]]));
        }
        for i in 0..4 {
            assert!(mesh
                .add_face(&[rim[(i + 1) % 4], rim[i], outer[i]])
                .is_valid());
        }
        mesh.validate().unwrap();

        for &f in &fan {
            assert!(f.is_valid());
            assert!(!mesh.is_boundary_face_edges(f));
            assert!(mesh.is_boundary_face(f));
        }
    }

    #[test]
    fn test_rejects_small_invalid_and_duplicate_input() {
        let (mut mesh, v, _) = strip();
        let before = mesh.clone();

        assert!(!mesh.add_face(&[v[0], v[1]]).is_valid());
        assert!(!mesh
            .add_face(&[v[0], v[1], VertexId::new(99)])
            .is_valid());
        assert!(!mesh.add_face(&[v[0], v[1], v[0]]).is_valid());
        assert_eq!(mesh, before);
    }

    #[test]
    fn test_manifold_rejects_bowtie() {
        // Attaching a triangle that shares only one (connected) vertex
        // would open a second fan there.
        let (mut mesh, v) = mesh_with_vertices(5, MeshPolicy::Manifold);
        assert!(mesh.add_face(&[v[0], v[1], v[2]]).is_valid());
        let before = mesh.clone();

        let rejected = mesh.add_face(&[v[2], v[3], v[4]]);
        assert!(!rejected.is_valid());
        assert_eq!(mesh, before);
    }

    #[test]
    fn test_manifold_rejects_closed_star() {
        // Tetrahedron: every vertex star is closed afterwards.
        let (mut mesh, v) = mesh_with_vertices(4, MeshPolicy::Manifold);
        for face in [
            [v[0], v[2], v[1]],
            [v[0], v[1], v[3]],
            [v[1], v[2], v[3]],
            [v[2], v[0], v[3]],
        ] {
            assert!(mesh.add_face(&face).is_valid());
        }
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_edges(), 6);
        assert_eq!(mesh.num_faces(), 4);
        for &vi in &v {
            assert!(!mesh.is_boundary_vertex(vi));
        }
        mesh.validate().unwrap();

        let before = mesh.clone();
        assert!(!mesh.add_face(&[v[0], v[1], v[2]]).is_valid());
        assert_eq!(mesh, before);
    }

    #[test]
    fn test_rejects_occupied_slot_non_manifold() {
        let (mut mesh, v) = mesh_with_vertices(3, MeshPolicy::NonManifold);
        assert!(mesh.add_face(&[v[0], v[1], v[2]]).is_valid());
        let before = mesh.clone();

        // The oriented slot v0 -> v1 already carries a face.
        assert!(!mesh.add_face(&[v[0], v[1], v[2]]).is_valid());
        assert_eq!(mesh, before);
    }

    #[test]
    fn test_fills_notch_between_two_reused_slots() {
        // The strip boundary runs v1 -> v0 -> v2 -> v3 -> v1; the face
        // below uses two existing boundary half-edges and one new chord.
        let (mut mesh, v, _) = strip();
        let f = mesh.add_face(&[v[0], v[3], v[1]]);
        assert!(f.is_valid());
        assert_eq!(mesh.num_faces(), 3);
        assert_eq!(mesh.num_edges(), 6);
        mesh.validate().unwrap();
    }

    #[test]
    fn test_non_manifold_bowtie() {
        let (mut mesh, v) = mesh_with_vertices(5, MeshPolicy::NonManifold);
        assert!(mesh.add_face(&[v[0], v[1], v[2]]).is_valid());
        let f = mesh.add_face(&[v[2], v[3], v[4]]);
        assert!(f.is_valid());

        assert!(!mesh.is_manifold());
        assert!(!mesh.is_manifold_vertex(v[2]));
        for &vi in [v[0], v[1], v[3], v[4]].iter() {
            assert!(mesh.is_manifold_vertex(vi));
        }
        mesh.validate().unwrap();
    }

    /// Three fans meeting at `b`, non-manifold. Returns the mesh and the
    /// vertex IDs `[a, x, b, c, y, d, z]`.
    fn triple_fan() -> (TopoMesh, Vec<VertexId<u32>>) {
        let (mut mesh, v) = mesh_with_vertices(7, MeshPolicy::NonManifold);
        let (a, x, b, c, y, d, z) = (v[0], v[1], v[2], v[3], v[4], v[5], v[6]);
        assert!(mesh.add_face(&[b, a, x]).is_valid());
        assert!(mesh.add_face(&[c, b, y]).is_valid());
        assert!(mesh.add_face(&[d, b, z]).is_valid());
        assert!(!mesh.is_manifold_vertex(b));
        (mesh, v)
    }

    #[test]
    fn test_splice_of_non_adjacent_fans() {
        // The slots a -> b and b -> d exist in different fans around b, so
        // inserting [a, b, d] has to splice the fans first.
        let (mut mesh, v) = triple_fan();
        let (a, b, d) = (v[0], v[2], v[5]);

        let edges_before = mesh.num_edges();
        let f = mesh.add_face(&[a, b, d]);
        assert!(f.is_valid());
        assert_eq!(mesh.num_edges(), edges_before + 1); // only d -> a is new
        assert!(!mesh.is_manifold_vertex(b));
        mesh.validate().unwrap();
    }

    #[test]
    fn test_reused_slot_keeps_boundary_anchor() {
        // After [a, b, d], the anchor of b still is b -> x; the face
        // [y, b, x] consumes it, forcing the anchor onto another boundary
        // half-edge.
        let (mut mesh, v) = triple_fan();
        let (a, x, b, y, d) = (v[0], v[1], v[2], v[4], v[5]);
        assert!(mesh.add_face(&[a, b, d]).is_valid());

        let f = mesh.add_face(&[y, b, x]);
        assert!(f.is_valid());
        let anchor = mesh.outgoing_halfedge(b);
        assert!(mesh.is_boundary_halfedge(anchor));
        assert_eq!(mesh.origin(anchor), b);
        // The splices stitched all fans back into one.
        assert!(mesh.is_manifold_vertex(b));
        mesh.validate().unwrap();
    }

    #[test]
    fn test_euler_count_for_isolated_insertion() {
        let (mut mesh, v) = mesh_with_vertices(4, MeshPolicy::Manifold);
        let f = mesh.add_face(&[v[0], v[1], v[2], v[3]]);
        assert!(f.is_valid());

        // A face over isolated vertices adds one face and n edges.
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_edges(), 4);
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.face_halfedges(f).count(), 4);
        mesh.validate().unwrap();
    }

    #[test]
    fn test_payloads_stay_in_lockstep() {
        let mut mesh: HalfEdgeMesh<u32, u32, u32, u32> = HalfEdgeMesh::new();
        let v0 = mesh.add_vertex_with(0);
        let v1 = mesh.add_vertex_with(1);
        let v2 = mesh.add_vertex_with(2);
        let v3 = mesh.add_vertex_with(3);

        let f0 = mesh.add_face_with(&[v0, v1, v2], 100, 10, 1);
        let f1 = mesh.add_face_with(&[v1, v3, v2], 200, 20, 2);
        assert!(f0.is_valid() && f1.is_valid());

        assert_eq!(mesh.vertex_data().len(), mesh.num_vertices());
        assert_eq!(mesh.halfedge_data().len(), mesh.num_halfedges());
        assert_eq!(mesh.edge_data().len(), mesh.num_edges());
        assert_eq!(mesh.face_data().len(), mesh.num_faces());

        // The three edges of the first face carry its edge payload, the
        // two new edges of the second face carry the other.
        assert_eq!(mesh.edge_data(), &[10, 10, 10, 20, 20]);
        assert_eq!(mesh.face_data(), &[100, 200]);
        assert_eq!(mesh.halfedge_data()[..6], [1, 1, 1, 1, 1, 1]);
        assert_eq!(mesh.halfedge_data()[6..], [2, 2, 2, 2]);
    }

    #[test]
    fn test_quad_and_pentagon_faces() {
        let (mut mesh, v) = mesh_with_vertices(8, MeshPolicy::Manifold);
        let quad = mesh.add_face(&[v[0], v[1], v[2], v[3]]);
        assert!(quad.is_valid());

        // Pentagon sharing the boundary slot v1 -> v0 with the quad.
        let pent = mesh.add_face(&[v[1], v[0], v[4], v[5], v[6]]);
        assert!(pent.is_valid());
        assert_eq!(mesh.face_halfedges(pent).count(), 5);
        assert_eq!(mesh.num_faces(), 2);
        mesh.validate().unwrap();
    }
}
