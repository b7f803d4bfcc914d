//! Compaction of tombstoned elements.
//!
//! [`HalfEdgeMesh::collect_garbage`] physically removes every element that
//! was marked deleted, moves the surviving elements (and their payload
//! slots) to the front of their sequences in stable order, and rewrites all
//! stored cross-references to the new positions.
//!
//! Every index handed out before compaction is invalidated by it.

use super::halfedge::HalfEdgeMesh;
use super::index::{FaceId, HalfEdgeId, MeshIndex, VertexId};

/// Remap entry for a deleted element.
const REMOVED: usize = usize::MAX;

/// Stable in-place compaction of one element sequence and its payload.
///
/// Returns the old-to-new index mapping, with [`REMOVED`] for deleted
/// slots.
fn compact_elements<T, P>(
    elements: &mut Vec<T>,
    payload: &mut Vec<P>,
    deleted: impl Fn(&T) -> bool,
) -> Vec<usize> {
    debug_assert_eq!(elements.len(), payload.len());

    let mut map = vec![REMOVED; elements.len()];
    let mut new = 0usize;
    for old in 0..elements.len() {
        if !deleted(&elements[old]) {
            map[old] = new;
            elements.swap(new, old);
            payload.swap(new, old);
            new += 1;
        }
    }
    elements.truncate(new);
    payload.truncate(new);
    map
}

impl<VD, HD, ED, FD, I: MeshIndex> HalfEdgeMesh<VD, HD, ED, FD, I> {
    /// Remove all elements and payload entries that are marked as deleted.
    ///
    /// Surviving elements keep their relative order; every stored
    /// cross-reference (outgoing half-edges, cycle pointers, face links) is
    /// rewritten to the new positions. Isolated vertices are swept as well,
    /// since they share the deletion sentinel.
    ///
    /// All previously returned IDs are invalidated. Runs in time and
    /// auxiliary space linear in the mesh size.
    pub fn collect_garbage(&mut self) {
        // Copy the surviving elements to the front and record the index
        // mapping for each element kind.
        let vertex_map = compact_elements(&mut self.vertices, &mut self.vertex_data, |v| {
            !v.halfedge.is_valid()
        });
        let halfedge_map = compact_elements(&mut self.halfedges, &mut self.halfedge_data, |he| {
            !he.target.is_valid()
        });
        let face_map = compact_elements(&mut self.faces, &mut self.face_data, |f| {
            !f.halfedge.is_valid()
        });

        // The edge payload is keyed per half-edge pair: an entry survives
        // iff its pair does. Half-edges die in pairs, so the surviving
        // pairs stay aligned to even indices and the opposite-by-XOR
        // encoding is preserved.
        let mut new_edge = 0usize;
        for old_edge in 0..halfedge_map.len() / 2 {
            if halfedge_map[2 * old_edge] != REMOVED {
                debug_assert!(
                    halfedge_map[2 * old_edge + 1] != REMOVED,
                    "half-edge pair {} died only halfway",
                    old_edge
                );
                debug_assert_eq!(halfedge_map[2 * old_edge] % 2, 0);
                self.edge_data.swap(new_edge, old_edge);
                new_edge += 1;
            }
        }
        self.edge_data.truncate(new_edge);

        // Rewrite the cross-references of the survivors. This must happen
        // after all three compactions, while the old indices stored in the
        // records still address the maps unambiguously.
        for v in &mut self.vertices {
            if v.halfedge.is_valid() {
                debug_assert_ne!(halfedge_map[v.halfedge.index()], REMOVED);
                v.halfedge = HalfEdgeId::new(halfedge_map[v.halfedge.index()]);
            }
        }
        for he in &mut self.halfedges {
            debug_assert_ne!(vertex_map[he.target.index()], REMOVED);
            debug_assert_ne!(halfedge_map[he.next.index()], REMOVED);
            debug_assert_ne!(halfedge_map[he.prev.index()], REMOVED);
            he.target = VertexId::new(vertex_map[he.target.index()]);
            he.next = HalfEdgeId::new(halfedge_map[he.next.index()]);
            he.prev = HalfEdgeId::new(halfedge_map[he.prev.index()]);
            if he.face.is_valid() {
                debug_assert_ne!(face_map[he.face.index()], REMOVED);
                he.face = FaceId::new(face_map[he.face.index()]);
            }
        }
        for f in &mut self.faces {
            debug_assert_ne!(halfedge_map[f.halfedge.index()], REMOVED);
            f.halfedge = HalfEdgeId::new(halfedge_map[f.halfedge.index()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::halfedge::{HalfEdgeMesh, MeshPolicy};
    use super::super::index::VertexId;

    type TopoMesh = HalfEdgeMesh<(), (), (), (), u32>;

    #[test]
    fn test_noop_on_clean_mesh() {
        let mut mesh = TopoMesh::new();
        let v0 = mesh.add_vertex();
        let v1 = mesh.add_vertex();
        let v2 = mesh.add_vertex();
        assert!(mesh.add_face(&[v0, v1, v2]).is_valid());

        let snapshot = mesh.clone();
        mesh.collect_garbage();
        assert_eq!(mesh, snapshot);
    }

    #[test]
    fn test_sweeps_isolated_vertices() {
        let mut mesh = TopoMesh::new();
        let v0 = mesh.add_vertex();
        let v1 = mesh.add_vertex();
        let v2 = mesh.add_vertex();
        mesh.add_vertex(); // never connected
        assert!(mesh.add_face(&[v0, v1, v2]).is_valid());

        mesh.collect_garbage();
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.vertex_data().len(), 3);
        mesh.validate().unwrap();
    }

    #[test]
    fn test_compaction_after_face_deletion() {
        let mut mesh = TopoMesh::new();
        let v: Vec<_> = (0..4).map(|_| mesh.add_vertex()).collect();
        let f0 = mesh.add_face(&[v[0], v[1], v[2]]);
        let f1 = mesh.add_face(&[v[1], v[3], v[2]]);
        assert!(f0.is_valid() && f1.is_valid());

        mesh.delete_face(f0);
        mesh.collect_garbage();

        // v0 and its two edges are gone; the surviving triangle shrank to
        // the front of every sequence.
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_edges(), 3);
        assert_eq!(mesh.num_halfedges(), 6);
        assert_eq!(mesh.num_faces(), 1);

        for vi in mesh.vertex_ids() {
            assert!(!mesh.is_deleted_vertex(vi));
        }
        for he in mesh.halfedge_ids() {
            assert!(!mesh.is_deleted_halfedge(he));
        }
        for f in mesh.face_ids() {
            assert!(!mesh.is_deleted_face(f));
            assert_eq!(mesh.face_halfedges(f).count(), 3);
        }
        // Pair encoding survives renumbering.
        for e in mesh.edge_ids() {
            let (h0, h1) = (e.halfedge(0), e.halfedge(1));
            assert_eq!(mesh.origin(h0), mesh.dest(h1));
            assert_eq!(mesh.dest(h0), mesh.origin(h1));
        }
        mesh.validate().unwrap();
    }

    #[test]
    fn test_payloads_move_with_their_elements() {
        let mut mesh: HalfEdgeMesh<u32, u32, u32, u32> = HalfEdgeMesh::new();
        let v: Vec<_> = (0..4).map(|i| mesh.add_vertex_with(i)).collect();
        let f0 = mesh.add_face_with(&[v[0], v[1], v[2]], 100, 10, 1);
        let f1 = mesh.add_face_with(&[v[1], v[3], v[2]], 200, 20, 2);
        assert!(f0.is_valid() && f1.is_valid());

        mesh.delete_face(f0);
        mesh.collect_garbage();

        // v0 died with its payload; the shared edge keeps the first
        // face's edge payload, the two others came with the second face.
        assert_eq!(mesh.vertex_data(), &[1, 2, 3]);
        assert_eq!(mesh.edge_data(), &[10, 20, 20]);
        assert_eq!(mesh.halfedge_data(), &[1, 1, 2, 2, 2, 2]);
        assert_eq!(mesh.face_data(), &[200]);
    }

    #[test]
    fn test_add_delete_vertex_round_trip() {
        let mut mesh = TopoMesh::new();
        let v0 = mesh.add_vertex();
        let v1 = mesh.add_vertex();
        let v2 = mesh.add_vertex();
        assert!(mesh.add_face(&[v0, v1, v2]).is_valid());

        let snapshot = mesh.clone();
        let extra = mesh.add_vertex();
        mesh.delete_vertex(extra);
        mesh.collect_garbage();
        assert_eq!(mesh, snapshot);
    }

    #[test]
    fn test_compaction_of_emptied_mesh() {
        let mut mesh = TopoMesh::with_policy(MeshPolicy::Manifold);
        let v: Vec<_> = (0..3).map(|_| mesh.add_vertex()).collect();
        let f = mesh.add_face(&[v[0], v[1], v[2]]);
        assert!(f.is_valid());

        mesh.delete_face(f);
        mesh.collect_garbage();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_data().len(), 0);
        assert_eq!(mesh.edge_data().len(), 0);
    }

    #[test]
    fn test_indices_shift_stably() {
        let mut mesh = TopoMesh::new();
        let v: Vec<_> = (0..6).map(|_| mesh.add_vertex()).collect();
        // Two disjoint triangles; the second one sits behind the first in
        // every element sequence.
        let f0 = mesh.add_face(&[v[0], v[1], v[2]]);
        let f1 = mesh.add_face(&[v[3], v[4], v[5]]);
        assert!(f0.is_valid() && f1.is_valid());

        // Deleting the first triangle's vertex removes that whole
        // component.
        mesh.delete_vertex(v[0]);
        mesh.collect_garbage();

        // The surviving triangle slid to the front, in order.
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_edges(), 3);
        assert_eq!(mesh.num_faces(), 1);
        let verts: Vec<_> = mesh.face_vertices(mesh.face_ids().next().unwrap()).collect();
        assert!(verts.contains(&VertexId::new(0)));
        assert!(verts.contains(&VertexId::new(1)));
        assert!(verts.contains(&VertexId::new(2)));
        mesh.validate().unwrap();
    }
}
