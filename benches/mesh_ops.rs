//! Benchmarks for mesh operations.

use criterion::{criterion_group, criterion_main, Criterion};
use hedra::prelude::*;
use nalgebra::Point3;

fn grid_input(n: usize) -> (Vec<Point3<f64>>, Vec<[usize; 3]>) {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(n * n * 2);

    // Create grid vertices
    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }

    // Create triangles
    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            faces.push([v00, v10, v11]);
            faces.push([v00, v11, v01]);
        }
    }

    (vertices, faces)
}

fn create_grid_mesh(n: usize) -> SurfaceMesh {
    let (vertices, faces) = grid_input(n);
    build_from_triangles(&vertices, &faces).unwrap()
}

fn bench_mesh_construction(c: &mut Criterion) {
    let (vertices, faces) = grid_input(10);

    c.bench_function("build_grid_10x10", |b| {
        b.iter(|| {
            let mesh: SurfaceMesh = build_from_triangles(&vertices, &faces).unwrap();
            mesh
        });
    });
}

fn bench_mesh_traversal(c: &mut Criterion) {
    let mesh = create_grid_mesh(50);

    c.bench_function("vertex_neighbors_all", |b| {
        b.iter(|| {
            let mut count = 0;
            for v in mesh.vertex_ids() {
                count += mesh.vertex_neighbors(v).count();
            }
            count
        });
    });

    c.bench_function("face_halfedges_all", |b| {
        b.iter(|| {
            let mut count = 0;
            for f in mesh.face_ids() {
                count += mesh.face_halfedges(f).count();
            }
            count
        });
    });
}

fn bench_delete_and_compact(c: &mut Criterion) {
    let mesh = create_grid_mesh(20);

    c.bench_function("delete_quarter_then_compact_20x20", |b| {
        b.iter(|| {
            let mut scratch = mesh.clone();
            for f in scratch.face_ids().step_by(4).collect::<Vec<_>>() {
                if !scratch.is_deleted_face(f) {
                    scratch.delete_face(f);
                }
            }
            scratch.collect_garbage();
            scratch
        });
    });
}

criterion_group!(
    benches,
    bench_mesh_construction,
    bench_mesh_traversal,
    bench_delete_and_compact
);
criterion_main!(benches);
