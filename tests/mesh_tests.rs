// Host-side tests for procedural mesh generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/render/mesh.rs");
}

use glam::Vec3;
use mesh::*;

#[test]
fn sphere_sizes() {
    let m = uv_sphere(48, 32);
    assert_eq!(m.vertices.len(), 49 * 33);
    assert_eq!(m.indices.len(), 48 * 32 * 6);
    assert!(m.indices.iter().all(|&i| (i as usize) < m.vertices.len()));
}

#[test]
fn sphere_is_unit_with_outward_normals() {
    let m = uv_sphere(16, 8);
    for v in &m.vertices {
        let p = Vec3::from(v.position);
        assert!((p.length() - 1.0).abs() < 1e-5);
        assert_eq!(v.position, v.normal);
        assert!((0.0..=1.0).contains(&v.uv[0]) && (0.0..=1.0).contains(&v.uv[1]));
    }
}

#[test]
fn sphere_triangles_face_outward() {
    let m = uv_sphere(24, 12);
    for tri in m.indices.chunks(3) {
        let a = Vec3::from(m.vertices[tri[0] as usize].position);
        let b = Vec3::from(m.vertices[tri[1] as usize].position);
        let c = Vec3::from(m.vertices[tri[2] as usize].position);
        let n = (b - a).cross(c - a);
        // degenerate pole triangles have no facing
        if n.length() < 1e-6 {
            continue;
        }
        let centroid = (a + b + c) / 3.0;
        assert!(n.dot(centroid) > 0.0);
    }
}

#[test]
fn tiny_resolutions_are_raised() {
    let m = uv_sphere(1, 1);
    assert_eq!(m.vertices.len(), 4 * 3);
    assert_eq!(m.indices.len(), 3 * 2 * 6);
}

#[test]
fn ring_is_closed_line_list() {
    let ring = ring_line_list(8.0, 64);
    assert_eq!(ring.len(), 128);
    for pair in ring.chunks(2) {
        assert!((pair[0].length() - 8.0).abs() < 1e-4);
        assert_eq!(pair[0].y, 0.0);
    }
    assert!(ring[ring.len() - 1].distance(ring[0]) < 1e-4);
}
