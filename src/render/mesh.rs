use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

/// Unit UV sphere. The seam column is duplicated so textures wrap cleanly:
/// `(segments + 1) * (rings + 1)` vertices, `segments * rings * 6` indices.
pub fn uv_sphere(segments: u32, rings: u32) -> Mesh {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
    for r in 0..=rings {
        let v = r as f32 / rings as f32;
        let polar = v * PI;
        for s in 0..=segments {
            let u = s as f32 / segments as f32;
            let azimuth = u * TAU;
            let p = Vec3::new(
                polar.sin() * azimuth.cos(),
                polar.cos(),
                polar.sin() * azimuth.sin(),
            );
            vertices.push(MeshVertex {
                position: p.to_array(),
                normal: p.to_array(),
                uv: [1.0 - u, v],
            });
        }
    }
    let stride = segments + 1;
    let mut indices = Vec::with_capacity((segments * rings * 6) as usize);
    for r in 0..rings {
        for s in 0..segments {
            let a = r * stride + s;
            let b = a + stride;
            indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }
    Mesh { vertices, indices }
}

/// Closed circle in the XZ plane as line-list pairs: `2 * segments` points.
pub fn ring_line_list(radius: f32, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    let point = |i: u32| {
        let a = i as f32 / segments as f32 * TAU;
        Vec3::new(a.cos() * radius, 0.0, a.sin() * radius)
    };
    (0..segments).flat_map(|i| [point(i), point(i + 1)]).collect()
}
