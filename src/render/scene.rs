use super::helpers;
use super::mesh::{self, MeshVertex};
use super::targets::HDR_FORMAT;
use crate::constants::*;
use crate::core::scene::{BodyInstance, GlowShell};
use crate::core::starfield::StarPoint;
use fnv::FnvHashMap;
use glam::{Mat4, Vec3};
use smallvec::SmallVec;
use wgpu::util::DeviceExt;

const MAX_BODIES: usize = 96;
const MAX_GLOWS: usize = 32;
const MAX_LINE_VERTICES: usize = ORBIT_RING_SEGMENTS as usize * 2 * 4;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) eye_time: [f32; 4],
    pub(crate) light_ambient: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct BodyRaw {
    center_radius: [f32; 4],
    color_emissive: [f32; 4],
    spin_flags: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct GlowRaw {
    center_radius: [f32; 4],
    color_opacity: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct LineVertex {
    position: [f32; 4],
    color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct StarRaw {
    position_brightness: [f32; 4],
    phase_speed: [f32; 4],
}

/// Per-frame inputs for the scene pass.
pub(crate) struct SceneFrame<'f> {
    pub(crate) view_proj: Mat4,
    pub(crate) eye: Vec3,
    pub(crate) elapsed: f32,
    pub(crate) bodies: &'f [BodyInstance],
    pub(crate) glows: &'f [GlowShell],
    pub(crate) orbit_rings: &'f [f32],
}

/// Instance range `start..end` drawn with one texture (or the fallback).
type Batch = (Option<&'static str>, u32, u32);

struct PointCloud {
    buffer: wgpu::Buffer,
    count: u32,
}

pub(crate) struct ScenePass {
    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    texture_bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    fallback_bg: wgpu::BindGroup,
    textures: FnvHashMap<&'static str, wgpu::BindGroup>,

    body_pipeline: wgpu::RenderPipeline,
    glow_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    star_pipeline: wgpu::RenderPipeline,

    sphere_vertices: wgpu::Buffer,
    sphere_indices: wgpu::Buffer,
    sphere_index_count: u32,
    body_instances: wgpu::Buffer,
    glow_instances: wgpu::Buffer,
    line_vertices: wgpu::Buffer,
    stars: Option<PointCloud>,
    sparkles: Option<PointCloud>,
}

const MESH_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];
const BODY_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![3 => Float32x4, 4 => Float32x4, 5 => Float32x4];
const GLOW_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![3 => Float32x4, 4 => Float32x4];
const LINE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];
const STAR_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];

fn mesh_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &MESH_ATTRS,
    }
}

fn instance_layout<T>(
    attributes: &'static [wgpu::VertexAttribute],
) -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<T>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes,
    }
}

fn vertex_layout<T>(
    attributes: &'static [wgpu::VertexAttribute],
) -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<T>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    }
}

const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::Zero,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

struct PipelineSpec<'a> {
    label: &'a str,
    vs: &'a str,
    fs: &'a str,
    buffers: &'a [wgpu::VertexBufferLayout<'a>],
    topology: wgpu::PrimitiveTopology,
    cull: Option<wgpu::Face>,
    depth_write: bool,
    blend: Option<wgpu::BlendState>,
}

fn make_scene_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    spec: PipelineSpec<'_>,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(spec.label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(spec.vs),
            buffers: spec.buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: spec.topology,
            cull_mode: spec.cull,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: helpers::DEPTH_FORMAT,
            depth_write_enabled: spec.depth_write,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(spec.fs),
            targets: &[Some(wgpu::ColorTargetState {
                format: HDR_FORMAT,
                blend: spec.blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

fn instance_buffer(device: &wgpu::Device, label: &str, size: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: size as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn texture_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    label: &str,
    view: &wgpu::TextureView,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

fn point_cloud(
    device: &wgpu::Device,
    label: &str,
    points: &[StarPoint],
    follow: f32,
) -> Option<PointCloud> {
    if points.is_empty() {
        return None;
    }
    let raws: Vec<StarRaw> = points
        .iter()
        .map(|p| StarRaw {
            position_brightness: [p.position.x, p.position.y, p.position.z, p.brightness],
            phase_speed: [p.phase, 1.0 + p.phase * 0.25, follow, 0.0],
        })
        .collect();
    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&raws),
        usage: wgpu::BufferUsages::VERTEX,
    });
    Some(PointCloud {
        buffer,
        count: raws.len() as u32,
    })
}

impl ScenePass {
    pub(crate) fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("body_texture_bgl"),
            entries: &helpers::texture_sampler_entries(0),
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("body_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let (_white, white_view) =
            helpers::create_rgba_texture(device, queue, "fallback_white", 1, 1, &[255; 4]);
        let fallback_bg =
            texture_bind_group(device, &texture_bgl, &sampler, "fallback_bg", &white_view);

        let pl_textured = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_body"),
            bind_group_layouts: &[&globals_bgl, &texture_bgl],
            push_constant_ranges: &[],
        });
        let pl_plain = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_plain"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });

        let body_pipeline = make_scene_pipeline(
            device,
            &pl_textured,
            &shader,
            PipelineSpec {
                label: "body_pipeline",
                vs: "vs_body",
                fs: "fs_body",
                buffers: &[mesh_layout(), instance_layout::<BodyRaw>(&BODY_ATTRS)],
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull: Some(wgpu::Face::Back),
                depth_write: true,
                blend: None,
            },
        );
        let glow_pipeline = make_scene_pipeline(
            device,
            &pl_plain,
            &shader,
            PipelineSpec {
                label: "glow_pipeline",
                vs: "vs_glow",
                fs: "fs_glow",
                buffers: &[mesh_layout(), instance_layout::<GlowRaw>(&GLOW_ATTRS)],
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull: Some(wgpu::Face::Front),
                depth_write: false,
                blend: Some(ADDITIVE),
            },
        );
        let line_pipeline = make_scene_pipeline(
            device,
            &pl_plain,
            &shader,
            PipelineSpec {
                label: "line_pipeline",
                vs: "vs_line",
                fs: "fs_line",
                buffers: &[vertex_layout::<LineVertex>(&LINE_ATTRS)],
                topology: wgpu::PrimitiveTopology::LineList,
                cull: None,
                depth_write: false,
                blend: Some(ADDITIVE),
            },
        );
        let star_pipeline = make_scene_pipeline(
            device,
            &pl_plain,
            &shader,
            PipelineSpec {
                label: "star_pipeline",
                vs: "vs_star",
                fs: "fs_star",
                buffers: &[vertex_layout::<StarRaw>(&STAR_ATTRS)],
                topology: wgpu::PrimitiveTopology::PointList,
                cull: None,
                depth_write: false,
                blend: Some(ADDITIVE),
            },
        );

        let sphere = mesh::uv_sphere(SPHERE_SEGMENTS, SPHERE_RINGS);
        let sphere_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_vertices"),
            contents: bytemuck::cast_slice(&sphere.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let sphere_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_indices"),
            contents: bytemuck::cast_slice(&sphere.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            globals_buffer,
            globals_bg,
            texture_bgl,
            sampler,
            fallback_bg,
            textures: FnvHashMap::default(),
            body_pipeline,
            glow_pipeline,
            line_pipeline,
            star_pipeline,
            sphere_vertices,
            sphere_indices,
            sphere_index_count: sphere.indices.len() as u32,
            body_instances: instance_buffer(
                device,
                "body_instances",
                MAX_BODIES * std::mem::size_of::<BodyRaw>(),
            ),
            glow_instances: instance_buffer(
                device,
                "glow_instances",
                MAX_GLOWS * std::mem::size_of::<GlowRaw>(),
            ),
            line_vertices: instance_buffer(
                device,
                "line_vertices",
                MAX_LINE_VERTICES * std::mem::size_of::<LineVertex>(),
            ),
            stars: None,
            sparkles: None,
        }
    }

    /// Swap a body's fallback colour for its decoded texture.
    pub(crate) fn add_texture(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &'static str,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) {
        let (_tex, view) = helpers::create_rgba_texture(device, queue, path, width, height, rgba);
        let bg = texture_bind_group(device, &self.texture_bgl, &self.sampler, path, &view);
        self.textures.insert(path, bg);
    }

    /// Rebuild the star and sparkle point clouds (quality tier changes).
    pub(crate) fn set_point_clouds(
        &mut self,
        device: &wgpu::Device,
        stars: &[StarPoint],
        sparkles: &[StarPoint],
    ) {
        self.stars = point_cloud(device, "stars", stars, 1.0);
        self.sparkles = point_cloud(device, "sparkles", sparkles, 0.0);
    }

    fn upload(
        &self,
        queue: &wgpu::Queue,
        frame: &SceneFrame<'_>,
    ) -> (SmallVec<[Batch; 8]>, u32, u32) {
        let globals = Globals {
            view_proj: frame.view_proj.to_cols_array_2d(),
            eye_time: [frame.eye.x, frame.eye.y, frame.eye.z, frame.elapsed],
            light_ambient: [0.0, 0.0, 0.0, AMBIENT_LIGHT],
        };
        queue.write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        // Bodies grouped by the texture they can actually use right now.
        let key = |b: &BodyInstance| b.texture.filter(|t| self.textures.contains_key(t));
        let mut keys: SmallVec<[Option<&'static str>; 8]> = SmallVec::new();
        keys.push(None);
        for b in frame.bodies {
            let k = key(b);
            if !keys.contains(&k) {
                keys.push(k);
            }
        }
        let mut raws: Vec<BodyRaw> = Vec::with_capacity(frame.bodies.len());
        let mut batches: SmallVec<[Batch; 8]> = SmallVec::new();
        for k in keys {
            let start = raws.len() as u32;
            for b in frame.bodies.iter().filter(|b| key(b) == k) {
                if raws.len() >= MAX_BODIES {
                    break;
                }
                raws.push(BodyRaw {
                    center_radius: [b.center.x, b.center.y, b.center.z, b.radius],
                    color_emissive: [b.color[0], b.color[1], b.color[2], b.emissive],
                    spin_flags: [b.spin, if k.is_some() { 1.0 } else { 0.0 }, 0.0, 0.0],
                });
            }
            let end = raws.len() as u32;
            if end > start {
                batches.push((k, start, end));
            }
        }
        queue.write_buffer(&self.body_instances, 0, bytemuck::cast_slice(&raws));

        let glows: Vec<GlowRaw> = frame
            .glows
            .iter()
            .take(MAX_GLOWS)
            .map(|g| GlowRaw {
                center_radius: [g.center.x, g.center.y, g.center.z, g.radius],
                color_opacity: [g.color[0], g.color[1], g.color[2], g.opacity],
            })
            .collect();
        queue.write_buffer(&self.glow_instances, 0, bytemuck::cast_slice(&glows));

        let lines: Vec<LineVertex> = frame
            .orbit_rings
            .iter()
            .flat_map(|r| mesh::ring_line_list(*r, ORBIT_RING_SEGMENTS))
            .take(MAX_LINE_VERTICES)
            .map(|p| LineVertex {
                position: [p.x, p.y, p.z, 1.0],
                color: ORBIT_RING_COLOR,
            })
            .collect();
        queue.write_buffer(&self.line_vertices, 0, bytemuck::cast_slice(&lines));

        (batches, glows.len() as u32, lines.len() as u32)
    }

    pub(crate) fn draw(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        color: &wgpu::TextureView,
        depth: &wgpu::TextureView,
        clear: wgpu::Color,
        frame: &SceneFrame<'_>,
    ) {
        let (batches, glow_count, line_count) = self.upload(queue, frame);

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_bind_group(0, &self.globals_bg, &[]);

        // Stars first: they never write depth.
        rpass.set_pipeline(&self.star_pipeline);
        for cloud in [&self.stars, &self.sparkles].into_iter().flatten() {
            rpass.set_vertex_buffer(0, cloud.buffer.slice(..));
            rpass.draw(0..cloud.count, 0..1);
        }

        rpass.set_pipeline(&self.body_pipeline);
        rpass.set_vertex_buffer(0, self.sphere_vertices.slice(..));
        rpass.set_vertex_buffer(1, self.body_instances.slice(..));
        rpass.set_index_buffer(self.sphere_indices.slice(..), wgpu::IndexFormat::Uint32);
        for (key, start, end) in batches {
            let bg = key
                .and_then(|k| self.textures.get(k))
                .unwrap_or(&self.fallback_bg);
            rpass.set_bind_group(1, bg, &[]);
            rpass.draw_indexed(0..self.sphere_index_count, 0, start..end);
        }

        if line_count > 0 {
            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_vertex_buffer(0, self.line_vertices.slice(..));
            rpass.draw(0..line_count, 0..1);
        }

        if glow_count > 0 {
            rpass.set_pipeline(&self.glow_pipeline);
            rpass.set_vertex_buffer(0, self.sphere_vertices.slice(..));
            rpass.set_vertex_buffer(1, self.glow_instances.slice(..));
            rpass.set_index_buffer(self.sphere_indices.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.sphere_index_count, 0, 0..glow_count);
        }
    }
}
