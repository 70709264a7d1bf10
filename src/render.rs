use crate::constants::{BLOOM_STRENGTH, BLOOM_THRESHOLD, CLEAR_COLOR};
use crate::core::starfield::StarPoint;
use web_sys as web;

mod helpers;
mod mesh;
mod post;
mod scene;
mod targets;

use post::{PostBindGroups, PostResources, PostUniforms};
pub(crate) use scene::SceneFrame;
use scene::ScenePass;
use targets::RenderTargets;

// ===================== WebGPU state =====================

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: ScenePass,
    targets: RenderTargets,
    post: PostResources,
    post_groups: PostBindGroups,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    bloom: bool,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let targets = RenderTargets::new(&device, width, height);
        let post = post::create_post_resources(&device, format);
        let post_groups = post::create_bind_groups(&device, &post, &targets);
        let scene = ScenePass::new(&device, &queue);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            targets,
            post,
            post_groups,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
            bloom: true,
        })
    }

    pub fn set_bloom(&mut self, enabled: bool) {
        self.bloom = enabled;
    }

    pub fn upload_texture(&mut self, path: &'static str, width: u32, height: u32, rgba: &[u8]) {
        self.scene
            .add_texture(&self.device, &self.queue, path, width, height, rgba);
    }

    pub fn set_point_clouds(&mut self, stars: &[StarPoint], sparkles: &[StarPoint]) {
        log::info!("[gpu] star field: {} stars, {} sparkles", stars.len(), sparkles.len());
        self.scene.set_point_clouds(&self.device, stars, sparkles);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate offscreen render targets and dependent bind groups
            self.targets.recreate(&self.device, width, height);
            self.post_groups = post::create_bind_groups(&self.device, &self.post, &self.targets);
        }
    }

    pub fn render(&mut self, frame_in: &SceneFrame<'_>) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: scene -> HDR
        self.scene.draw(
            &self.queue,
            &mut encoder,
            &self.targets.hdr_view,
            &self.targets.depth_view,
            self.clear_color,
            frame_in,
        );

        let res = self.targets.bloom_size();
        let uniforms = |blur_dir: [f32; 2]| PostUniforms {
            resolution: res,
            time: frame_in.elapsed,
            bloom_enabled: if self.bloom { 1.0 } else { 0.0 },
            blur_dir,
            bloom_strength: BLOOM_STRENGTH,
            threshold: BLOOM_THRESHOLD,
        };
        let u = &self.post.uniforms;

        if self.bloom {
            // Pass 2: bright pass -> bloom_a
            post::write_post_uniforms(&self.queue, &u.bright, uniforms([0.0, 0.0]));
            post::blit(
                &mut encoder,
                "bright_pass",
                &self.targets.bloom_a_view,
                wgpu::Color::BLACK,
                &self.post.bright_pipeline,
                &self.post_groups.bright,
                None,
            );

            // Pass 3: blur horizontal bloom_a -> bloom_b
            post::write_post_uniforms(&self.queue, &u.blur_h, uniforms([1.0, 0.0]));
            post::blit(
                &mut encoder,
                "blur_h",
                &self.targets.bloom_b_view,
                wgpu::Color::BLACK,
                &self.post.blur_pipeline,
                &self.post_groups.blur_h,
                None,
            );

            // Pass 4: blur vertical bloom_b -> bloom_a
            post::write_post_uniforms(&self.queue, &u.blur_v, uniforms([0.0, 1.0]));
            post::blit(
                &mut encoder,
                "blur_v",
                &self.targets.bloom_a_view,
                wgpu::Color::BLACK,
                &self.post.blur_pipeline,
                &self.post_groups.blur_v,
                None,
            );
        } else {
            post::clear(&mut encoder, "bloom_off", &self.targets.bloom_a_view);
        }

        // Pass 5: composite to swapchain
        post::write_post_uniforms(&self.queue, &u.composite, uniforms([0.0, 0.0]));
        post::blit(
            &mut encoder,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.post_groups.composite,
            Some(&self.post_groups.bloom),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
