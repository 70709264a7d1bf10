use crate::assets::AssetStore;
use crate::camera;
use crate::constants::{HOVER_LABEL_OFFSET_PX, MAX_FRAME_DT_SEC, SPARKLE_SEED, STAR_SEED};
use crate::core::contact::{ContactFlow, TransmissionPhase};
use crate::core::loading::LoadPhase;
use crate::core::{
    starfield, OverlayView, QualityMonitor, QualitySettings, Scene, SceneSnapshot, Viewport,
};
use crate::dom;
use crate::events::form;
use crate::overlay;
use crate::render;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub contact: Rc<RefCell<ContactFlow>>,
    pub assets: Rc<RefCell<AssetStore>>,
    pub quality: QualityMonitor,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub last_overlay: Option<OverlayView>,
    pub loading_hidden: bool,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let raw_dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let dt_sec = raw_dt.clamp(0.0, MAX_FRAME_DT_SEC);

        self.scene
            .borrow_mut()
            .set_viewport(Viewport::from_width(dom::window_css_width()));
        if let Some(settings) = self.quality.record_frame(raw_dt) {
            self.apply_quality(settings);
        }

        let snapshot = self.scene.borrow_mut().step(dt_sec);

        self.update_overlays(&snapshot);
        self.update_contact(dt_sec);
        self.update_loading(dt_sec);

        if let Some(g) = &mut self.gpu {
            for (path, tex) in self.assets.borrow_mut().take_ready() {
                g.upload_texture(path, tex.width, tex.height, &tex.rgba);
            }
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            let aspect = w as f32 / h.max(1) as f32;
            let frame_in = render::SceneFrame {
                view_proj: snapshot.camera.view_proj(aspect),
                eye: snapshot.camera.eye,
                elapsed: snapshot.elapsed,
                bodies: &snapshot.bodies,
                glows: &snapshot.glows,
                orbit_rings: &snapshot.orbit_rings,
            };
            if let Err(e) = g.render(&frame_in) {
                log::warn!("[gpu] render error: {:?}", e);
            }
        }
    }

    fn apply_quality(&mut self, settings: QualitySettings) {
        self.scene.borrow_mut().set_quality(settings);
        if let Some(g) = &mut self.gpu {
            apply_quality_to_gpu(g, settings);
        }
    }

    fn update_overlays(&mut self, snapshot: &SceneSnapshot) {
        if snapshot.overlay != self.last_overlay {
            overlay::render_focus(&self.document, snapshot.overlay.as_ref());
            self.last_overlay = snapshot.overlay;
        }

        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        let view_proj = snapshot.camera.view_proj(w / h.max(1.0));
        // backing store px -> CSS px
        let css_scale = self.canvas.client_width() as f32 / w.max(1.0);
        let placed = snapshot.label.as_ref().and_then(|label| {
            camera::world_to_screen(view_proj, w, h, label.anchor).map(|px| {
                let css = px * css_scale;
                (label, css + Vec2::new(HOVER_LABEL_OFFSET_PX, -HOVER_LABEL_OFFSET_PX))
            })
        });
        overlay::render_hover_label(&self.document, placed);
    }

    fn update_contact(&mut self, dt_sec: f32) {
        let mut flow = self.contact.borrow_mut();
        if flow.tick(dt_sec) || flow.phase() != TransmissionPhase::Idle {
            overlay::render_contact(&self.document, &flow);
            if flow.phase() == TransmissionPhase::Idle {
                form::clear_inputs(&self.document);
            }
        }
    }

    fn update_loading(&mut self, dt_sec: f32) {
        if self.loading_hidden {
            return;
        }
        let mut assets = self.assets.borrow_mut();
        assets.tracker.tick(dt_sec);
        overlay::render_loading(&self.document, &assets.tracker);
        if assets.tracker.phase() == LoadPhase::Done {
            log::info!(
                "[assets] loading finished: {} loaded, {} failed",
                assets.tracker.loaded(),
                assets.tracker.failed()
            );
            overlay::hide_loading(&self.document);
            self.loading_hidden = true;
        }
    }
}

pub fn apply_quality_to_gpu(g: &mut render::GpuState<'_>, settings: QualitySettings) {
    g.set_bloom(settings.bloom);
    let stars = starfield::generate_stars(settings.star_count, STAR_SEED);
    let sparkles = starfield::generate_sparkles(settings.sparkle_count, SPARKLE_SEED);
    g.set_point_clouds(&stars, &sparkles);
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
