#![cfg(target_arch = "wasm32")]
use crate::core::bodies;
use crate::core::contact::ContactFlow;
use crate::core::{QualityMonitor, QualitySettings, Scene, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

// Keep the canvas backing store at CSS size * devicePixelRatio
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orrery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    let viewport = Viewport::from_width(dom::window_css_width());
    let quality = QualitySettings::initial(viewport);
    log::info!("[init] viewport={:?} quality={:?}", viewport, quality.tier);
    let scene = Rc::new(RefCell::new(Scene::new(viewport, quality)));
    let contact = Rc::new(RefCell::new(ContactFlow::new()));

    // Textures stream in while the GPU comes up; bodies render with flat colour until then
    let assets = Rc::new(RefCell::new(assets::AssetStore::new(
        bodies::texture_paths().len(),
    )));
    assets::spawn_preload(&assets);

    let mut gpu = frame::init_gpu(&canvas).await;
    if let Some(g) = &mut gpu {
        frame::apply_quality_to_gpu(g, quality);
    }

    let wiring = events::EventWiring {
        document: document.clone(),
        canvas: canvas.clone(),
        scene: scene.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
        contact: contact.clone(),
    };
    events::wire_input_handlers(&wiring);
    events::wire_global_keydown(&wiring);
    events::wire_contact_form(&wiring);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document,
        canvas,
        scene,
        contact,
        assets,
        quality: QualityMonitor::new(quality),
        gpu,
        last_instant: Instant::now(),
        last_overlay: None,
        loading_hidden: false,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
