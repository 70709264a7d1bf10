use super::EventWiring;
use crate::camera;
use crate::constants::CLICK_MAX_TRAVEL_PX;
use crate::core::{Pickable, SceneEffect};
use crate::dom;
use crate::input;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(w: &EventWiring) {
    wire_pointermove(w);
    wire_pointerdown(w);
    wire_pointerup(w);
    wire_pointerleave(w);
    wire_wheel(w);
    wire_contextmenu(w);
}

/// Ray-pick the scene at a canvas backing-store position.
fn pick_at(w: &EventWiring, px: Vec2) -> Option<Pickable> {
    let width = w.canvas.width() as f32;
    let height = w.canvas.height() as f32;
    let scene = w.scene.borrow();
    let pose = scene.rig().pose();
    let view_proj = pose.view_proj(width / height.max(1.0));
    let (ro, rd) = camera::screen_to_world_ray(view_proj, pose.eye, width, height, px.x, px.y);
    input::pick_nearest(&scene.pick_spheres(), ro, rd)
}

fn set_cursor(canvas: &web::HtmlCanvasElement, pointer: bool) {
    _ = canvas
        .style()
        .set_property("cursor", if pointer { "pointer" } else { "grab" });
}

fn wire_pointermove(w: &EventWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let px = input::pointer_canvas_px(&ev, &w.canvas);
        let css = input::pointer_css_px(&ev, &w.canvas);
        let dragging = w.drag_state.borrow().active;
        if dragging {
            let (delta, pan) = {
                let mut ds = w.drag_state.borrow_mut();
                (ds.advance(css), ds.pan)
            };
            let css_height = w.canvas.client_height() as f32;
            let mut scene = w.scene.borrow_mut();
            let fov = scene.rig().pose().fov_deg;
            let controls = scene.controls_mut();
            if pan {
                controls.pan(delta.x, delta.y, css_height, fov);
            } else {
                controls.rotate(delta.x, delta.y, css_height);
            }
            return;
        }

        let hit = pick_at(&w, px);
        w.scene.borrow_mut().set_hover(hit);
        set_cursor(&w.canvas, hit.is_some());
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &EventWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let css = input::pointer_css_px(&ev, &w.canvas);
        // right button or shift pans, anything else orbits
        let pan = ev.button() == 2 || ev.shift_key();
        w.drag_state.borrow_mut().begin(css, pan);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &EventWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let was_click = w.drag_state.borrow_mut().finish(CLICK_MAX_TRAVEL_PX);
        if !was_click {
            return;
        }
        // Picked at release so taps without a preceding move still land.
        let px = input::pointer_canvas_px(&ev, &w.canvas);
        let Some(target) = pick_at(&w, px) else {
            return;
        };
        log::info!("[click] {:?}", target);
        let effect = w.scene.borrow_mut().click(target);
        if let Some(SceneEffect::OpenUrl(url)) = effect {
            dom::open_external(url);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerleave(w: &EventWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        if !w.drag_state.borrow().active {
            w.scene.borrow_mut().set_hover(None);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &EventWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.scene.borrow_mut().controls_mut().zoom(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_contextmenu(w: &EventWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}
