use super::keymap::{is_text_entry_tag, key_action, KeyAction};
use super::EventWiring;
use crate::core::SceneRequest;
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

fn typing_in_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| is_text_entry_tag(&el.tag_name()))
        .unwrap_or(false)
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &EventWiring) {
    if typing_in_field(ev) {
        // Escape still leaves the form
        if ev.key() == "Escape" {
            overlay::hide_contact(&w.document);
        }
        return;
    }
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::CloseFocus => {
            w.scene.borrow_mut().request(SceneRequest::Close);
            if w.document.fullscreen_element().is_some() {
                w.document.exit_fullscreen();
            }
        }
        KeyAction::ToggleFullscreen => {
            if w.document.fullscreen_element().is_some() {
                w.document.exit_fullscreen();
            } else {
                _ = w.canvas.request_fullscreen();
            }
            ev.prevent_default();
        }
        KeyAction::ToggleHint => {
            overlay::toggle_hint(&w.document);
            ev.prevent_default();
        }
        KeyAction::ToggleContact => {
            overlay::toggle_contact(&w.document);
            ev.prevent_default();
        }
    }
    log::debug!("[keys] {:?}", action);
}

pub fn wire_global_keydown(w: &EventWiring) {
    if let Some(window) = web::window() {
        let w = w.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
