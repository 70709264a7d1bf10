use super::EventWiring;
use crate::core::contact::ContactField;
use crate::core::SceneRequest;
use crate::dom;
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

fn field_value(target: &web::EventTarget) -> Option<String> {
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<web::HtmlTextAreaElement>()
        .map(|area| area.value())
}

fn set_field_value(document: &web::Document, id: &str, value: &str) {
    let Some(el) = document.get_element_by_id(id) else {
        return;
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

/// Blank every contact input after a completed transmission.
pub fn clear_inputs(document: &web::Document) {
    for field in ContactField::ALL {
        set_field_value(document, field.element_id(), "");
    }
}

/// Contact inputs, the simulated submit, and the panel/overlay buttons.
pub fn wire_contact_form(w: &EventWiring) {
    for field in ContactField::ALL {
        let Some(el) = w.document.get_element_by_id(field.element_id()) else {
            continue;
        };
        let contact = w.contact.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            if let Some(value) = ev.target().as_ref().and_then(field_value) {
                contact.borrow_mut().set_field(field, &value);
            }
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Some(form) = w.document.get_element_by_id("contact-form") {
        let contact = w.contact.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            if !contact.borrow_mut().submit() {
                log::debug!("[contact] submit ignored while transmitting");
            }
        }) as Box<dyn FnMut(_)>);
        _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let doc = w.document.clone();
    dom::add_click_listener(&w.document, "contact-toggle", move || {
        overlay::toggle_contact(&doc);
    });
    let doc = w.document.clone();
    dom::add_click_listener(&w.document, "contact-close", move || {
        overlay::hide_contact(&doc);
    });

    for id in ["overlay-close", "overlay-backdrop"] {
        let scene = w.scene.clone();
        dom::add_click_listener(&w.document, id, move || {
            scene.borrow_mut().request(SceneRequest::Close);
        });
    }
    overlay::render_channels(&w.document);
}
