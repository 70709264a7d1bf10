pub mod form;
pub mod keyboard;
pub mod keymap;
pub mod pointer;

use crate::core::contact::ContactFlow;
use crate::core::Scene;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use form::wire_contact_form;
pub use keyboard::wire_global_keydown;
pub use pointer::wire_input_handlers;

/// Shared handles every DOM handler closes over.
#[derive(Clone)]
pub struct EventWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub drag_state: Rc<RefCell<input::DragState>>,
    pub contact: Rc<RefCell<ContactFlow>>,
}
