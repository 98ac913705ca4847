//! Scroll and resize wiring. Handlers are producers only: they read geometry
//! and write the engine's target progress and mode, never rendered output.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use hero_core::{HeroEngine, ScrollGeometry};

/// A listener kept alive until the engine is stopped; `unbind` detaches it
/// from the target so the runtime can tear down cleanly instead of leaking
/// forgotten closures.
pub struct EventBinding {
    target: web::EventTarget,
    name: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl EventBinding {
    pub fn bind(
        target: &web::EventTarget,
        name: &'static str,
        handler: impl FnMut() + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            name,
            closure,
        }
    }

    pub fn unbind(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.name, self.closure.as_ref().unchecked_ref());
    }
}

pub fn read_geometry(container: &web::Element, window: &web::Window) -> ScrollGeometry {
    let rect = container.get_bounding_client_rect();
    ScrollGeometry {
        container_top: rect.top() as f32,
        container_height: rect.height() as f32,
        viewport_height: dom::viewport_size(window).y,
    }
}

pub fn wire_scroll(
    window: &web::Window,
    container: web::Element,
    engine: Rc<RefCell<HeroEngine>>,
) -> EventBinding {
    let win = window.clone();
    EventBinding::bind(window.as_ref(), "scroll", move || {
        let geometry = read_geometry(&container, &win);
        engine.borrow_mut().on_scroll(geometry);
    })
}

pub fn wire_resize(
    window: &web::Window,
    container: web::Element,
    engine: Rc<RefCell<HeroEngine>>,
) -> EventBinding {
    let win = window.clone();
    EventBinding::bind(window.as_ref(), "resize", move || {
        let geometry = read_geometry(&container, &win);
        let viewport = dom::viewport_size(&win);
        engine.borrow_mut().on_resize(viewport, geometry);
    })
}
