//! The requestAnimationFrame loop driving smoother + renderer, with an
//! explicit stop so the perpetual callback can be torn down deterministically.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::targets::Targets;
use hero_core::{HeroEngine, Mode};

pub struct FrameContext {
    pub engine: Rc<RefCell<HeroEngine>>,
    pub targets: Targets,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let frame = self.engine.borrow_mut().tick();
        self.targets.apply(&frame);

        // Gallery parallax rides the same tick, desktop only.
        if self.engine.borrow().mode() == Mode::Desktop {
            if let Some(w) = web::window() {
                self.targets.apply_parallax(dom::viewport_size(&w).y);
            }
        }
    }
}

/// Handle over the running loop. The loop keeps itself alive through the
/// stored closure; call [`RafLoop::stop`] to cancel the pending frame and
/// prevent rescheduling.
pub struct RafLoop {
    active: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RafLoop {
    pub fn stop(&self) {
        self.active.set(false);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }
}

pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) -> RafLoop {
    let active = Rc::new(Cell::new(true));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let active_tick = active.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !active_tick.get() {
            return;
        }
        ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_id_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(Some(id));
        }
    }

    RafLoop {
        active,
        raf_id,
        _tick: tick,
    }
}
