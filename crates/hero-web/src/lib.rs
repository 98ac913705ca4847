#![cfg(target_arch = "wasm32")]
//! WASM front-end: wires scroll/resize events to the hero engine and applies
//! each computed frame to the page's rendering targets.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

use hero_core::{EngineConfig, HeroEngine};

mod dom;
mod events;
mod frame;
mod targets;

/// Everything that must be torn down to stop the engine.
pub struct HeroRuntime {
    raf: frame::RafLoop,
    bindings: Vec<events::EventBinding>,
}

impl HeroRuntime {
    /// Cancel the pending animation frame and detach the event listeners.
    pub fn stop(self) {
        self.raf.stop();
        for binding in &self.bindings {
            binding.unbind();
        }
        log::info!("hero engine stopped");
    }
}

thread_local! {
    static RUNTIME: RefCell<Option<HeroRuntime>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

/// Tear the hero down from the hosting page (e.g. before removing the view).
#[wasm_bindgen]
pub fn hero_stop() {
    RUNTIME.with(|slot| {
        if let Some(runtime) = slot.borrow_mut().take() {
            runtime.stop();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Pages without the hero markup simply get no animation.
    let Some(container) = document.get_element_by_id("hero-scroll-container") else {
        log::info!("no #hero-scroll-container, hero engine not started");
        return Ok(());
    };
    if document.get_element_by_id("hero-sticky-view").is_none() {
        log::info!("no #hero-sticky-view, hero engine not started");
        return Ok(());
    }

    let resolved = targets::Targets::resolve(&document);
    let config = EngineConfig {
        float_count: resolved.floats.len(),
        ..EngineConfig::default()
    };

    let engine = HeroEngine::new(config, dom::viewport_size(&window))?;
    let engine = Rc::new(RefCell::new(engine));

    // Prime the target from the load-time scroll position.
    engine
        .borrow_mut()
        .on_scroll(events::read_geometry(&container, &window));

    let bindings = vec![
        events::wire_scroll(&window, container.clone(), engine.clone()),
        events::wire_resize(&window, container, engine.clone()),
    ];

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        targets: resolved,
    }));
    let raf = frame::start_loop(ctx);

    RUNTIME.with(|slot| *slot.borrow_mut() = Some(HeroRuntime { raf, bindings }));
    Ok(())
}
