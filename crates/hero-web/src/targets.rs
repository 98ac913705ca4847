//! Rendering targets: resolved once at init, styled once per frame.
//!
//! The engine emits a declarative [`HeroFrame`]; this adapter is the only
//! place that knows the DOM/CSS structure behind it. Any missing element is
//! skipped rather than failing the render pass.

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use hero_core::{parallax, HeroFrame};

pub struct SceneTargets {
    pub root: web::HtmlElement,
    pub bg: Option<web::HtmlElement>,
    pub content: Option<web::HtmlElement>,
}

pub struct Targets {
    pub progress_fill: Option<web::HtmlElement>,
    pub scenes: Vec<SceneTargets>,
    pub floats: Vec<web::HtmlElement>,
    pub gallery_images: Vec<web::HtmlElement>,
}

impl Targets {
    pub fn resolve(document: &web::Document) -> Self {
        let scenes = dom::query_all(document, ".hero-scene")
            .into_iter()
            .map(|root| SceneTargets {
                bg: dom::query_child(&root, ".scene-bg"),
                content: dom::query_child(&root, ".scene-content"),
                root,
            })
            .collect::<Vec<_>>();
        let targets = Self {
            progress_fill: document
                .query_selector(".progress-fill")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok()),
            scenes,
            floats: dom::query_all(document, ".float"),
            gallery_images: dom::query_all(document, ".gallery-item img"),
        };
        log::info!(
            "[targets] scenes={} floats={} gallery={}",
            targets.scenes.len(),
            targets.floats.len(),
            targets.gallery_images.len()
        );
        targets
    }

    /// Apply one frame to the resolved elements.
    pub fn apply(&self, frame: &HeroFrame) {
        if let Some(bar) = &self.progress_fill {
            dom::set_style(bar, "width", &format!("{}%", frame.progress_fill * 100.0));
        }

        for (scene, params) in self.scenes.iter().zip(&frame.scenes) {
            dom::set_style(&scene.root, "opacity", &params.scene_opacity.to_string());
            if let Some(bg) = &scene.bg {
                dom::set_style(bg, "transform", &format!("scale({})", params.scale));
            }
            if let Some(content) = &scene.content {
                dom::set_style(content, "opacity", &params.text_opacity.to_string());
                dom::set_style(
                    content,
                    "transform",
                    &format!("translateY({}px)", params.slide_px),
                );
            }
        }

        for (el, f) in self.floats.iter().zip(&frame.floats) {
            dom::set_style(
                el,
                "transform",
                &format!(
                    "translate({}px, {}px) rotate({}deg)",
                    f.offset_px.x, f.offset_px.y, f.rotation_deg
                ),
            );
            dom::set_style(el, "opacity", &f.opacity.to_string());
        }
    }

    /// Gallery parallax reads each image container's current rect, so it
    /// runs inside the frame tick rather than against cached geometry.
    pub fn apply_parallax(&self, viewport_height: f32) {
        for (i, img) in self.gallery_images.iter().enumerate() {
            let Some(container) = img.parent_element() else {
                continue;
            };
            let rect = container.get_bounding_client_rect();
            let shift = parallax::shift_for_item(
                i,
                rect.top() as f32,
                rect.height() as f32,
                viewport_height,
            );
            if let Some(s) = shift {
                dom::set_style(
                    img,
                    "transform",
                    &format!("translateY({}px) scale({})", s.shift_y_px, s.scale),
                );
            }
        }
    }
}
