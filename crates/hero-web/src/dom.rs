use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector`, filtered to `HtmlElement`.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

/// First child of `root` matching `selector`, as an `HtmlElement`.
pub fn query_child(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

/// Write a style property, ignoring failure so one bad element cannot take
/// down the whole render pass.
#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}
