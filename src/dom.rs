use crate::constants::*;
use folio_core::{clamp_pixel_ratio, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to attach a click handler to", element_id);
    }
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

/// Set an element's inline `display`; silently skips non-HTML elements.
pub fn set_display(el: &web::Element, display: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property("display", display);
    }
}

pub fn is_displayed(el: &web::Element) -> bool {
    el.dyn_ref::<web::HtmlElement>()
        .and_then(|h| h.style().get_property_value("display").ok())
        .map(|d| d != "none")
        .unwrap_or(true)
}

/// Current CSS-pixel size of the browser window.
pub fn window_viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width as f32, height as f32))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = clamp_pixel_ratio(w.device_pixel_ratio());
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Create an element with text content, logging instead of failing.
pub fn text_element(document: &web::Document, tag: &str, text: &str) -> Option<web::Element> {
    match document.create_element(tag) {
        Ok(el) => {
            el.set_text_content(Some(text));
            Some(el)
        }
        Err(e) => {
            log::error!("[dom] create <{}> failed: {:?}", tag, e);
            None
        }
    }
}
