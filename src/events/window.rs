use crate::dom;
use crate::input;
use crate::scene::{ShowcaseScene, SnowScene};
use folio_core::PointerRange;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn add_window_listener<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Re-measure both canvases and push the new viewport into both scenes.
pub fn wire_resize(
    snow_canvas: web::HtmlCanvasElement,
    showcase_canvas: web::HtmlCanvasElement,
    snow: Rc<RefCell<SnowScene>>,
    showcase: Rc<RefCell<ShowcaseScene>>,
) {
    add_window_listener("resize", move |_: web::Event| {
        dom::sync_canvas_backing_size(&snow_canvas);
        dom::sync_canvas_backing_size(&showcase_canvas);
        let Some(viewport) = dom::window_viewport() else {
            return;
        };
        snow.borrow_mut().on_resize(viewport);
        showcase.borrow_mut().on_resize(viewport);
        log::debug!(
            "[resize] {}x{} compact={}",
            viewport.width,
            viewport.height,
            viewport.is_compact()
        );
    });
}

pub fn wire_scroll(showcase: Rc<RefCell<ShowcaseScene>>) {
    add_window_listener("scroll", move |_: web::Event| {
        if let Some(scroll_y) = web::window().and_then(|w| w.scroll_y().ok()) {
            showcase.borrow_mut().on_scroll(scroll_y as f32);
        }
    });
}

/// Cursor position drives the showcase camera parallax.
pub fn wire_mousemove(showcase: Rc<RefCell<ShowcaseScene>>) {
    add_window_listener("mousemove", move |ev: web::MouseEvent| {
        let mut scene = showcase.borrow_mut();
        let pointer = input::pointer_from_mouse(&ev, scene.viewport(), PointerRange::Half);
        scene.set_pointer(pointer);
    });
}
