use crate::scene::SnowScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drag to orbit, wheel to zoom, on the snow canvas only.
pub fn wire_orbit_controls(snow: Rc<RefCell<SnowScene>>) {
    let canvas = snow.borrow().canvas().clone();
    wire_pointerdown(&canvas, snow.clone());
    wire_pointermove(&canvas, snow.clone());
    wire_pointerup(&canvas, snow.clone());
    wire_wheel(&canvas, snow);
}

fn add_canvas_listener<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, snow: Rc<RefCell<SnowScene>>) {
    let target = canvas.clone();
    add_canvas_listener(canvas, "pointerdown", move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        snow.borrow_mut().drag.begin(&ev);
        _ = target.set_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, snow: Rc<RefCell<SnowScene>>) {
    add_canvas_listener(canvas, "pointermove", move |ev: web::PointerEvent| {
        let mut scene = snow.borrow_mut();
        if let Some((dx, dy)) = scene.drag.delta(&ev) {
            scene.orbit_drag(dx, dy);
        }
    });
}

fn wire_pointerup(canvas: &web::HtmlCanvasElement, snow: Rc<RefCell<SnowScene>>) {
    let target = canvas.clone();
    let handler = move |ev: web::PointerEvent| {
        let mut scene = snow.borrow_mut();
        if scene.drag.active && ev.pointer_id() == scene.drag.pointer_id {
            scene.drag.end();
            _ = target.release_pointer_capture(ev.pointer_id());
        }
    };
    let cancel = handler.clone();
    add_canvas_listener(canvas, "pointerup", handler);
    add_canvas_listener(canvas, "pointercancel", cancel);
}

fn wire_wheel(canvas: &web::HtmlCanvasElement, snow: Rc<RefCell<SnowScene>>) {
    add_canvas_listener(canvas, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        snow.borrow_mut().orbit_zoom(ev.delta_y() as f32);
    });
}
