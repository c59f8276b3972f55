use crate::input;
use crate::scene::SnowScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `s` pauses and resumes the snowfall.
pub fn wire_snow_toggle_key(snow: Rc<RefCell<SnowScene>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() || !input::is_snow_toggle_key(&ev.key()) {
            return;
        }
        let snowing = snow.borrow_mut().toggle_snow();
        log::info!("[keys] snow {}", if snowing { "on" } else { "paused" });
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
