use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A scene advanced once per animation frame.
pub trait Frame {
    fn frame(&mut self);
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    background_srgb: [f64; 3],
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, background_srgb).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] init error on #{}: {:?}", canvas.id(), e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `scene` from `requestAnimationFrame` for the lifetime of the page.
pub fn start_loop<F: Frame + 'static>(scene: Rc<RefCell<F>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        scene.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
