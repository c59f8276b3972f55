#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod scene;

use constants::*;
use folio_core::SNOW_BACKGROUND;
use scene::{ShowcaseScene, SnowScene};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    overlay::mount_intro(&document)?;

    let snow_canvas = dom::canvas_by_id(&document, SNOW_CANVAS_ID)?;
    let showcase_canvas = dom::canvas_by_id(&document, SHOWCASE_CANVAS_ID)?;
    dom::sync_canvas_backing_size(&snow_canvas);
    dom::sync_canvas_backing_size(&showcase_canvas);
    let viewport = dom::window_viewport().unwrap_or_default();

    let snow_gpu = frame::init_gpu(&snow_canvas, SNOW_BACKGROUND).await;
    let showcase_gpu = frame::init_gpu(&showcase_canvas, [0.0, 0.0, 0.0]).await;

    let snow = Rc::new(RefCell::new(SnowScene::new(
        snow_canvas.clone(),
        snow_gpu,
        viewport,
    )));
    let showcase = Rc::new(RefCell::new(ShowcaseScene::new(
        showcase_canvas.clone(),
        showcase_gpu,
        viewport,
    )));

    overlay::wire_scene_toggle(&document, snow_canvas.clone(), showcase_canvas.clone());
    events::wire_resize(snow_canvas, showcase_canvas, snow.clone(), showcase.clone());
    events::wire_scroll(showcase.clone());
    events::wire_mousemove(showcase.clone());
    events::wire_orbit_controls(snow.clone());
    events::wire_snow_toggle_key(snow.clone());

    frame::start_loop(snow.clone());
    frame::start_loop(showcase);

    // The patrol stays idle until the model arrives; a failed load leaves
    // the snow running without a car.
    spawn_local(async move {
        match assets::load_model(CAR_MODEL_URL).await {
            Ok(mesh) => snow.borrow_mut().install_car(&mesh),
            Err(e) => log::error!("[assets] {} failed: {:?}", CAR_MODEL_URL, e),
        }
    });
    Ok(())
}
