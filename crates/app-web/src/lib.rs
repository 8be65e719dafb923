//! WASM entry point: sets up the canvas, GPU state, input handlers, and the
//! requestAnimationFrame loop.

#![cfg(target_arch = "wasm32")]

mod dom;
mod events;
mod frame;
mod render;

use glam::Vec3;
use instant::Instant;
use picket_core::constants::{camera_eye_vec3, CUBE_HALF_EXTENT};
use picket_core::{Aabb, Interaction, MouseState, OrbitCamera};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
}

async fn init() -> Result<(), JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| JsValue::from_str("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()?;
    dom::sync_canvas_backing_size(&canvas);

    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let camera = Rc::new(RefCell::new(OrbitCamera::from_eye_target(
        camera_eye_vec3(),
        Vec3::ZERO,
        aspect,
    )));
    let scene = Rc::new(RefCell::new(Interaction::new(Aabb::from_half_extent(
        CUBE_HALF_EXTENT,
    ))));
    let mouse_state = Rc::new(RefCell::new(MouseState::default()));

    wire_canvas_resize(&canvas);

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::error!("WebGPU unavailable; nothing will be drawn");
    }

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        camera: camera.clone(),
        scene: scene.clone(),
        mouse_state,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        camera,
        scene,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
