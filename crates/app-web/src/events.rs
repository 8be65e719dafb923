//! DOM event wiring: pointer events drive marker placement/dragging and
//! camera rotation, the wheel zooms, and the keyboard pans the orbit target.

use crate::dom;
use picket_core::constants::WHEEL_ZOOM_SPEED;
use picket_core::input::{pan_delta, pan_key_for_dom_key, EventResponse};
use picket_core::{Cursor, InputEvent, Interaction, MouseState, OrbitCamera, Ray};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub scene: Rc<RefCell<Interaction>>,
    pub mouse_state: Rc<RefCell<MouseState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_click(&w);
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    wire_keydown(&w);
}

fn screen_ray(w: &InputWiring, sx: f32, sy: f32) -> Ray {
    let cam = w.camera.borrow();
    cam.screen_ray(
        sx,
        sy,
        w.canvas.width() as f32,
        w.canvas.height() as f32,
    )
}

fn apply_response(w: &InputWiring, resp: &EventResponse) {
    if let Some(cursor) = resp.cursor {
        dom::set_cursor(match cursor {
            Cursor::Grabbing => "grabbing",
            Cursor::Default => "auto",
        });
    }
    if let Some(enabled) = resp.rotate_enabled {
        w.camera.borrow_mut().rotate_enabled = enabled;
    }
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (sx, sy) = dom::pointer_canvas_px(&ev, &w.canvas);
        let ray = screen_ray(&w, sx, sy);
        let resp = w.scene.borrow_mut().handle_event(InputEvent::Click(ray));
        apply_response(&w, &resp);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (sx, sy) = dom::pointer_canvas_px(&ev, &w.canvas);
        {
            let mut ms = w.mouse_state.borrow_mut();
            ms.x = sx;
            ms.y = sy;
            ms.down = true;
        }
        let ray = screen_ray(&w, sx, sy);
        let resp = w
            .scene
            .borrow_mut()
            .handle_event(InputEvent::PointerDown(ray));
        apply_response(&w, &resp);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (sx, sy) = dom::pointer_canvas_px(&ev, &w.canvas);
        let (dx, dy, down) = {
            let mut ms = w.mouse_state.borrow_mut();
            let delta = (sx - ms.x, sy - ms.y, ms.down);
            ms.x = sx;
            ms.y = sy;
            delta
        };

        if w.scene.borrow().drag_index().is_some() {
            let ray = screen_ray(&w, sx, sy);
            let resp = w
                .scene
                .borrow_mut()
                .handle_event(InputEvent::PointerMove(ray));
            apply_response(&w, &resp);
        } else if down {
            // Rotation input is a no-op while rotate_enabled is false.
            w.camera.borrow_mut().rotate(dx, dy);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.mouse_state.borrow_mut().down = false;
        let resp = w.scene.borrow_mut().handle_event(InputEvent::PointerUp);
        apply_response(&w, &resp);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.camera.borrow_mut().zoom(ev.delta_y() as f32 * WHEEL_ZOOM_SPEED);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_keydown(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if let Some(key) = pan_key_for_dom_key(&ev.key()) {
            w.camera.borrow_mut().pan_target(pan_delta(key));
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
