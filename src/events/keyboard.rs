use crate::core::{command_for_key, CommandQueue};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, queue: &CommandQueue) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    if let Some(cmd) = command_for_key(&ev.key()) {
        queue.push(cmd);
        // keep Space / arrows from scrolling the page
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(queue: CommandQueue) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &queue);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
