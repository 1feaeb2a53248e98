use carousel_core::command_for_key;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::{navigate, InputWiring};

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    if let Some(command) = command_for_key(&ev.key()) {
        navigate(&w.carousel, command, "keys");
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(w: &InputWiring) {
    let w = w.clone();
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
