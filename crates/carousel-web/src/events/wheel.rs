use carousel_core::wheel_command;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::{navigate, InputWiring};
use crate::dom;

/// Fire the debounced wheel step if its deadline has passed.
pub fn flush_wheel(w: &InputWiring) {
    let ready = w.wheel.borrow_mut().poll(dom::now_ms());
    if let Some(command) = ready {
        navigate(&w.carousel, command, "wheel");
    }
}

pub fn wire_wheel(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };

    // One reusable timeout callback; each wheel event clears and re-arms it.
    let w_timeout = w.clone();
    let on_timeout = Closure::wrap(Box::new(move || {
        w_timeout.wheel_timer.set(None);
        flush_wheel(&w_timeout);
    }) as Box<dyn FnMut()>);

    let w = w.clone();
    let timer_window = window.clone();
    let on_wheel = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let Some(command) = wheel_command(ev.delta_x(), ev.delta_y()) else {
            return;
        };
        let window_ms = {
            let mut deb = w.wheel.borrow_mut();
            deb.trigger(dom::now_ms(), command);
            deb.window_ms()
        };
        if let Some(handle) = w.wheel_timer.take() {
            timer_window.clear_timeout_with_handle(handle);
        }
        match timer_window.set_timeout_with_callback_and_timeout_and_arguments_0(
            on_timeout.as_ref().unchecked_ref(),
            // Small margin so the deadline has passed when the callback runs
            window_ms.ceil() as i32 + 1,
        ) {
            Ok(handle) => w.wheel_timer.set(Some(handle)),
            Err(e) => log::warn!("[wheel] setTimeout failed: {:?}", e),
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("wheel", on_wheel.as_ref().unchecked_ref());
    on_wheel.forget();
}
