use carousel_core::parse_count;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::InputWiring;
use crate::overlay;

pub fn handle_count_change(input: &web::HtmlInputElement, w: &InputWiring) {
    let raw = input.value();
    match parse_count(&raw) {
        Ok(n) => {
            let mut c = w.carousel.borrow_mut();
            c.set_count(n);
            log::info!("[count] count={} index={}", c.count(), c.index());
        }
        Err(e) => {
            let current = w.carousel.borrow().count();
            log::warn!("[count] rejected {:?}: {}; keeping {}", raw, e, current);
            overlay::show_count(input, current);
        }
    }
}

pub fn wire_count_input(w: &InputWiring) {
    let Some(input) = w.count_input.clone() else {
        log::warn!("[count] no #count-input; item count is fixed");
        return;
    };
    overlay::show_count(&input, w.carousel.borrow().count());

    let w = w.clone();
    let input_for_listener = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        handle_count_change(&input, &w);
    }) as Box<dyn FnMut(_)>);
    _ = input_for_listener.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
