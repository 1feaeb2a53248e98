use carousel_core::{pick_item, NavCommand};
use wasm_bindgen::JsCast;
use web_sys as web;

use super::{navigate, InputWiring};
use crate::camera;

pub fn wire_item_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some((ro, rd)) =
            camera::client_to_world_ray(&w.canvas, ev.client_x() as f32, ev.client_y() as f32)
        else {
            return;
        };
        let picked = pick_item(ro, rd, &w.transforms.borrow());
        if let Some(i) = picked {
            log::info!("[click] item {}", i);
            navigate(&w.carousel, NavCommand::JumpTo(i), "click");
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
