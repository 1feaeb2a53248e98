use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::{navigate, InputWiring};

/// First touch of `touches` (or `changedTouches` for touchend) in client coordinates.
fn touch_point(ev: &web::TouchEvent, use_changed: bool) -> Option<Vec2> {
    let list = if use_changed {
        ev.changed_touches()
    } else {
        ev.touches()
    };
    let t = list.item(0)?;
    Some(Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

fn add_touch_listener(
    window: &web::Window,
    name: &str,
    mut handler: impl FnMut(&web::TouchEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        handler(&ev);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_touch(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };

    let ws = w.clone();
    add_touch_listener(&window, "touchstart", move |ev| {
        // Multi-finger gestures are not swipes
        if ev.touches().length() != 1 {
            ws.touch.borrow_mut().cancel();
            return;
        }
        if let Some(p) = touch_point(ev, false) {
            ws.touch.borrow_mut().begin(p);
        }
    });

    let wm = w.clone();
    add_touch_listener(&window, "touchmove", move |ev| {
        if let Some(p) = touch_point(ev, false) {
            wm.touch.borrow_mut().moved(p);
        }
    });

    let we = w.clone();
    add_touch_listener(&window, "touchend", move |ev| {
        let Some(p) = touch_point(ev, true) else {
            return;
        };
        let command = we.touch.borrow_mut().end(p, we.swipe_mode);
        if let Some(command) = command {
            navigate(&we.carousel, command, "touch");
        }
    });

    let wc = w.clone();
    add_touch_listener(&window, "touchcancel", move |_| {
        wc.touch.borrow_mut().cancel();
    });
}
