pub mod count;
pub mod keyboard;
pub mod pointer;
pub mod touch;
pub mod wheel;

use carousel_core::{Carousel, Debouncer, ItemTransform, NavCommand, SwipeMode, TouchTracker};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

pub use count::wire_count_input;
pub use keyboard::wire_global_keydown;
pub use pointer::wire_item_click;
pub use touch::wire_touch;
pub use wheel::wire_wheel;

/// Shared handles every input listener needs.
#[derive(Clone)]
pub struct InputWiring {
    pub carousel: Rc<RefCell<Carousel>>,
    pub wheel: Rc<RefCell<Debouncer<NavCommand>>>,
    pub wheel_timer: Rc<Cell<Option<i32>>>,
    pub touch: Rc<RefCell<TouchTracker>>,
    pub swipe_mode: SwipeMode,
    pub canvas: web::HtmlCanvasElement,
    /// Latest animated transforms, written by the frame loop and read for click picking.
    pub transforms: Rc<RefCell<Vec<ItemTransform>>>,
    pub count_input: Option<web::HtmlInputElement>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_global_keydown(&w);
    wire_wheel(&w);
    wire_touch(&w);
    wire_item_click(&w);
    wire_count_input(&w);
}

/// Apply a command to the store and log where it came from.
pub(crate) fn navigate(carousel: &Rc<RefCell<Carousel>>, command: NavCommand, source: &str) {
    let mut c = carousel.borrow_mut();
    let before = c.index();
    c.apply(command);
    if c.index() != before {
        log::info!("[{}] {:?} -> index {}", source, command, c.index());
    }
}
