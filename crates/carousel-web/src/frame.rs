use carousel_core::{
    build_instances, spacing_for_viewport, BackgroundAnimator, ItemAnimator, ItemTransform,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::events::{self, InputWiring};
use crate::render;

pub struct FrameContext<'a> {
    pub input: InputWiring,
    pub root: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub items: ItemAnimator,
    pub background: BackgroundAnimator,
    pub spacing: f32,
    pub seen_revision: u64,
    pub last_background: String,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        input: InputWiring,
        root: web::HtmlElement,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
        tween_duration: std::time::Duration,
    ) -> Self {
        let spacing = spacing_for_viewport(dom::viewport_width());
        let (count, index, revision) = {
            let c = input.carousel.borrow();
            (c.count(), c.index(), c.revision())
        };
        let items = ItemAnimator::new(count, index, spacing, tween_duration);
        let background = BackgroundAnimator::new(index, tween_duration);
        let last_background = background.css();
        dom::set_background(&root, &last_background);
        *input.transforms.borrow_mut() = items.transforms();
        Self {
            input,
            root,
            canvas,
            gpu,
            items,
            background,
            spacing,
            seen_revision: revision,
            last_background,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Picks up a debounced wheel step even if its timeout has not run yet
        events::wheel::flush_wheel(&self.input);

        let spacing = spacing_for_viewport(dom::viewport_width());
        let spacing_changed = spacing != self.spacing;
        self.spacing = spacing;

        let (count, index, revision) = {
            let c = self.input.carousel.borrow();
            (c.count(), c.index(), c.revision())
        };
        if revision != self.seen_revision || spacing_changed {
            self.seen_revision = revision;
            if self.items.len() != count {
                self.items.resize(count, index, spacing);
            }
            self.items.retarget(index, spacing);
            self.background.retarget(index);
        }

        self.items.step(dt_sec);
        self.background.step(dt_sec);

        let css = self.background.css();
        if css != self.last_background {
            dom::set_background(&self.root, &css);
            self.last_background = css;
        }

        let transforms: Vec<ItemTransform> = self.items.transforms();
        let instances = build_instances(&transforms);
        *self.input.transforms.borrow_mut() = transforms;

        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = gpu.render(&instances) {
                log::warn!("[gpu] render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
