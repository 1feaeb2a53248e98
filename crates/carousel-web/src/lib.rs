#![cfg(target_arch = "wasm32")]
use carousel_core::{Carousel, CarouselConfig, Debouncer, TouchTracker};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

/// `data-*` attributes on `#app-root` that override the defaults.
const CONFIG_KEYS: [&str; 4] = ["count", "swipe", "debounce-ms", "duration-ms"];

fn wire_resize(canvas: &web::HtmlCanvasElement, document: &web::Document) {
    dom::sync_canvas_backing_size(canvas);
    overlay::update_hint(document, dom::viewport_width());
    let canvas_resize = canvas.clone();
    let document_resize = document.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        overlay::update_hint(&document_resize, dom::viewport_width());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn load_config(root: &web::Element) -> CarouselConfig {
    let mut config = CarouselConfig::default();
    let options = dom::data_options(root, &CONFIG_KEYS);
    let errors = config.apply_overrides(options.iter().map(|(k, v)| (*k, v.as_str())));
    for e in errors {
        log::warn!("[config] ignoring override: {}", e);
    }
    log::info!(
        "[config] count={} swipe={:?} debounce={}ms duration={}ms",
        config.initial_count,
        config.swipe_mode,
        config.debounce_ms,
        config.tween_duration.as_millis()
    );
    config
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("carousel-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] already started; ignoring");
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let root = dom::html_element_by_id(&document, "app-root")
        .ok_or_else(|| anyhow::anyhow!("missing #app-root"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = load_config(&root);

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_resize(&canvas, &document);

    let wiring = events::InputWiring {
        carousel: Rc::new(RefCell::new(Carousel::new(config.initial_count))),
        wheel: Rc::new(RefCell::new(Debouncer::new(config.debounce_ms))),
        wheel_timer: Rc::new(Cell::new(None)),
        touch: Rc::new(RefCell::new(TouchTracker::default())),
        swipe_mode: config.swipe_mode,
        canvas: canvas.clone(),
        transforms: Rc::new(RefCell::new(Vec::new())),
        count_input: dom::input_by_id(&document, "count-input"),
    };
    events::wire_input_handlers(wiring.clone());

    // Navigation and background keep working without WebGPU; only the TVs go missing.
    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("[gpu] unavailable; rendering background only");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        wiring,
        root,
        canvas,
        gpu,
        config.tween_duration,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
