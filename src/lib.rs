#![cfg(target_arch = "wasm32")]
use scrollfx_core::{Motion, MotionConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod observer;
mod render;

/// Everything a mount owns. Dropping it tears the page wiring down: the
/// listener guards remove themselves, the observer disconnects and the
/// pending animation frame is cancelled.
struct Mounted {
    motion: Rc<RefCell<Motion>>,
    frame_loop: Rc<frame::FrameLoop>,
    _listeners: Vec<dom::EventListener>,
    _watch: observer::SectionWatch,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.frame_loop.stop();
        self.motion.borrow_mut().unmount();
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrollfx-web starting");

    match mount() {
        Ok(m) => MOUNTED.with(|slot| *slot.borrow_mut() = Some(m)),
        Err(e) => log::error!("mount error: {:?}", e),
    }
    Ok(())
}

/// Detach every listener and stop the frame loop. Safe to call twice.
#[wasm_bindgen]
pub fn unmount() {
    let mounted = MOUNTED.with(|slot| slot.borrow_mut().take());
    if mounted.is_some() {
        drop(mounted);
        log::info!("scrollfx-web unmounted");
    }
}

fn mount() -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let initial_scroll = window.scroll_y().map_err(dom::js_err)?;
    let motion = Rc::new(RefCell::new(Motion::new(
        MotionConfig::default(),
        initial_scroll,
    )?));

    let mut renderer = render::Renderer::new(&document)?;
    renderer.render(&motion.borrow().snapshot());
    motion
        .borrow_mut()
        .subscribe(move |snap| renderer.render(snap));

    let frame_loop = Rc::new(frame::FrameLoop::new(motion.clone()));

    let geometry_section = motion.borrow().geometry_section();
    let long_section = dom::section_element(&document, geometry_section);
    if long_section.is_none() {
        log::warn!("[mount] no element for section {}", geometry_section.name());
    }
    let scroll = events::ScrollWiring {
        window: window.clone(),
        motion: motion.clone(),
        frame_loop: frame_loop.clone(),
        long_section: long_section.clone(),
    };
    let listeners = vec![
        events::wire_scroll(&scroll)?,
        events::wire_resize(&scroll)?,
        events::wire_pointermove(&window, motion.clone())?,
    ];
    let watch = observer::watch_sections(&document, motion.clone())?;

    // Initial read so a page restored mid-scroll starts in the right state.
    if let Some(el) = &long_section {
        let geometry = dom::read_geometry(&window, el);
        motion.borrow_mut().on_geometry(geometry);
    }
    let wake = motion.borrow_mut().start();
    if wake {
        frame_loop.request();
    }

    log::info!(
        "[mount] listeners={} observed_sections={} scroll={:.0}",
        listeners.len(),
        watch.observed(),
        initial_scroll
    );

    Ok(Mounted {
        motion,
        frame_loop,
        _listeners: listeners,
        _watch: watch,
    })
}
