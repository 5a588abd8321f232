use crate::dom::{self, EventListener};
use crate::frame::FrameLoop;
use scrollfx_core::Motion;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct ScrollWiring {
    pub window: web::Window,
    pub motion: Rc<RefCell<Motion>>,
    pub frame_loop: Rc<FrameLoop>,
    /// The geometry-tracked section, if present in the page.
    pub long_section: Option<web::HtmlElement>,
}

/// Feed raw scroll offsets and the long section's geometry to the core, and
/// wake the frame loop when the smoother had gone idle.
pub fn wire_scroll(w: &ScrollWiring) -> anyhow::Result<EventListener> {
    let w = w.clone();
    let target = w.window.clone();
    EventListener::new(&target, "scroll", true, move |_ev| {
        let offset = w.window.scroll_y().unwrap_or(0.0);
        let geometry = w
            .long_section
            .as_ref()
            .map(|el| dom::read_geometry(&w.window, el));
        let wake = w.motion.borrow_mut().on_scroll(offset, geometry);
        if wake {
            w.frame_loop.request();
        }
    })
}

/// A resize changes the viewport height the geometry tracker divides by.
pub fn wire_resize(w: &ScrollWiring) -> anyhow::Result<EventListener> {
    let w = w.clone();
    let target = w.window.clone();
    EventListener::new(&target, "resize", true, move |_ev| {
        if let Some(el) = &w.long_section {
            let geometry = dom::read_geometry(&w.window, el);
            w.motion.borrow_mut().on_geometry(geometry);
        }
    })
}
