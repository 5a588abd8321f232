use crate::dom::{self, EventListener};
use scrollfx_core::Motion;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointermove(
    window: &web::Window,
    motion: Rc<RefCell<Motion>>,
) -> anyhow::Result<EventListener> {
    let wnd = window.clone();
    EventListener::new(window, "pointermove", true, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let (vw, vh) = dom::viewport_size(&wnd);
        motion
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
    })
}
