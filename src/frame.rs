use scrollfx_core::{Motion, Tick};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame driver for the scroll smoother.
///
/// Holds at most one outstanding frame id. The callback re-requests itself
/// only while the smoother reports [`Tick::Continue`]; a scroll event calls
/// [`request`](FrameLoop::request) to wake it again.
pub struct FrameLoop {
    motion: Rc<RefCell<Motion>>,
    handle: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl FrameLoop {
    pub fn new(motion: Rc<RefCell<Motion>>) -> Self {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: TickClosure = Rc::new(RefCell::new(None));

        let motion_inner = motion.clone();
        let tick_inner = tick.clone();
        let handle_inner = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_inner.set(None);
            let outcome = motion_inner.borrow_mut().on_frame();
            if outcome == Tick::Continue {
                request_frame(&motion_inner, &tick_inner, &handle_inner);
            }
        }) as Box<dyn FnMut()>));

        Self {
            motion,
            handle,
            tick,
        }
    }

    pub fn request(&self) {
        request_frame(&self.motion, &self.tick, &self.handle);
    }

    /// Cancel the pending frame and release the callback. The loop cannot
    /// be restarted afterwards.
    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure <-> Rc cycle.
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(motion: &RefCell<Motion>, tick: &TickClosure, handle: &Rc<Cell<Option<i32>>>) {
    if handle.get().is_some() {
        return;
    }
    let requested = match (web::window(), tick.borrow().as_ref()) {
        (Some(w), Some(cb)) => match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => {
                handle.set(Some(id));
                true
            }
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                false
            }
        },
        _ => false,
    };
    // No frame is coming: let the next scroll event ask again.
    if !requested {
        if let Ok(mut m) = motion.try_borrow_mut() {
            m.frame_dropped();
        }
    }
}
