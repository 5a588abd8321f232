use crate::constants::SECTION_ATTR;
use crate::dom::{self, js_err};
use scrollfx_core::{IntersectionBatch, IntersectionEntry, Motion, SectionId, Tracking};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Live IntersectionObserver over the intersection-tracked sections.
/// Dropping it disconnects the observer.
pub struct SectionWatch {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
    observed: usize,
}

impl SectionWatch {
    pub fn observed(&self) -> usize {
        self.observed
    }
}

impl Drop for SectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
        log::debug!("[observer] disconnected");
    }
}

pub fn watch_sections(
    document: &web::Document,
    motion: Rc<RefCell<Motion>>,
) -> anyhow::Result<SectionWatch> {
    let thresholds: js_sys::Array = motion
        .borrow()
        .observer()
        .thresholds()
        .values()
        .into_iter()
        .map(JsValue::from_f64)
        .collect();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
            let batch: IntersectionBatch = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                .filter_map(|e| {
                    let name = e.target().get_attribute(SECTION_ATTR)?;
                    Some(IntersectionEntry {
                        section: SectionId::from_name(&name)?,
                        ratio: e.intersection_ratio() as f32,
                    })
                })
                .collect();
            // One batch, one publish.
            motion.borrow_mut().on_intersections(&batch);
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&thresholds);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_err)?;

    let mut observed = 0;
    for id in SectionId::ALL {
        if id.tracking() != Tracking::Intersection {
            continue;
        }
        match dom::section_element(document, id) {
            Some(el) => {
                observer.observe(&el);
                observed += 1;
            }
            None => log::warn!("[observer] no element for section {}", id.name()),
        }
    }

    Ok(SectionWatch {
        observer,
        _callback: callback,
        observed,
    })
}
