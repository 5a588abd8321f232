use crate::constants::{FX_ATTR, SECTION_ATTR};
use scrollfx_core::{SectionGeometry, SectionId};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Viewport size in CSS px; (0, 0) if the window cannot report it.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    (read(window.inner_width()), read(window.inner_height()))
}

pub fn query_html(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all_html(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn fx_selector(role: &str) -> String {
    format!("[{}=\"{}\"]", FX_ATTR, role)
}

pub fn fx(root: &web::Element, role: &str) -> Option<web::HtmlElement> {
    query_html(root, &fx_selector(role))
}

/// Like [`fx`], for hooks that are not HTML elements (SVG paths).
pub fn fx_element(root: &web::Element, role: &str) -> Option<web::Element> {
    root.query_selector(&fx_selector(role)).ok().flatten()
}

pub fn section_element(document: &web::Document, id: SectionId) -> Option<web::HtmlElement> {
    let root = document.document_element()?;
    query_html(&root, &format!("[{}=\"{}\"]", SECTION_ATTR, id.name()))
}

/// Bounding-box read of a section, for the geometry tracker.
pub fn read_geometry(window: &web::Window, el: &web::HtmlElement) -> SectionGeometry {
    let (_, vh) = viewport_size(window);
    let rect = el.get_bounding_client_rect();
    SectionGeometry::new(rect.top() as f32, el.offset_height() as f32, vh)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// A registered DOM listener. Dropping it removes the listener, so holding
/// the guard for the lifetime of a mount covers every teardown path.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        log::debug!("[dom] removed {} listener", self.event);
    }
}
