//! `Page` implementation over the live DOM.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};
use whispervault_core::{Page, PageEvent, Rect, TimerId, VaultController, VaultError, VaultResult};

fn dom_err(value: JsValue) -> VaultError {
    VaultError::Dom(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// Every element matching `selector`, in document order.
pub(crate) fn elements(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Weak handle used by callbacks to feed events back into the controller.
///
/// Callbacks never run while a dispatch is in progress (the browser only
/// calls them from its own event loop), but a busy controller is still
/// handled: the event is dropped with a warning.
#[derive(Clone)]
pub struct Dispatcher {
    controller: Weak<RefCell<VaultController<WebPage>>>,
}

impl Dispatcher {
    pub fn new(controller: Weak<RefCell<VaultController<WebPage>>>) -> Self {
        Self { controller }
    }

    pub fn dispatch(&self, event: PageEvent<Element>) {
        let Some(controller) = self.controller.upgrade() else {
            return;
        };
        let Ok(mut controller) = controller.try_borrow_mut() else {
            tracing::warn!(event = event.kind(), "controller busy, event dropped");
            return;
        };
        controller.dispatch(event);
    }
}

/// The browser document.
pub struct WebPage {
    window: Window,
    document: Document,
    dispatcher: Dispatcher,
    observers: Vec<IntersectionObserver>,
    /// Scheduled timeouts; dropping one clears it
    timers: HashMap<TimerId, Timeout>,
    /// Ids whose callback has finished, reaped on the next schedule/cancel
    fired: Rc<RefCell<Vec<TimerId>>>,
}

impl WebPage {
    pub fn new(window: Window, document: Document, dispatcher: Dispatcher) -> Self {
        Self {
            window,
            document,
            dispatcher,
            observers: Vec::new(),
            timers: HashMap::new(),
            fired: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Drop the handles of timeouts that already ran.
    ///
    /// A timeout is only pushed to `fired` after its callback returned, so
    /// no closure is dropped while it executes.
    fn reap_fired(&mut self) {
        for timer in self.fired.borrow_mut().drain(..) {
            self.timers.remove(&timer);
        }
    }
}

impl Page for WebPage {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        elements(&self.document, selector)
    }

    fn head(&self) -> Option<Element> {
        self.document.head().map(Element::from)
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn create_element(&mut self, tag: &str) -> VaultResult<Element> {
        self.document.create_element(tag).map_err(dom_err)
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> VaultResult<()> {
        parent.append_child(child).map(|_| ()).map_err(dom_err)
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }

    fn add_class(&mut self, node: &Element, class: &str) -> VaultResult<()> {
        node.class_list().add_1(class).map_err(dom_err)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) -> VaultResult<()> {
        node.set_attribute(name, value).map_err(dom_err)
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) -> VaultResult<()> {
        let element = node
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| VaultError::Dom(format!("<{}> has no inline style", node.tag_name())))?;
        element
            .style()
            .set_property(property, value)
            .map_err(dom_err)
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn text_content(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn bounding_rect(&self, node: &Element) -> Rect {
        let r = node.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }

    fn scroll_into_view(&mut self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn observe_intersections(&mut self, nodes: &[Element], threshold: f64) -> VaultResult<()> {
        let dispatcher = self.dispatcher.clone();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    dispatcher.dispatch(PageEvent::Intersection {
                        target: entry.target(),
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    });
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(dom_err)?;
        // The observer lives as long as the page.
        callback.forget();

        for node in nodes {
            observer.observe(node);
        }
        self.observers.push(observer);
        Ok(())
    }

    fn schedule(&mut self, timer: TimerId, delay: Duration) {
        self.reap_fired();
        let dispatcher = self.dispatcher.clone();
        let fired = Rc::clone(&self.fired);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || {
            dispatcher.dispatch(PageEvent::Timer(timer));
            fired.borrow_mut().push(timer);
        });
        self.timers.insert(timer, timeout);
    }

    // Effects never cancel the timer whose event they are handling.
    fn cancel(&mut self, timer: TimerId) {
        self.reap_fired();
        self.timers.remove(&timer);
    }

    fn bind_dismiss(&mut self, trigger: &Element, overlay: &Element) -> VaultResult<()> {
        let dispatcher = self.dispatcher.clone();
        let overlay = overlay.clone();
        EventListener::once(trigger, "click", move |_| {
            dispatcher.dispatch(PageEvent::Dismiss { overlay });
        })
        .forget();
        Ok(())
    }

    fn navigate(&mut self, url: &str) -> VaultResult<()> {
        self.window.location().set_href(url).map_err(dom_err)
    }

    fn console(&mut self, message: &str, css: Option<&str>) {
        match css {
            Some(css) => gloo::console::log!(format!("%c{}", message), css),
            None => gloo::console::log!(message),
        }
    }
}
