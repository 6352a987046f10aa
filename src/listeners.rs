//! Browser event listeners feeding the controller.

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, MouseEvent, Window};
use whispervault_core::effects::ripple::BUTTON_SELECTOR;
use whispervault_core::effects::smooth_scroll::ANCHOR_SELECTOR;
use whispervault_core::PageEvent;

use crate::page::{elements, Dispatcher};

/// Listeners registered at startup. Dropping them unregisters everything.
pub struct Listeners {
    _listeners: Vec<EventListener>,
}

/// Register every listener the effects depend on.
pub fn install(window: &Window, document: &Document, dispatcher: &Dispatcher) -> Listeners {
    let mut listeners = Vec::new();

    let d = dispatcher.clone();
    listeners.push(EventListener::new(window, "load", move |_| {
        d.dispatch(PageEvent::Load)
    }));

    let d = dispatcher.clone();
    let w = window.clone();
    listeners.push(EventListener::new(window, "scroll", move |_| {
        let offset = w.scroll_y().unwrap_or(0.0);
        d.dispatch(PageEvent::Scroll { offset });
    }));

    for anchor in elements(document, ANCHOR_SELECTOR) {
        let d = dispatcher.clone();
        let target = anchor.clone();
        listeners.push(EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let href = target.get_attribute("href").unwrap_or_default();
                d.dispatch(PageEvent::AnchorActivated { href });
            },
        ));
    }

    for button in elements(document, BUTTON_SELECTOR) {
        let d = dispatcher.clone();
        let target = button.clone();
        listeners.push(EventListener::new(&button, "click", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            d.dispatch(PageEvent::ButtonActivated {
                button: target.clone(),
                client_x: f64::from(mouse.client_x()),
                client_y: f64::from(mouse.client_y()),
            });
        }));
    }

    let d = dispatcher.clone();
    listeners.push(EventListener::new(document, "mousemove", move |event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            d.dispatch(PageEvent::PointerMove {
                client_x: f64::from(mouse.client_x()),
                client_y: f64::from(mouse.client_y()),
            });
        }
    }));

    let d = dispatcher.clone();
    listeners.push(EventListener::new(document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            d.dispatch(PageEvent::KeyDown { key: key.key() });
        }
    }));

    tracing::debug!(count = listeners.len(), "listeners installed");
    Listeners {
        _listeners: listeners,
    }
}
