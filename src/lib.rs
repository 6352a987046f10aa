//! Whisper Vault browser host.
//!
//! Wires the effects in `whispervault-core` to the live document: reads the
//! optional `data-vault-config` JSON from `<body>`, installs console logging,
//! and registers the window/document listeners that feed the controller.

mod console;
mod listeners;
mod page;

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use whispervault_core::logging::LoggingBuilder;
use whispervault_core::{PageEvent, VaultConfig, VaultController};

pub use console::BrowserConsole;
pub use page::{Dispatcher, WebPage};

/// `<body>` attribute holding the JSON configuration
pub const CONFIG_ATTRIBUTE: &str = "data-vault-config";

/// Controller shared between listeners and timers
pub type SharedController = Rc<RefCell<VaultController<WebPage>>>;

struct Host {
    _controller: SharedController,
    _listeners: listeners::Listeners,
}

thread_local! {
    static HOST: RefCell<Option<Host>> = const { RefCell::new(None) };
}

/// Entry point, run when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    if HOST.with(|host| host.borrow().is_some()) {
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let raw_config = document
        .body()
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    let (config, config_error) = match raw_config.as_deref().map(VaultConfig::from_json) {
        None => (VaultConfig::default(), None),
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (VaultConfig::default(), Some(e)),
    };

    if let Err(e) = LoggingBuilder::new(BrowserConsole)
        .with_filter(config.log_filter.clone())
        .init()
    {
        gloo::console::warn!(format!("whispervault: logging disabled: {}", e));
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "ignoring {}, using defaults", CONFIG_ATTRIBUTE);
    }

    // js Math.random carries 52 bits of entropy
    let seed = (js_sys::Math::random() * (1u64 << 52) as f64) as u64;
    let rng = StdRng::seed_from_u64(seed);

    let controller: SharedController = Rc::new_cyclic(|weak| {
        let page = WebPage::new(window.clone(), document.clone(), Dispatcher::new(weak.clone()));
        RefCell::new(VaultController::with_default_effects(page, config, rng))
    });
    let dispatcher = Dispatcher::new(Rc::downgrade(&controller));

    dispatcher.dispatch(PageEvent::Init);
    let listeners = listeners::install(&window, &document, &dispatcher);

    // Module scripts can finish loading after `load` already fired.
    if document.ready_state() == "complete" {
        dispatcher.dispatch(PageEvent::Load);
    }

    tracing::info!(
        effects = controller.borrow().effect_names().len(),
        "whisper vault ready"
    );
    HOST.with(|host| {
        *host.borrow_mut() = Some(Host {
            _controller: controller,
            _listeners: listeners,
        });
    });
    Ok(())
}
