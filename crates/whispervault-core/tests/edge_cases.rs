//! Controller behavior and degraded markup.

mod common;

use common::{advance, controller, ms, Controller, FakePage, NodeId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use whispervault_core::{
    Effect, EffectContext, Page, PageEvent, Rect, VaultConfig, VaultController, VaultError,
    VaultResult,
};

/// Records every event kind it sees
struct Recorder {
    seen: std::rc::Rc<std::cell::RefCell<Vec<&'static str>>>,
    fail: bool,
}

impl Effect<FakePage> for Recorder {
    fn name(&self) -> &'static str {
        "recorder"
    }

    fn handle(
        &mut self,
        event: &PageEvent<NodeId>,
        _cx: &mut EffectContext<'_, FakePage>,
    ) -> VaultResult<()> {
        self.seen.borrow_mut().push(event.kind());
        if self.fail {
            return Err(VaultError::Dom("boom".to_string()));
        }
        Ok(())
    }
}

#[test]
fn test_default_effect_order() {
    let ctl = controller(FakePage::new());
    assert_eq!(
        ctl.effect_names(),
        vec![
            "stylesheet",
            "easter-eggs",
            "particles",
            "fade-in",
            "smooth-scroll",
            "ripple",
            "nav-intent",
            "parallax",
            "navbar",
            "cursor-glow",
        ]
    );
}

#[test]
fn test_failing_effect_does_not_stop_others() {
    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let mut ctl: Controller = VaultController::new(FakePage::new(), VaultConfig::default());
    ctl.register(Recorder {
        seen: seen.clone(),
        fail: true,
    });
    ctl.register(Recorder {
        seen: seen.clone(),
        fail: false,
    });

    ctl.dispatch(PageEvent::Load);
    ctl.dispatch(PageEvent::Scroll { offset: 1.0 });

    assert_eq!(*seen.borrow(), vec!["load", "load", "scroll", "scroll"]);
}

#[test]
fn test_rejected_append_degrades_only_that_effect() {
    let mut page = FakePage::new();
    let body = page.body_id();
    page.add_with_id(body, "div", "particles");
    let navbar = page.add_with_class(body, "nav", "navbar");
    page.fail_appends = true;
    let mut ctl = controller(page);

    ctl.dispatch(PageEvent::Load);
    ctl.dispatch(PageEvent::Scroll { offset: 80.0 });

    assert!(ctl.page().find_by_class("particle").is_empty());
    assert_eq!(
        ctl.page().style(navbar, "background"),
        Some("rgba(10, 10, 10, 0.95)")
    );
}

#[test]
fn test_stale_timer_is_ignored() {
    let mut ctl = controller(FakePage::new());
    ctl.dispatch(PageEvent::Timer(whispervault_core::TimerId::new(9_999)));
    assert!(ctl.page().bare_elements("div").is_empty());
}

#[test]
fn test_unknown_overlay_dismiss_is_ignored() {
    let mut page = FakePage::new();
    let body = page.body_id();
    let stranger = page.add_with_class(body, "div", "nav-message");
    let mut ctl = controller(page);

    ctl.dispatch(PageEvent::Dismiss { overlay: stranger });

    assert!(ctl.page().is_attached(stranger));
}

#[test]
fn test_each_click_opens_its_own_dialog() {
    let mut page = FakePage::new();
    let button = page.add_button("card-btn", "Read Stories", Rect::new(0.0, 0.0, 50.0, 20.0));
    let mut ctl = controller(page);

    ctl.dispatch(PageEvent::ButtonActivated {
        button,
        client_x: 10.0,
        client_y: 10.0,
    });
    ctl.dispatch(PageEvent::ButtonActivated {
        button,
        client_x: 12.0,
        client_y: 10.0,
    });

    let overlays = ctl.page().find_by_class("nav-message");
    assert_eq!(overlays.len(), 2);
    common::dismiss(&mut ctl, overlays[1]);
    assert_eq!(ctl.page().find_by_class("nav-message"), vec![overlays[0]]);
}

#[test]
fn test_full_page_lifecycle_leaves_no_ephemeral_nodes() {
    let mut page = FakePage::new();
    let body = page.body_id();
    page.add_with_id(body, "div", "particles");
    page.add_with_class(body, "div", "feature-card");
    let button = page.add_button("cta-btn", "Enter the Vault", Rect::new(0.0, 0.0, 200.0, 50.0));
    let mut ctl = VaultController::with_default_effects(
        page,
        VaultConfig::default(),
        StdRng::seed_from_u64(1),
    );

    ctl.dispatch(PageEvent::Init);
    ctl.dispatch(PageEvent::Load);
    ctl.dispatch(PageEvent::ButtonActivated {
        button,
        client_x: 100.0,
        client_y: 25.0,
    });
    for i in 0..10 {
        ctl.dispatch(PageEvent::PointerMove {
            client_x: i as f64,
            client_y: i as f64,
        });
        advance(&mut ctl, ms(70));
    }
    advance(&mut ctl, ms(1_000));

    let overlay = ctl.page().find_by_class("nav-message")[0];
    common::dismiss(&mut ctl, overlay);

    let page = ctl.page();
    assert!(page.find_by_class("ripple").is_empty());
    assert!(page.find_by_class("nav-message").is_empty());
    assert!(page.bare_elements("div").is_empty());
    assert_eq!(page.find_by_class("particle").len(), 50);
    assert_eq!(page.pending_timers(), 0);
    assert!(page.element_by_id("whisper-vault-dynamic").is_some());
}
