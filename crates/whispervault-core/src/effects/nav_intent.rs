//! Navigation-intent dialog for recognized call-to-action labels.
//!
//! Clicking a mapped button announces the destination page in an overlay.
//! Following the link is gated behind `navigation.enabled` and is off by
//! default, since the destination pages are not published yet.

use std::collections::HashMap;

use crate::controller::{Effect, EffectContext};
use crate::error::VaultResult;
use crate::event::PageEvent;
use crate::page::{Page, TimerId};

pub const OVERLAY_CLASS: &str = "nav-message";
pub const CONTENT_CLASS: &str = "message-content";
pub const NOTE_CLASS: &str = "message-note";
pub const DISMISS_CLASS: &str = "close-msg";

/// Attribute on the overlay carrying the mapped destination
pub const DESTINATION_ATTR: &str = "data-destination";

pub const NOTE_TEXT: &str = "Page coming soon! For now, this is a demo.";
pub const DISMISS_TEXT: &str = "Got it!";

const DEFAULT_DESTINATIONS: [(&str, &str); 5] = [
    ("Write Now", "thoughts.html"),
    ("Send Letter", "letters.html"),
    ("Confess", "confessions.html"),
    ("Read Stories", "stories.html"),
    ("Enter the Vault", "thoughts.html"),
];

/// Button label to destination page.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationMap {
    entries: Vec<(String, String)>,
}

impl Default for NavigationMap {
    fn default() -> Self {
        Self {
            entries: DEFAULT_DESTINATIONS
                .iter()
                .map(|(label, page)| (label.to_string(), page.to_string()))
                .collect(),
        }
    }
}

impl NavigationMap {
    /// Destination for an exact, already trimmed label
    pub fn destination(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, page)| page.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }
}

/// Shows one overlay per recognized click and removes it on dismiss.
pub struct NavIntentDialog<N> {
    map: NavigationMap,
    open: Vec<N>,
    pending: HashMap<TimerId, String>,
}

impl<N> Default for NavIntentDialog<N> {
    fn default() -> Self {
        Self::new(NavigationMap::default())
    }
}

impl<N> NavIntentDialog<N> {
    pub fn new(map: NavigationMap) -> Self {
        Self {
            map,
            open: Vec::new(),
            pending: HashMap::new(),
        }
    }
}

impl<P: Page> Effect<P> for NavIntentDialog<P::Node> {
    fn name(&self) -> &'static str {
        "nav-intent"
    }

    fn handle(
        &mut self,
        event: &PageEvent<P::Node>,
        cx: &mut EffectContext<'_, P>,
    ) -> VaultResult<()> {
        match event {
            PageEvent::ButtonActivated { button, .. } => {
                let text = cx.page.text_content(button);
                let label = text.trim();
                let Some(destination) = self.map.destination(label).map(str::to_owned) else {
                    tracing::debug!(label, "button label has no destination");
                    return Ok(());
                };
                let Some(body) = cx.page.body() else {
                    return Ok(());
                };

                let overlay = cx.page.create_element("div")?;
                cx.page.add_class(&overlay, OVERLAY_CLASS)?;
                cx.page.set_attribute(&overlay, DESTINATION_ATTR, &destination)?;

                let content = cx.page.create_element("div")?;
                cx.page.add_class(&content, CONTENT_CLASS)?;

                let headline = cx.page.create_element("p")?;
                cx.page.set_text(&headline, &format!("🖤 Opening {}...", label));

                let note = cx.page.create_element("p")?;
                cx.page.add_class(&note, NOTE_CLASS)?;
                cx.page.set_text(&note, NOTE_TEXT);

                let dismiss = cx.page.create_element("button")?;
                cx.page.add_class(&dismiss, DISMISS_CLASS)?;
                cx.page.set_text(&dismiss, DISMISS_TEXT);

                cx.page.append_child(&content, &headline)?;
                cx.page.append_child(&content, &note)?;
                cx.page.append_child(&content, &dismiss)?;
                cx.page.append_child(&overlay, &content)?;
                // An overlay only goes on screen once it can be dismissed.
                cx.page.bind_dismiss(&dismiss, &overlay)?;
                cx.page.append_child(&body, &overlay)?;
                self.open.push(overlay);

                tracing::info!(label, %destination, "navigation intent");
                if cx.config.navigation.enabled {
                    let delay = cx.config.navigation.delay();
                    let timer = cx.schedule(delay);
                    self.pending.insert(timer, destination);
                }
            }
            PageEvent::Dismiss { overlay } => {
                if let Some(pos) = self.open.iter().position(|o| o == overlay) {
                    self.open.remove(pos);
                    cx.page.remove(overlay);
                }
            }
            PageEvent::Timer(timer) => {
                if let Some(destination) = self.pending.remove(timer) {
                    tracing::info!(%destination, "navigating");
                    cx.page.navigate(&destination)?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}
