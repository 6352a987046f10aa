//! Document abstraction the effects are written against.
//!
//! The browser host implements [`Page`] over `web_sys::Element`; tests use an
//! in-memory tree. Effects never touch the real DOM directly.

use std::fmt;
use std::time::Duration;

use crate::error::VaultResult;

/// Handle for a deferred callback.
///
/// Allocated by the controller. The host fires `PageEvent::Timer(id)` once
/// the delay elapses unless the timer was cancelled first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Viewport-relative bounding box, as returned by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// The document as seen by the effects.
///
/// Lookups return `None`/empty when nothing matches; mutations return
/// `VaultResult` because the host call can be rejected.
pub trait Page {
    /// Element handle. Equality is node identity.
    type Node: Clone + PartialEq + fmt::Debug + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    /// First element matching a CSS selector
    fn query(&self, selector: &str) -> Option<Self::Node>;
    /// Every element matching a CSS selector, in document order
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn head(&self) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;

    fn create_element(&mut self, tag: &str) -> VaultResult<Self::Node>;
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> VaultResult<()>;
    /// Detach a node from the tree. Removing a detached node is a no-op.
    fn remove(&mut self, node: &Self::Node);
    fn add_class(&mut self, node: &Self::Node, class: &str) -> VaultResult<()>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str) -> VaultResult<()>;
    /// Set one inline style property (CSS property name, e.g. `animation-delay`)
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str) -> VaultResult<()>;
    fn set_text(&mut self, node: &Self::Node, text: &str);
    fn text_content(&self, node: &Self::Node) -> String;
    fn bounding_rect(&self, node: &Self::Node) -> Rect;

    /// Smoothly scroll `node` to the top of the viewport
    fn scroll_into_view(&mut self, node: &Self::Node);

    /// Start reporting `PageEvent::Intersection` for `nodes` whenever their
    /// visible ratio crosses `threshold`.
    fn observe_intersections(&mut self, nodes: &[Self::Node], threshold: f64) -> VaultResult<()>;

    /// Fire `PageEvent::Timer(timer)` after `delay`.
    fn schedule(&mut self, timer: TimerId, delay: Duration);

    /// Clear a scheduled timer. Unknown or already fired ids are ignored.
    fn cancel(&mut self, timer: TimerId);

    /// Fire `PageEvent::Dismiss { overlay }` when `trigger` is activated.
    fn bind_dismiss(&mut self, trigger: &Self::Node, overlay: &Self::Node) -> VaultResult<()>;

    /// Leave the page for `url`.
    fn navigate(&mut self, url: &str) -> VaultResult<()>;

    /// Developer console output, optionally styled with `%c` CSS.
    fn console(&mut self, message: &str, css: Option<&str>);
}
