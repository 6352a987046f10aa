//! Typed events delivered to the effects.

use crate::page::TimerId;

/// Everything the page can tell the effects about.
///
/// `N` is the host's element handle (`Page::Node`).
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent<N> {
    /// Script initialization, before the page finished loading
    Init,
    /// Window `load`
    Load,
    /// Window scroll, with the vertical offset in pixels
    Scroll { offset: f64 },
    /// In-page anchor clicked; default navigation already cancelled
    AnchorActivated { href: String },
    /// Card or call-to-action button clicked at viewport coordinates
    ButtonActivated {
        button: N,
        client_x: f64,
        client_y: f64,
    },
    /// Dismiss control of an overlay activated
    Dismiss { overlay: N },
    PointerMove { client_x: f64, client_y: f64 },
    KeyDown { key: String },
    /// Visibility ratio of an observed element changed
    Intersection {
        target: N,
        ratio: f64,
        is_intersecting: bool,
    },
    /// A scheduled delay elapsed
    Timer(TimerId),
}

impl<N> PageEvent<N> {
    /// Short name for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            PageEvent::Init => "init",
            PageEvent::Load => "load",
            PageEvent::Scroll { .. } => "scroll",
            PageEvent::AnchorActivated { .. } => "anchor",
            PageEvent::ButtonActivated { .. } => "button",
            PageEvent::Dismiss { .. } => "dismiss",
            PageEvent::PointerMove { .. } => "pointer-move",
            PageEvent::KeyDown { .. } => "keydown",
            PageEvent::Intersection { .. } => "intersection",
            PageEvent::Timer(_) => "timer",
        }
    }
}
