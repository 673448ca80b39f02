// =============================================================================
// IgniteX Web - Window Scroll Service
// =============================================================================
// Connects the scroll watch to the real browser window and the component
// lifecycle.
// =============================================================================

use leptos::ev;
use leptos::prelude::*;

use crate::interaction::{HeaderDensity, ListenerRegistration, ScrollTarget, ScrollWatch};

/// The browser window as a scroll source.
pub struct BrowserWindow;

/// Current vertical scroll offset of the document, 0 if unavailable.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

impl ScrollTarget for BrowserWindow {
    type Registration = WindowListenerHandle;

    fn listen(&self, handler: Box<dyn Fn(f64)>) -> WindowListenerHandle {
        window_event_listener(ev::scroll, move |_| handler(scroll_offset()))
    }
}

impl ListenerRegistration for WindowListenerHandle {
    fn remove(self) {
        WindowListenerHandle::remove(self);
    }
}

/// Track header density for the lifetime of the calling component.
///
/// Registers one window scroll listener and removes it when the owner is
/// cleaned up. The density starts from the current offset so a reload part
/// way down the page renders compact immediately.
pub fn use_header_density() -> ReadSignal<HeaderDensity> {
    let (density, set_density) = signal(HeaderDensity::from_offset(scroll_offset()));

    let watch = ScrollWatch::attach(&BrowserWindow, move |value| set_density.set(value));
    on_cleanup(move || watch.release());

    density
}
