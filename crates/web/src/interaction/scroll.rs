// =============================================================================
// IgniteX Web - Scroll Watch
// =============================================================================
// Table of Contents:
// 1. Listener Seams
// 2. Scroll Watch Guard
// =============================================================================

use super::density::HeaderDensity;

// -----------------------------------------------------------------------------
// 1. Listener Seams
// -----------------------------------------------------------------------------

/// A registered listener that can be torn down.
pub trait ListenerRegistration {
    fn remove(self);
}

/// Something that emits vertical scroll offsets (the browser window in
/// production).
pub trait ScrollTarget {
    type Registration: ListenerRegistration;

    /// Register `handler` to receive the scroll offset on every scroll event.
    fn listen(&self, handler: Box<dyn Fn(f64)>) -> Self::Registration;
}

// -----------------------------------------------------------------------------
// 2. Scroll Watch Guard
// -----------------------------------------------------------------------------

/// Scoped scroll subscription feeding header density.
///
/// The listener lives exactly as long as the guard: `release` or drop removes
/// it, after which no handler fires. Every event is forwarded, including ones
/// that leave the density unchanged.
pub struct ScrollWatch<R: ListenerRegistration> {
    registration: Option<R>,
}

impl<R: ListenerRegistration> ScrollWatch<R> {
    /// Subscribe to `target`, calling `on_density` with the density derived
    /// from each scroll event.
    pub fn attach<T, F>(target: &T, on_density: F) -> Self
    where
        T: ScrollTarget<Registration = R>,
        F: Fn(HeaderDensity) + 'static,
    {
        let registration = target.listen(Box::new(move |offset| {
            on_density(HeaderDensity::from_offset(offset))
        }));
        log::debug!("Scroll watch attached");
        Self {
            registration: Some(registration),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.registration.is_some()
    }

    /// Remove the listener now.
    pub fn release(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.remove();
            log::debug!("Scroll watch released");
        }
    }
}

impl<R: ListenerRegistration> Drop for ScrollWatch<R> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Slots = Rc<RefCell<Vec<Option<Box<dyn Fn(f64)>>>>>;

    #[derive(Default)]
    struct FakeWindow {
        handlers: Slots,
    }

    impl FakeWindow {
        fn scroll_to(&self, offset: f64) {
            for handler in self.handlers.borrow().iter().flatten() {
                handler(offset);
            }
        }

        fn live_listeners(&self) -> usize {
            self.handlers.borrow().iter().filter(|h| h.is_some()).count()
        }
    }

    struct FakeRegistration {
        slot: usize,
        handlers: Slots,
    }

    impl ListenerRegistration for FakeRegistration {
        fn remove(self) {
            self.handlers.borrow_mut()[self.slot] = None;
        }
    }

    impl ScrollTarget for FakeWindow {
        type Registration = FakeRegistration;

        fn listen(&self, handler: Box<dyn Fn(f64)>) -> FakeRegistration {
            let mut handlers = self.handlers.borrow_mut();
            handlers.push(Some(handler));
            FakeRegistration {
                slot: handlers.len() - 1,
                handlers: self.handlers.clone(),
            }
        }
    }

    fn recorder() -> (Rc<Cell<HeaderDensity>>, Rc<Cell<usize>>, impl Fn(HeaderDensity)) {
        let density = Rc::new(Cell::new(HeaderDensity::Expanded));
        let writes = Rc::new(Cell::new(0));
        let (d, w) = (density.clone(), writes.clone());
        (density, writes, move |value| {
            d.set(value);
            w.set(w.get() + 1);
        })
    }

    #[test]
    fn test_scroll_events_drive_density() {
        let window = FakeWindow::default();
        let (density, _, on_density) = recorder();
        let _watch = ScrollWatch::attach(&window, on_density);

        window.scroll_to(31.0);
        assert_eq!(density.get(), HeaderDensity::Compact);
        window.scroll_to(30.0);
        assert_eq!(density.get(), HeaderDensity::Expanded);
    }

    #[test]
    fn test_redundant_writes_are_forwarded() {
        let window = FakeWindow::default();
        let (density, writes, on_density) = recorder();
        let _watch = ScrollWatch::attach(&window, on_density);

        window.scroll_to(80.0);
        window.scroll_to(90.0);
        window.scroll_to(100.0);
        assert_eq!(writes.get(), 3);
        assert_eq!(density.get(), HeaderDensity::Compact);
    }

    #[test]
    fn test_drop_removes_listener() {
        let window = FakeWindow::default();
        let (density, writes, on_density) = recorder();
        {
            let watch = ScrollWatch::attach(&window, on_density);
            assert!(watch.is_attached());
            assert_eq!(window.live_listeners(), 1);
        }

        assert_eq!(window.live_listeners(), 0);
        window.scroll_to(500.0);
        assert_eq!(writes.get(), 0);
        assert_eq!(density.get(), HeaderDensity::Expanded);
    }

    #[test]
    fn test_release_removes_listener() {
        let window = FakeWindow::default();
        let (_, writes, on_density) = recorder();
        let watch = ScrollWatch::attach(&window, on_density);

        window.scroll_to(40.0);
        watch.release();
        window.scroll_to(0.0);

        assert_eq!(window.live_listeners(), 0);
        assert_eq!(writes.get(), 1);
    }
}
