use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex, Weak,
};

/// Flips the navbar presentation once the page has scrolled `threshold` px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSwitch {
    pub threshold: f64,
}

impl Default for ScrollSwitch {
    fn default() -> Self {
        Self { threshold: 50.0 }
    }
}

impl ScrollSwitch {
    pub fn is_scrolled(&self, offset_y: f64) -> bool {
        offset_y >= self.threshold
    }
}

type Listener = Arc<dyn Fn(f64) + Send + Sync>;

#[derive(Default)]
struct HubInner {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(u64, Listener)>>,
}

/// Fans the page's vertical scroll offset out to scoped listeners.
///
/// There is one window-level scroll listener per page; components subscribe
/// here and hold on to the returned [`Subscription`] for as long as they are
/// mounted.
#[derive(Clone, Default)]
pub struct ScrollHub {
    inner: Arc<HubInner>,
}

impl std::fmt::Debug for ScrollHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ScrollHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(f64) + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .lock()
            .expect("should be able to lock scroll listeners")
            .push((id, Arc::new(listener)));
        Subscription {
            hub: Arc::downgrade(&self.inner),
            id,
        }
    }

    pub fn publish(&self, offset_y: f64) {
        // snapshot so listeners may unsubscribe while being notified
        let listeners = self
            .inner
            .listeners
            .lock()
            .expect("should be able to lock scroll listeners")
            .iter()
            .map(|(_, l)| l.clone())
            .collect::<Vec<_>>();
        for listener in listeners {
            listener(offset_y);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner
            .listeners
            .lock()
            .expect("should be able to lock scroll listeners")
            .len()
    }
}

/// Registration handle for a [`ScrollHub`] listener; unregisters on drop.
#[must_use = "dropping a Subscription immediately unregisters the listener"]
#[derive(Debug)]
pub struct Subscription {
    hub: Weak<HubInner>,
    id: u64,
}

impl Subscription {
    /// Releases the listener now; the unregistering itself happens in `Drop`.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            if let Ok(mut listeners) = hub.listeners.lock() {
                listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavbarState {
    switch: ScrollSwitch,
    scrolled: Arc<AtomicBool>,
}

impl NavbarState {
    pub fn new(switch: ScrollSwitch) -> Self {
        Self {
            switch,
            scrolled: Arc::default(),
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.load(Ordering::Relaxed)
    }

    /// Tracks `hub` until the returned subscription is released. `on_change`
    /// only fires when the flag actually flips.
    pub fn attach(
        &self,
        hub: &ScrollHub,
        on_change: impl Fn(bool) + Send + Sync + 'static,
    ) -> Subscription {
        let switch = self.switch;
        let scrolled = self.scrolled.clone();
        hub.subscribe(move |offset_y| {
            let now = switch.is_scrolled(offset_y);
            if scrolled.swap(now, Ordering::Relaxed) != now {
                on_change(now);
            }
        })
    }

    pub fn classes(&self) -> &'static str {
        Self::classes_for(self.is_scrolled())
    }

    pub fn classes_for(scrolled: bool) -> &'static str {
        if scrolled {
            "backdrop-blur-md bg-white/80 shadow-lg"
        } else {
            "backdrop-blur-sm bg-white/60"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_switch_threshold_sequence() {
        let switch = ScrollSwitch::default();
        let flags = [0.0, 49.0, 50.0, 51.0, 10.0]
            .into_iter()
            .map(|y| switch.is_scrolled(y))
            .collect::<Vec<_>>();
        assert_eq!(flags, vec![false, false, true, true, false]);
    }

    #[test]
    fn test_navbar_follows_hub() {
        let hub = ScrollHub::new();
        let navbar = NavbarState::default();
        let _sub = navbar.attach(&hub, |_| {});
        let mut seen = Vec::new();
        for y in [0.0, 49.0, 50.0, 51.0, 10.0] {
            hub.publish(y);
            seen.push(navbar.is_scrolled());
        }
        assert_eq!(seen, vec![false, false, true, true, false]);
    }

    #[test]
    fn test_on_change_only_on_flip() {
        let hub = ScrollHub::new();
        let navbar = NavbarState::default();
        let flips = Arc::new(AtomicUsize::new(0));
        let counter = flips.clone();
        let _sub = navbar.attach(&hub, move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
        });
        for y in [0.0, 10.0, 60.0, 70.0, 80.0, 20.0, 5.0] {
            hub.publish(y);
        }
        assert_eq!(flips.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_no_mutation_after_release() {
        let hub = ScrollHub::new();
        let navbar = NavbarState::default();
        let sub = navbar.attach(&hub, |_| {});
        hub.publish(100.0);
        assert!(navbar.is_scrolled());
        assert_eq!(hub.listener_count(), 1);

        sub.cancel();
        assert_eq!(hub.listener_count(), 0);
        hub.publish(0.0);
        hub.publish(10.0);
        assert!(navbar.is_scrolled());
    }

    #[test]
    fn test_subscriptions_are_independent() {
        let hub = ScrollHub::new();
        let a = NavbarState::default();
        let b = NavbarState::new(ScrollSwitch { threshold: 200.0 });
        let sub_a = a.attach(&hub, |_| {});
        let _sub_b = b.attach(&hub, |_| {});
        hub.publish(100.0);
        assert!(a.is_scrolled());
        assert!(!b.is_scrolled());

        drop(sub_a);
        assert_eq!(hub.listener_count(), 1);
        hub.publish(300.0);
        assert!(b.is_scrolled());
    }

    #[test]
    fn test_subscription_outlives_hub() {
        let navbar = NavbarState::default();
        let sub = {
            let hub = ScrollHub::new();
            navbar.attach(&hub, |_| {})
        };
        // hub is gone, dropping must not panic
        drop(sub);
    }

    #[test]
    fn test_classes() {
        assert_eq!(
            NavbarState::classes_for(true),
            "backdrop-blur-md bg-white/80 shadow-lg"
        );
        assert_eq!(NavbarState::default().classes(), "backdrop-blur-sm bg-white/60");
    }
}
