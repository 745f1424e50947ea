//! Scoped ownership of event-listener registrations.
//!
//! [`ScrollSubscription`] owns a listener handle from the moment it is
//! registered and releases it exactly once: either explicitly through
//! [`ScrollSubscription::release`] or when the guard is dropped (component
//! cleanup, or unwinding).

/// A registered listener that can be removed from its event target.
pub trait ListenerHandle {
    /// Deregister the listener. Consumes the handle so it cannot run twice.
    fn release(self);
}

/// Guard around a live scroll listener.
#[must_use = "dropping the subscription immediately removes the listener"]
pub struct ScrollSubscription<H: ListenerHandle> {
    handle: Option<H>,
}

impl<H: ListenerHandle> ScrollSubscription<H> {
    pub fn new(handle: H) -> Self {
        tracing::debug!("scroll listener attached");
        Self {
            handle: Some(handle),
        }
    }

    #[cfg(test)]
    fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Remove the listener now.
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.release();
            tracing::debug!("scroll listener released");
        }
    }
}

impl<H: ListenerHandle> Drop for ScrollSubscription<H> {
    fn drop(&mut self) {
        self.release_inner();
    }
}

/// Hand the subscription to the current reactive owner. The listener stays
/// registered until that owner is cleaned up (the component unmounts).
pub fn release_on_cleanup<H>(subscription: ScrollSubscription<H>)
where
    H: ListenerHandle + Send + Sync + 'static,
{
    leptos::prelude::on_cleanup(move || subscription.release());
}

#[cfg(feature = "csr")]
impl ListenerHandle for leptos::prelude::WindowListenerHandle {
    fn release(self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI32, AtomicU32, Ordering};

    /// Stand-in for the window: counts live registrations and removals.
    #[derive(Default)]
    struct FakeTarget {
        live: Rc<Cell<i32>>,
        removals: Rc<Cell<u32>>,
    }

    struct FakeHandle {
        live: Rc<Cell<i32>>,
        removals: Rc<Cell<u32>>,
    }

    impl FakeTarget {
        fn attach(&self) -> FakeHandle {
            self.live.set(self.live.get() + 1);
            FakeHandle {
                live: Rc::clone(&self.live),
                removals: Rc::clone(&self.removals),
            }
        }
    }

    impl ListenerHandle for FakeHandle {
        fn release(self) {
            self.live.set(self.live.get() - 1);
            self.removals.set(self.removals.get() + 1);
        }
    }

    #[test]
    fn drop_releases_once() {
        let target = FakeTarget::default();
        {
            let sub = ScrollSubscription::new(target.attach());
            assert!(sub.is_active());
            assert_eq!(target.live.get(), 1);
        }
        assert_eq!(target.live.get(), 0);
        assert_eq!(target.removals.get(), 1);
    }

    #[test]
    fn explicit_release_is_not_repeated_on_drop() {
        let target = FakeTarget::default();
        let sub = ScrollSubscription::new(target.attach());
        sub.release();
        assert_eq!(target.live.get(), 0);
        assert_eq!(target.removals.get(), 1);
    }

    #[test]
    fn mount_cycles_do_not_leak() {
        let target = FakeTarget::default();
        for _ in 0..10 {
            let sub = ScrollSubscription::new(target.attach());
            assert_eq!(target.live.get(), 1);
            drop(sub);
        }
        assert_eq!(target.live.get(), 0);
        assert_eq!(target.removals.get(), 10);
    }

    #[test]
    fn unwinding_still_releases() {
        let target = FakeTarget::default();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _sub = ScrollSubscription::new(target.attach());
            panic!("render failed");
        }));
        assert!(result.is_err());
        assert_eq!(target.live.get(), 0);
        assert_eq!(target.removals.get(), 1);
    }

    /// Thread-safe counterpart of [`FakeHandle`], as `on_cleanup` needs `Send + Sync`.
    #[derive(Default, Clone)]
    struct SharedTarget {
        live: Arc<AtomicI32>,
        removals: Arc<AtomicU32>,
    }

    struct SharedHandle(SharedTarget);

    impl SharedTarget {
        fn attach(&self) -> SharedHandle {
            self.live.fetch_add(1, Ordering::SeqCst);
            SharedHandle(self.clone())
        }
    }

    impl ListenerHandle for SharedHandle {
        fn release(self) {
            self.0.live.fetch_sub(1, Ordering::SeqCst);
            self.0.removals.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn listener_lives_until_owner_cleanup() {
        let target = SharedTarget::default();
        let owner = Owner::new();
        owner.with(|| release_on_cleanup(ScrollSubscription::new(target.attach())));

        assert_eq!(target.live.load(Ordering::SeqCst), 1);
        assert_eq!(target.removals.load(Ordering::SeqCst), 0);

        owner.cleanup();
        assert_eq!(target.live.load(Ordering::SeqCst), 0);
        assert_eq!(target.removals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn owner_mount_cycles_release_once_each() {
        let target = SharedTarget::default();
        for cycle in 1..=10 {
            let owner = Owner::new();
            owner.with(|| release_on_cleanup(ScrollSubscription::new(target.attach())));
            assert_eq!(target.live.load(Ordering::SeqCst), 1);

            owner.cleanup();
            assert_eq!(target.live.load(Ordering::SeqCst), 0);
            assert_eq!(target.removals.load(Ordering::SeqCst), cycle);
        }
    }
}
