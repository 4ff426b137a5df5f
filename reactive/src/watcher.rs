//! Watcher registration and RAII-based removal.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

type WatcherFn<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    entries: RefCell<BTreeMap<u64, WatcherFn<T>>>,
    next: Cell<u64>,
}

/// A set of watchers observing values of type `T`.
///
/// Registering returns a [`WatcherGuard`]; dropping the guard removes the
/// watcher. Notification iterates over a snapshot, so a watcher may register
/// or remove watchers while being notified.
pub struct Watchers<T> {
    registry: Rc<Registry<T>>,
}

impl<T> Clone for Watchers<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<T> fmt::Debug for Watchers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Watchers")
            .field("len", &self.registry.entries.borrow().len())
            .finish()
    }
}

impl<T> Default for Watchers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Watchers<T> {
    /// Creates an empty watcher set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Rc::new(Registry {
                entries: RefCell::new(BTreeMap::new()),
                next: Cell::new(0),
            }),
        }
    }

    /// Returns the number of registered watchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.entries.borrow().len()
    }

    /// Returns `true` if no watcher is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: 'static> Watchers<T> {
    /// Registers a watcher and returns the guard that keeps it alive.
    pub fn register(&self, watcher: impl Fn(&T) + 'static) -> WatcherGuard {
        let id = self.registry.next.get();
        self.registry.next.set(id + 1);
        self.registry
            .entries
            .borrow_mut()
            .insert(id, Rc::new(watcher));

        let registry = Rc::downgrade(&self.registry);
        WatcherGuard::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.entries.borrow_mut().remove(&id);
            }
        })
    }

    /// Calls every registered watcher with `value`.
    pub fn notify(&self, value: &T) {
        let snapshot: Vec<WatcherFn<T>> =
            self.registry.entries.borrow().values().cloned().collect();
        log::trace!("notifying {} watcher(s)", snapshot.len());
        for watcher in snapshot {
            watcher(value);
        }
    }
}

/// Removes the associated watcher when dropped.
///
/// Call [`leak`](WatcherGuard::leak) to keep the watcher registered for the
/// lifetime of its source instead.
pub struct WatcherGuard {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl WatcherGuard {
    pub(crate) fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A guard that does nothing when dropped, for sources that never change.
    #[must_use]
    pub const fn noop() -> Self {
        Self { cancel: None }
    }

    /// Disarms the guard, leaving the watcher registered permanently.
    pub fn leak(mut self) {
        self.cancel = None;
    }
}

impl fmt::Debug for WatcherGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatcherGuard")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

impl Drop for WatcherGuard {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
