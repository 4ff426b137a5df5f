//! A shared state container observed through selector subscriptions.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::compute::{Computed, ComputeCore};
use crate::watcher::{WatcherGuard, Watchers};

trait Recompute<T> {
    fn recompute(&self, state: &T);
}

struct Selector<T, U> {
    read: Rc<dyn Fn(&T) -> U>,
    current: RefCell<U>,
    watchers: Watchers<U>,
}

impl<T, U> Recompute<T> for Selector<T, U>
where
    U: Clone + PartialEq + 'static,
{
    fn recompute(&self, state: &T) {
        let next = (self.read)(state);
        if *self.current.borrow() == next {
            return;
        }
        *self.current.borrow_mut() = next.clone();
        self.watchers.notify(&next);
    }
}

impl<T, U> ComputeCore<U> for Selector<T, U>
where
    U: Clone + PartialEq + 'static,
{
    fn get(&self) -> U {
        self.current.borrow().clone()
    }

    fn watch(&self, watcher: Box<dyn Fn(&U)>) -> WatcherGuard {
        self.watchers.register(move |value| watcher(value))
    }
}

struct StoreInner<T> {
    state: RefCell<T>,
    selectors: RefCell<Vec<Weak<dyn Recompute<T>>>>,
}

/// Shared application state with field-level subscriptions.
///
/// A `Store` holds one value and hands out [`Computed`] slices of it via
/// [`select`](Self::select). After every [`update`](Self::update), each live
/// selector re-reads its slice and notifies its watchers **only if the slice
/// compares unequal to its previous value**. Observers of one field therefore
/// never fire for writes to unrelated fields, which is what allows a view to
/// subscribe to a single entry of a broad context without re-rendering on
/// every mutation of it.
///
/// Updates must not be re-entrant: a selector watcher may read the store but
/// must not call `update` from inside its callback.
pub struct Store<T> {
    inner: Rc<StoreInner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.inner.state.borrow())
            .field("selectors", &self.inner.selectors.borrow().len())
            .finish()
    }
}

impl<T: 'static> Store<T> {
    /// Creates a store owning `state`.
    #[must_use]
    pub fn new(state: T) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                state: RefCell::new(state),
                selectors: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Reads the current state without subscribing.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Mutates the state, then re-evaluates every live selector.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.state.borrow_mut());
        log::trace!("store updated, re-evaluating selectors");

        // Snapshot the live selectors before running callbacks so a watcher
        // may register new selectors while being notified.
        let live: Vec<Rc<dyn Recompute<T>>> = {
            let mut selectors = self.inner.selectors.borrow_mut();
            selectors.retain(|weak| weak.strong_count() > 0);
            selectors.iter().filter_map(Weak::upgrade).collect()
        };
        let state = self.inner.state.borrow();
        for selector in live {
            selector.recompute(&state);
        }
    }

    /// Subscribes to a slice of the state.
    ///
    /// The returned signal yields `read(&state)` and notifies only when that
    /// value changes between updates, judged by `PartialEq`. The subscription
    /// lives as long as the returned [`Computed`] (or a clone of it) does.
    pub fn select<U>(&self, read: impl Fn(&T) -> U + 'static) -> Computed<U>
    where
        U: Clone + PartialEq + 'static,
    {
        let read: Rc<dyn Fn(&T) -> U> = Rc::new(read);
        let current = read(&self.inner.state.borrow());
        let selector = Rc::new(Selector {
            read,
            current: RefCell::new(current),
            watchers: Watchers::new(),
        });

        let dynamic: Rc<dyn Recompute<T>> = selector.clone();
        self.inner
            .selectors
            .borrow_mut()
            .push(Rc::downgrade(&dynamic));

        Computed::from_core(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use core::cell::Cell;

    #[derive(Debug, Default)]
    struct AppState {
        user: String,
        visits: u32,
    }

    #[test]
    fn selector_sees_initial_and_updated_values() {
        let store = Store::new(AppState::default());
        let visits = store.select(|s| s.visits);
        assert_eq!(visits.get(), 0);

        store.update(|s| s.visits = 3);
        assert_eq!(visits.get(), 3);
    }

    #[test]
    fn selector_ignores_unrelated_updates() {
        let store = Store::new(AppState::default());
        let user = store.select(|s| s.user.clone());
        let fired = Rc::new(Cell::new(0));

        let _guard = user.watch({
            let fired = fired.clone();
            move |_: &String| fired.set(fired.get() + 1)
        });

        store.update(|s| s.visits += 1);
        store.update(|s| s.visits += 1);
        assert_eq!(fired.get(), 0, "unrelated writes must not notify");

        store.update(|s| s.user = "ada".to_string());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn dropped_selector_is_pruned() {
        let store = Store::new(AppState::default());
        let user = store.select(|s| s.user.clone());
        drop(user);

        store.update(|s| s.user = "ada".to_string());
        assert!(store.inner.selectors.borrow().is_empty());
    }

    #[test]
    fn equal_slices_do_not_notify() {
        let store = Store::new(AppState::default());
        let user = store.select(|s| s.user.clone());
        let fired = Rc::new(Cell::new(0));

        let _guard = user.watch({
            let fired = fired.clone();
            move |_: &String| fired.set(fired.get() + 1)
        });

        // Writing the same value is not a change.
        store.update(|s| s.user = String::new());
        assert_eq!(fired.get(), 0);
    }
}
