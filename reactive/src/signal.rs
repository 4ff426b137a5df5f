//! The [`Signal`] abstraction unifying bindings and computed values.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString};

use crate::binding::Binding;
use crate::compute::{Computed, ComputeCore};
use crate::watcher::WatcherGuard;

/// A value that can be read now and observed for future changes.
pub trait Signal: Clone + 'static {
    /// The type of value this signal yields.
    type Output: 'static;

    /// Returns the current value.
    fn get(&self) -> Self::Output;

    /// Registers a watcher called with each new value.
    fn watch(&self, watcher: impl Fn(&Self::Output) + 'static) -> WatcherGuard;
}

impl<T: Clone + 'static> Signal for Binding<T> {
    type Output = T;

    fn get(&self) -> T {
        Binding::get(self)
    }

    fn watch(&self, watcher: impl Fn(&T) + 'static) -> WatcherGuard {
        Binding::watch(self, watcher)
    }
}

impl<T: 'static> Signal for Computed<T> {
    type Output = T;

    fn get(&self) -> T {
        Computed::get(self)
    }

    fn watch(&self, watcher: impl Fn(&T) + 'static) -> WatcherGuard {
        Computed::watch(self, watcher)
    }
}

struct MapCore<S: Signal, U> {
    source: S,
    map: Rc<dyn Fn(S::Output) -> U>,
}

impl<S, U> ComputeCore<U> for MapCore<S, U>
where
    S: Signal,
    S::Output: Clone,
    U: 'static,
{
    fn get(&self) -> U {
        (self.map)(self.source.get())
    }

    fn watch(&self, watcher: Box<dyn Fn(&U)>) -> WatcherGuard {
        let map = self.map.clone();
        self.source
            .watch(move |value| watcher(&map(value.clone())))
    }
}

struct ReadOnly<S>(S);

impl<S: Signal> ComputeCore<S::Output> for ReadOnly<S> {
    fn get(&self) -> S::Output {
        self.0.get()
    }

    fn watch(&self, watcher: Box<dyn Fn(&S::Output)>) -> WatcherGuard {
        self.0.watch(move |value| watcher(value))
    }
}

/// Combinators available on every [`Signal`].
pub trait SignalExt: Signal {
    /// Derives a signal by applying `map` to every value of `self`.
    fn map<U, F>(self, map: F) -> Computed<U>
    where
        Self::Output: Clone,
        U: 'static,
        F: Fn(Self::Output) -> U + 'static,
    {
        Computed::from_core(Rc::new(MapCore {
            source: self,
            map: Rc::new(map),
        }))
    }

    /// Erases this signal into a read-only [`Computed`] handle.
    fn computed(self) -> Computed<Self::Output> {
        Computed::from_core(Rc::new(ReadOnly(self)))
    }
}

impl<S: Signal> SignalExt for S {}

/// Conversion into a [`Computed`], accepting both signals and plain values.
pub trait IntoComputed<T: 'static>: Sized {
    /// Performs the conversion.
    fn into_computed(self) -> Computed<T>;
}

impl<T: 'static> IntoComputed<T> for Computed<T> {
    fn into_computed(self) -> Computed<T> {
        self
    }
}

impl<T: Clone + 'static> IntoComputed<T> for Binding<T> {
    fn into_computed(self) -> Computed<T> {
        self.computed()
    }
}

impl<T: Clone + 'static> IntoComputed<T> for &Binding<T> {
    fn into_computed(self) -> Computed<T> {
        self.clone().computed()
    }
}

impl IntoComputed<String> for String {
    fn into_computed(self) -> Computed<String> {
        Computed::constant(self)
    }
}

impl IntoComputed<String> for &str {
    fn into_computed(self) -> Computed<String> {
        Computed::constant(self.to_string())
    }
}

impl IntoComputed<bool> for bool {
    fn into_computed(self) -> Computed<bool> {
        Computed::constant(self)
    }
}
