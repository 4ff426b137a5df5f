//! Read-only derived signals.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::any::type_name;
use core::fmt;

use crate::watcher::WatcherGuard;

pub(crate) trait ComputeCore<T> {
    fn get(&self) -> T;
    fn watch(&self, watcher: Box<dyn Fn(&T)>) -> WatcherGuard;
}

/// A read-only reactive value of type `T`.
///
/// A `Computed` is produced by deriving from other signals (see
/// [`SignalExt::map`](crate::SignalExt::map), [`Store::select`](crate::Store::select))
/// or by wrapping a constant. It can be read at any time and watched for
/// changes; it offers no way to write.
pub struct Computed<T> {
    core: Rc<dyn ComputeCore<T>>,
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<T> fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<Self>())
    }
}

struct Constant<T>(T);

impl<T: Clone> ComputeCore<T> for Constant<T> {
    fn get(&self) -> T {
        self.0.clone()
    }

    fn watch(&self, _watcher: Box<dyn Fn(&T)>) -> WatcherGuard {
        WatcherGuard::noop()
    }
}

impl<T: 'static> Computed<T> {
    pub(crate) fn from_core(core: Rc<dyn ComputeCore<T>>) -> Self {
        Self { core }
    }

    /// A signal that always yields `value` and never notifies.
    #[must_use]
    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_core(Rc::new(Constant(value)))
    }

    /// Returns the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.core.get()
    }

    /// Registers a watcher called whenever the value changes.
    pub fn watch(&self, watcher: impl Fn(&T) + 'static) -> WatcherGuard {
        self.core.watch(Box::new(watcher))
    }
}

impl<T: Clone + Default + 'static> Default for Computed<T> {
    fn default() -> Self {
        Self::constant(T::default())
    }
}
