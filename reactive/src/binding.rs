//! Shared mutable state with change notification.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use crate::watcher::{WatcherGuard, Watchers};

pub(crate) trait BindingCore<T> {
    fn get(&self) -> T;
    fn set(&self, value: T);
    fn watch(&self, watcher: Box<dyn Fn(&T)>) -> WatcherGuard;
}

/// A two-way binding to a value of type `T`.
///
/// Bindings are cheaply cloneable handles to shared state. Writing through
/// any handle notifies every watcher registered on any clone. A binding to a
/// struct can be narrowed to one of its fields with [`project`](Self::project),
/// which yields a binding that reads and writes through the parent while
/// only notifying when the projected field actually changes.
pub struct Binding<T> {
    core: Rc<dyn BindingCore<T>>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.core.get()).finish()
    }
}

struct Container<T> {
    value: RefCell<T>,
    watchers: Watchers<T>,
}

impl<T: Clone + 'static> BindingCore<T> for Container<T> {
    fn get(&self) -> T {
        self.value.borrow().clone()
    }

    fn set(&self, value: T) {
        *self.value.borrow_mut() = value.clone();
        // Notify with an owned snapshot so a watcher may write back
        // without hitting an outstanding borrow.
        self.watchers.notify(&value);
    }

    fn watch(&self, watcher: Box<dyn Fn(&T)>) -> WatcherGuard {
        self.watchers.register(move |value| watcher(value))
    }
}

struct Projection<P, T> {
    parent: Binding<P>,
    read: Rc<dyn Fn(&P) -> T>,
    write: Rc<dyn Fn(&mut P, T)>,
}

impl<P, T> BindingCore<T> for Projection<P, T>
where
    P: 'static,
    T: Clone + PartialEq + 'static,
{
    fn get(&self) -> T {
        (self.read)(&self.parent.get())
    }

    fn set(&self, value: T) {
        let write = self.write.clone();
        self.parent.update(move |parent| write(parent, value));
    }

    fn watch(&self, watcher: Box<dyn Fn(&T)>) -> WatcherGuard {
        let read = self.read.clone();
        let last = RefCell::new(self.get());
        self.parent.watch(move |parent| {
            let next = read(parent);
            if *last.borrow() != next {
                *last.borrow_mut() = next.clone();
                watcher(&next);
            }
        })
    }
}

impl<T: Clone + 'static> Binding<T> {
    /// Creates a binding owning its own storage, initialized with `value`.
    #[must_use]
    pub fn container(value: T) -> Self {
        Self {
            core: Rc::new(Container {
                value: RefCell::new(value),
                watchers: Watchers::new(),
            }),
        }
    }
}

impl<T> Binding<T> {
    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.core.get()
    }

    /// Replaces the current value and notifies watchers.
    pub fn set(&self, value: T) {
        self.core.set(value);
    }

    /// Mutates the current value in place and notifies watchers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut value = self.core.get();
        f(&mut value);
        self.core.set(value);
    }

    /// Registers a watcher called with the new value after every write.
    pub fn watch(&self, watcher: impl Fn(&T) + 'static) -> WatcherGuard {
        self.core.watch(Box::new(watcher))
    }
}

impl<T: 'static> Binding<T> {
    /// Narrows this binding to a single field.
    ///
    /// `read` extracts the field, `write` stores it back. The projected
    /// binding notifies its watchers only when the extracted value changes,
    /// so writes to sibling fields of the parent stay invisible to it.
    pub fn project<U>(
        &self,
        read: impl Fn(&T) -> U + 'static,
        write: impl Fn(&mut T, U) + 'static,
    ) -> Binding<U>
    where
        U: Clone + PartialEq + 'static,
    {
        Binding {
            core: Rc::new(Projection {
                parent: self.clone(),
                read: Rc::new(read),
                write: Rc::new(write),
            }),
        }
    }
}

impl<T: Clone + Default + 'static> Default for Binding<T> {
    fn default() -> Self {
        Self::container(T::default())
    }
}

/// Shorthand for [`Binding::container`].
pub fn binding<T: Clone + 'static>(value: T) -> Binding<T> {
    Binding::container(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Profile {
        name: String,
        age: u32,
    }

    #[test]
    fn set_notifies_watchers_with_new_value() {
        let value = binding(1);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _guard = value.watch({
            let seen = seen.clone();
            move |v: &i32| seen.borrow_mut().push(*v)
        });
        value.set(2);
        value.update(|v| *v += 3);

        assert_eq!(value.get(), 5);
        assert_eq!(*seen.borrow(), [2, 5]);
    }

    #[test]
    fn projection_reads_and_writes_through_parent() {
        let profile = binding(Profile::default());
        let name = profile.project(|p| p.name.clone(), |p, name| p.name = name);

        name.set("Ada".to_string());
        assert_eq!(profile.get().name, "Ada");

        profile.update(|p| p.name = "Grace".to_string());
        assert_eq!(name.get(), "Grace");
    }

    #[test]
    fn projection_ignores_sibling_field_writes() {
        let profile = binding(Profile::default());
        let name = profile.project(|p| p.name.clone(), |p, name| p.name = name);
        let notified = Rc::new(RefCell::new(0));

        let _guard = name.watch({
            let notified = notified.clone();
            move |_: &String| *notified.borrow_mut() += 1
        });

        profile.update(|p| p.age = 30);
        assert_eq!(*notified.borrow(), 0);

        profile.update(|p| p.name = "Ada".to_string());
        assert_eq!(*notified.borrow(), 1);
    }
}
