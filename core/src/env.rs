//! The environment views are resolved against.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A typed, heterogeneous context map.
///
/// Each type has at most one entry; installing a value replaces any previous
/// value of the same type. Environments are cheap to clone (the values are
/// reference-counted) and are passed down the view tree by value, so a view
/// may extend its children's environment without affecting siblings.
#[derive(Default, Clone)]
pub struct Environment {
    values: HashMap<TypeId, Rc<dyn Any>>,
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("entries", &self.values.len())
            .finish()
    }
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `value`, keyed by its type.
    pub fn install<T: 'static>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Rc::new(value));
    }

    /// Builder-style [`install`](Self::install).
    #[must_use]
    pub fn with<T: 'static>(mut self, value: T) -> Self {
        self.install(value);
        self
    }

    /// Looks up the value of type `T`, if one is installed.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref())
    }

    /// Returns `true` if a value of type `T` is installed.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<T>())
    }
}
