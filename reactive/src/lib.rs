#![no_std]
//! Reactive primitives for Moneta.
//!
//! Everything in this crate is single-threaded by design: the UI runs on one
//! event thread, so state is shared with [`Rc`](alloc::rc::Rc) and observed
//! through plain closures. Three building blocks cover the whole toolkit:
//!
//! - [`Binding`] — shared mutable state with change notification and
//!   field-level [projection](Binding::project),
//! - [`Computed`] — a read-only signal derived from other signals,
//! - [`Store`] — a state container observed through *selectors*, where a
//!   subscription fires only when its selected slice actually changes.
//!
//! The selector store is what lets a view depend on a single field of a
//! broader shared context without re-rendering on unrelated mutations.

extern crate alloc;

pub mod binding;
pub mod compute;
pub mod signal;
pub mod store;
pub mod watcher;

pub use binding::{Binding, binding};
pub use compute::Computed;
pub use signal::{IntoComputed, Signal, SignalExt};
pub use store::Store;
pub use watcher::{WatcherGuard, Watchers};
