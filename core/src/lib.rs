//! Core plumbing for the Moneta view toolkit.
//!
//! This crate defines the pieces every component crate builds on:
//!
//! - [`View`] — declarative view composition via `body`,
//! - [`Environment`] — the typed context map views are resolved against,
//! - [`Hook`] — backend interception of leaf configurations,
//! - [`handler`] — boxed action callbacks carried inside view configs,
//! - [`task`] — cooperative single-threaded task spawning,
//! - [`error`] — the error boundary that receives failures escaping
//!   spawned work.
//!
//! There is deliberately no rendering backend here. Leaf views surface as
//! [`Native`] configurations; whoever drives [`render`](render::render)
//! (a real backend, or a test installing [`Hook`]s) decides what they mean.

#[macro_use]
mod macros;

pub mod env;
pub mod error;
pub mod handler;
pub mod render;
pub mod task;
pub mod view;

pub use moneta_reactive as reactive;

pub use anyhow::Error;
pub use env::Environment;
pub use error::ErrorBoundary;
pub use view::{AnyView, ConfigurableView, Hook, Native, NativeView, TupleViews, View};
