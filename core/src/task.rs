//! Cooperative task spawning for the UI thread.
//!
//! The toolkit runs on one thread: an application owns a
//! [`LocalPool`](futures::executor::LocalPool), installs its [`Spawner`]
//! into the root [`Environment`], and drives the pool from its event loop.
//! Views start asynchronous work (form submissions, fetches) through
//! [`spawn`] and [`spawn_fallible`]; nothing here is `Send`.

use std::future::Future;

use futures::executor::LocalSpawner;
use futures::task::LocalSpawnExt;

use crate::{Environment, Error, error};

/// A handle for spawning futures onto the application's local executor.
#[derive(Clone, Debug)]
pub struct Spawner {
    inner: LocalSpawner,
}

impl Spawner {
    /// Wraps the spawner of the application's [`LocalPool`](futures::executor::LocalPool).
    #[must_use]
    pub fn new(inner: LocalSpawner) -> Self {
        Self { inner }
    }

    /// Spawns a future onto the local executor.
    pub fn spawn(&self, future: impl Future<Output = ()> + 'static) {
        if let Err(error) = self.inner.spawn_local(future) {
            tracing::error!(error = %error, "failed to spawn onto the local executor");
        }
    }
}

/// Spawns `future` onto the environment's [`Spawner`].
///
/// Logs and drops the future when no spawner is installed.
pub fn spawn(env: &Environment, future: impl Future<Output = ()> + 'static) {
    match env.get::<Spawner>() {
        Some(spawner) => spawner.spawn(future),
        None => tracing::error!("no task spawner installed in the environment"),
    }
}

/// Spawns a fallible future, forwarding its error to the environment's
/// [`ErrorBoundary`](crate::ErrorBoundary).
///
/// This is the single place where errors leave the asynchronous world: the
/// spawning view does not see them, matching the contract that submission
/// failures propagate unhandled out of components.
pub fn spawn_fallible<E>(env: &Environment, future: impl Future<Output = Result<(), E>> + 'static)
where
    E: Into<Error>,
{
    let scope = env.clone();
    spawn(env, async move {
        if let Err(err) = future.await {
            error::report(&scope, err.into());
        }
    });
}
