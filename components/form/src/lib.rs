//! Form state and submission.
//!
//! A [`Form`] owns the values a user is editing plus the bookkeeping around
//! submitting them: whether a submission is in flight, and the last
//! validation failure. Views bind field editors to projections of
//! [`Form::values`] and drive controls from [`Form::is_submitting`];
//! [`Form::submit`] runs the validate-then-act cycle.

use core::fmt::{Debug, Display};
use std::future::Future;

use moneta_reactive::{Binding, Computed, SignalExt, binding};
use thiserror::Error;

pub mod valid;
pub use valid::{Anything, Required, Validator};

/// A validation failure, flattened to its display message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Creates a validation error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Why a call to [`Form::submit`] did not complete.
#[derive(Debug, Error)]
pub enum SubmitError<E: Debug + Display> {
    /// Another submission of this form is still in flight.
    #[error("a submission is already in flight")]
    InFlight,
    /// The values did not pass the schema.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The submit action itself failed.
    #[error("{0}")]
    Failed(E),
}

/// The reactive state of a form editing values of type `T`.
///
/// Cloning a form is cheap and yields a handle to the same state.
#[derive(Debug)]
pub struct Form<T> {
    values: Binding<T>,
    submitting: Binding<bool>,
    error: Binding<Option<ValidationError>>,
}

impl<T> Clone for Form<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            submitting: self.submitting.clone(),
            error: self.error.clone(),
        }
    }
}

impl<T: Clone + 'static> Form<T> {
    /// Creates a form editing the given initial values.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            values: binding(initial),
            submitting: binding(false),
            error: binding(None),
        }
    }

    /// The values being edited. Field editors bind to projections of this.
    #[must_use]
    pub const fn values(&self) -> &Binding<T> {
        &self.values
    }

    /// Whether a submission is currently in flight.
    ///
    /// Controls subscribe to this to disable themselves during submission.
    #[must_use]
    pub fn is_submitting(&self) -> Computed<bool> {
        self.submitting.clone().computed()
    }

    /// The last validation failure, cleared by the next valid submission.
    #[must_use]
    pub const fn error(&self) -> &Binding<Option<ValidationError>> {
        &self.error
    }

    /// Marks a submission as started. Returns `false` if one is already in
    /// flight, in which case the caller must not proceed.
    pub fn begin_submit(&self) -> bool {
        if self.submitting.get() {
            return false;
        }
        self.submitting.set(true);
        true
    }

    /// Records a validation failure.
    pub fn validation_failed(&self, error: ValidationError) {
        self.error.set(Some(error));
    }

    /// Marks the in-flight submission as finished, however it ended.
    pub fn settled(&self) {
        self.submitting.set(false);
    }

    /// Validates the current values against `schema` and, if they pass,
    /// runs `action` with them.
    ///
    /// The form reports in flight from before `action` starts until it
    /// settles, whether it succeeds or fails. A concurrent call while in
    /// flight returns [`SubmitError::InFlight`] without touching the form.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] when the schema rejects the values
    /// and [`SubmitError::Failed`] when the action itself fails.
    pub async fn submit<V, F, Fut, E>(&self, schema: &V, action: F) -> Result<(), SubmitError<E>>
    where
        V: Validator<T>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Debug + Display,
    {
        if !self.begin_submit() {
            return Err(SubmitError::InFlight);
        }

        let values = self.values.get();
        if let Err(reason) = schema.validate(&values) {
            let error = ValidationError::new(reason.to_string());
            tracing::debug!(error = %error, "form values rejected");
            self.validation_failed(error.clone());
            self.settled();
            return Err(error.into());
        }
        self.error.set(None);

        let result = action(values).await;
        self.settled();
        result.map_err(SubmitError::Failed)
    }
}

impl<T: Clone + Default + 'static> Default for Form<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
