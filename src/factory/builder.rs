//! Named construction paths for HTTP errors.

use std::error::Error as StdError;

use serde_json::{Map, Value};

use crate::error::HttpError;
use crate::factory::arg::{ErrorArg, RawStatus, Role};
use crate::factory::resolve::{resolve, Parts};

/// Builds an [`HttpError`] step by step.
///
/// Each method has the same effect as passing the corresponding argument to
/// [`create_error`](crate::create_error) at that point, so the order of
/// calls matters the same way argument order does: an error passed after a
/// status replaces that status with its own.
///
/// # Examples
///
/// ```
/// use http_errors::Builder;
///
/// let err = Builder::new()
///     .status(403)
///     .message("not your resource")
///     .prop("resource", "invoice")
///     .build();
///
/// assert_eq!(err.status(), 403);
/// assert_eq!(err.name(), "ForbiddenError");
/// assert!(err.expose());
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    parts: Parts,
}

impl Builder {
    /// Create a builder for a 500 error with no message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status.
    pub fn status(mut self, status: u16) -> Self {
        self.parts.apply(Role::Status(RawStatus::Integer(status.into())));
        self
    }

    /// Set the message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.parts.apply(Role::Message(message.into()));
        self
    }

    /// Start from an existing error.
    pub fn error<E: StdError + Send + Sync + 'static>(mut self, err: E) -> Self {
        self.parts.apply(Role::Error(ErrorArg::from_error(err)));
        self
    }

    /// Replace the property bag.
    pub fn props(mut self, props: Map<String, Value>) -> Self {
        self.parts.apply(Role::Props(props));
        self
    }

    /// Add a single property to the property bag.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parts.props.insert(key.into(), value.into());
        self
    }

    /// Build the error.
    pub fn build(self) -> HttpError {
        resolve(self.parts)
    }
}

impl HttpError {
    /// Create an error for `status` with the default message.
    pub fn from_status(status: u16) -> Self {
        Builder::new().status(status).build()
    }

    /// Create an error for `status` with a custom message.
    pub fn with_message(status: u16, message: impl Into<String>) -> Self {
        Builder::new().status(status).message(message).build()
    }
}
