//! Error types for the error factory.

use thiserror::Error;

/// Errors that can occur when calling the error factory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument has a type the factory does not accept at its position.
    #[error("argument #{position} unsupported type {kind}")]
    UnsupportedArgument {
        /// 1-based position of the argument.
        position: usize,
        /// Type of the offending value.
        kind: &'static str,
    },
}
