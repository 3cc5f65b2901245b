//! HTTP status codes.
//!
//! This module knows every registered status code with its reason phrase, how
//! codes group into classes, and how a reason phrase becomes a type identifier.

mod class;
mod identifier;
mod registry;
mod tests;

// Re-export public items
pub use class::{class_of, is_client_error, is_error, is_server_error};
pub use identifier::to_identifier;
pub use registry::{codes, reason_phrase};
