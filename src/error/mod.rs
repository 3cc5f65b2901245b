//! HTTP error values.
//!
//! [`HttpError`] is the base error every value produced by this crate is an
//! instance of. [`ErrorClass`] describes the concrete error type for one
//! registered 4xx or 5xx status, and [`classes`] is the table of all of them.

mod class;
mod http_error;
mod recognize;
mod registry;
mod tests;

// Re-export public items
pub use class::{Category, ErrorClass};
pub use http_error::{HttpError, StatusError};
pub use recognize::{is_http_error, recognizes};
pub use registry::{classes, ClassKey, ErrorClasses};
