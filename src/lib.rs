//! HTTP errors as first-class error values.
//!
//! This library builds errors that carry an HTTP status code, a message, and
//! an `expose` flag telling whether the message is safe to show to a client.
//!
//! # Features
//!
//! - One concrete error class per registered 4xx and 5xx status, looked up by
//!   code (`404`) or by identifier (`NotFound`)
//! - A factory accepting any mix of status, message, property bag and
//!   existing error, with a builder offering the same paths by name
//! - Client errors (4xx) expose their message, server errors (5xx) do not
//! - Recognition of HTTP errors among arbitrary values
//! - JSON serialization of errors and their extra properties
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use http_errors::create_error;
//!
//! let err = create_error!(404).unwrap();
//!
//! assert_eq!(err.status(), 404);
//! assert_eq!(err.status_code(), 404);
//! assert_eq!(err.message(), "Not Found");
//! assert_eq!(err.name(), "NotFoundError");
//! assert!(err.expose());
//! ```
//!
//! ## Wrapping other errors
//!
//! ```
//! use http_errors::{create_error, Arg};
//!
//! let io = std::io::Error::other("disk full");
//!
//! match create_error!(507, Arg::error(io)) {
//!     Ok(err) => {
//!         assert_eq!(err.status(), 507);
//!         assert_eq!(err.message(), "disk full");
//!         assert!(!err.expose());
//!     }
//!     Err(err) => println!("Bad arguments: {}", err),
//! }
//! ```
//!
//! ## Error classes
//!
//! ```
//! use http_errors::{classes, Category};
//!
//! let teapot = classes().by_name("ImATeapot").unwrap();
//! assert_eq!(teapot.status(), 418);
//! assert_eq!(teapot.category(), Category::Client);
//!
//! let err = teapot.construct(Some("short and stout".to_string()));
//! assert_eq!(err.name(), "ImATeapotError");
//! ```
//!
//! ## JSON support
//!
//! ```
//! use http_errors::Builder;
//! use serde_json::json;
//!
//! let err = Builder::new()
//!     .status(429)
//!     .prop("retryAfter", 30)
//!     .build();
//!
//! let body = serde_json::to_value(&err).unwrap();
//! assert_eq!(body["statusCode"], json!(429));
//! assert_eq!(body["retryAfter"], json!(30));
//! ```
//!
//! See the `demos` directory for a runnable example.

// Export the status module
pub mod status;

// Export the deprecation module
pub mod deprecation;

// Export the error module
pub mod error;

// Export the factory module
pub mod factory;

// Re-export commonly used items for convenience
pub use deprecation::Config as DeprecationConfig;
pub use error::{classes, is_http_error, recognizes, Category, ClassKey, ErrorClass, ErrorClasses, HttpError, StatusError};
pub use factory::{create_error, Arg, Builder, Error as FactoryError, ErrorArg};
pub use status::{class_of, reason_phrase, to_identifier};
