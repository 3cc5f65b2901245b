//! The error factory.
//!
//! [`create_error`] takes any mix of an existing error, a numeric status, a
//! message and a property bag and turns it into one [`HttpError`]. The
//! [`Builder`] offers the same construction through named methods.
//!
//! [`HttpError`]: crate::HttpError

mod arg;
mod builder;
mod error;
mod resolve;

// Re-export public items
pub use arg::{Arg, ErrorArg};
pub use builder::Builder;
pub use error::Error;
pub use resolve::{create_error, NON_ERROR_STATUS_ADVISORY};

/// Call [`create_error`] with a variable number of arguments.
///
/// Every argument is converted with `Arg::from`.
///
/// # Examples
///
/// ```
/// use http_errors::create_error;
/// use serde_json::json;
///
/// let err = create_error!(404, "no such user", json!({ "code": "E_USER" })).unwrap();
/// assert_eq!(err.status(), 404);
/// assert_eq!(err.message(), "no such user");
/// assert_eq!(err.prop("code"), Some(&json!("E_USER")));
/// ```
#[macro_export]
macro_rules! create_error {
    ($($arg:expr),* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::Arg> = ::std::vec![$($crate::Arg::from($arg)),*];
        $crate::create_error(args)
    }};
}
