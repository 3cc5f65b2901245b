//! Status resolution and error construction.

use serde_json::{Map, Value};

use crate::deprecation;
use crate::error::{classes, HttpError};
use crate::factory::arg::{Arg, ErrorArg, RawStatus, Role};
use crate::factory::error::Error;
use crate::status::{class_of, is_error, reason_phrase};

/// Advisory emitted when a status outside 400–599 is requested.
pub const NON_ERROR_STATUS_ADVISORY: &str = "non-error status code; use only 4xx or 5xx status codes";

/// Everything collected from the arguments, in the order it was given.
#[derive(Debug, Default)]
pub(crate) struct Parts {
    pub(crate) status: RawStatus,
    pub(crate) message: Option<String>,
    pub(crate) props: Map<String, Value>,
    pub(crate) err: Option<ErrorArg>,
}

impl Parts {
    /// Apply one argument. Later arguments override earlier ones.
    pub(crate) fn apply(&mut self, role: Role) {
        match role {
            Role::Error(err) => {
                if let Some(status) = err.status() {
                    self.status = RawStatus::Integer(status.into());
                }
                self.err = Some(err);
            }
            Role::Status(status) => self.status = status,
            Role::Message(message) => self.message = Some(message),
            Role::Props(props) => self.props = props,
        }
    }
}

/// Create an HTTP error from any combination of arguments.
///
/// Arguments are read left to right:
///
/// * an existing error is reused, and its status becomes the working status
/// * a number is the status, and is only accepted as the first argument
/// * a string is the message
/// * an object is a property bag merged into the result, except for the
///   `status` and `statusCode` keys
///
/// Statuses outside 400–599 trigger a deprecation advisory, and fall back to
/// 500 unless they are registered codes. Numbers with a fractional part, such
/// as `404.5`, are not status codes and fall back to 500 as well. A status in
/// range without a class of its own, such as `499`, is built through its
/// class's type (`BadRequestError`) and keeps the requested status. Without
/// arguments the result is a 500 Internal Server Error.
///
/// # Errors
///
/// Returns [`Error::UnsupportedArgument`] for booleans, arrays, and numbers
/// after the first position.
///
/// # Examples
///
/// ```
/// use http_errors::{create_error, Arg};
///
/// let err = create_error([Arg::from(500), Arg::from("boom")]).unwrap();
/// assert_eq!(err.status(), 500);
/// assert_eq!(err.message(), "boom");
/// assert!(!err.expose());
/// ```
pub fn create_error<I>(args: I) -> Result<HttpError, Error>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    let mut parts = Parts::default();
    for (idx, arg) in args.into_iter().enumerate() {
        let role = arg.into().into_role(idx + 1)?;
        parts.apply(role);
    }
    Ok(resolve(parts))
}

/// Validate the working status, falling back to 500.
fn normalize_status(raw: RawStatus) -> u16 {
    let out_of_range = match raw {
        RawStatus::Integer(n) => !(400..600).contains(&n),
        RawStatus::Other(f) => !(400.0..600.0).contains(&f),
    };
    if out_of_range {
        deprecation::warn_once(NON_ERROR_STATUS_ADVISORY);
    }

    match raw {
        RawStatus::Integer(n) => match u16::try_from(n) {
            Ok(code) if is_error(code) || reason_phrase(code).is_some() => code,
            _ => 500,
        },
        RawStatus::Other(_) => 500,
    }
}

/// Turn collected arguments into the final error.
pub(crate) fn resolve(parts: Parts) -> HttpError {
    let status = normalize_status(parts.status);
    let class = classes()
        .get(status)
        .or_else(|| classes().get(class_of(status)));

    let mut err = match parts.err {
        None => match class {
            Some(class) => class.construct(parts.message),
            None => {
                let message = parts
                    .message
                    .filter(|m| !m.is_empty())
                    .or_else(|| reason_phrase(status).map(str::to_string))
                    .unwrap_or_default();
                HttpError::generic(status, message)
            }
        },
        Some(ErrorArg::Http(existing)) => *existing,
        Some(ErrorArg::Foreign(source)) => HttpError::wrap(source, status),
    };

    // Fallback classes stamp their own status.
    let same_class = class.is_some_and(|class| err.is_instance_of(class));
    if !same_class || err.status() != status {
        err.reclassify(status);
    }

    err.merge_props(parts.props);
    err
}
