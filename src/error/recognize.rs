//! Recognition of HTTP error values.

use std::any::Any;

use serde_json::Value;

use crate::error::http_error::{HttpError, StatusError};

/// Check whether an arbitrary value is an HTTP error.
///
/// [`HttpError`] values are always recognized. A `serde_json::Value` is
/// recognized when it is an object with a boolean `expose`, a numeric
/// `statusCode`, and a `status` equal to `statusCode`. Anything else is not.
///
/// # Examples
///
/// ```
/// use http_errors::{create_error, is_http_error};
/// use serde_json::json;
///
/// assert!(is_http_error(&create_error!(404).unwrap()));
/// assert!(is_http_error(&json!({ "expose": true, "status": 404, "statusCode": 404 })));
/// assert!(!is_http_error(&json!(null)));
/// assert!(!is_http_error(&"Not Found"));
/// ```
pub fn is_http_error(value: &dyn Any) -> bool {
    if value.is::<HttpError>() || value.is::<Box<HttpError>>() {
        return true;
    }
    match value.downcast_ref::<Value>() {
        Some(Value::Object(fields)) => {
            let expose = fields.get("expose").is_some_and(Value::is_boolean);
            let status_code = fields.get("statusCode").and_then(Value::as_f64);
            let status = fields.get("status").and_then(Value::as_f64);
            expose && status_code.is_some() && status == status_code
        }
        _ => false,
    }
}

/// Check a value implementing [`StatusError`].
///
/// Implementing the trait is what makes a type an HTTP error, so this is a
/// convenience for generic code holding a `T: StatusError`. It only fails for
/// implementations that override `status_code` with a different value.
pub fn recognizes<E: StatusError + ?Sized>(err: &E) -> bool {
    err.status() == err.status_code()
}
