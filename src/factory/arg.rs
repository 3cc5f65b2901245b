//! Factory arguments.

use std::error::Error as StdError;
use std::sync::Arc;

use serde_json::{Map, Number, Value};

use crate::error::HttpError;
use crate::factory::error::Error;

/// An existing error handed to the factory.
#[derive(Debug, Clone)]
pub enum ErrorArg {
    /// An error produced by this crate.
    Http(Box<HttpError>),
    /// Any other error.
    Foreign(Arc<dyn StdError + Send + Sync + 'static>),
}

impl ErrorArg {
    /// Wrap an error, recognizing [`HttpError`] values.
    pub fn from_error<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::from_boxed(Box::new(err))
    }

    fn from_boxed(err: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        match err.downcast::<HttpError>() {
            Ok(http) => ErrorArg::Http(http),
            Err(other) => ErrorArg::Foreign(Arc::from(other)),
        }
    }

    /// Status carried by the error, if it has one.
    pub(crate) fn status(&self) -> Option<u16> {
        match self {
            ErrorArg::Http(err) => Some(err.status()),
            ErrorArg::Foreign(_) => None,
        }
    }
}

/// One argument of [`create_error`](crate::create_error).
///
/// Values are classified by their JSON type when the factory runs: a number
/// is a status (first position only), a string is the message, an object or
/// `null` is a property bag. Other values are rejected.
#[derive(Debug, Clone)]
pub enum Arg {
    /// An existing error.
    Error(ErrorArg),
    /// A value classified by its type.
    Value(Value),
}

impl Arg {
    /// An existing error argument.
    pub fn error<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Arg::Error(ErrorArg::from_error(err))
    }

    /// Resolve the role of this argument at 1-based `position`.
    pub(crate) fn into_role(self, position: usize) -> Result<Role, Error> {
        match self {
            Arg::Error(err) => Ok(Role::Error(err)),
            Arg::Value(Value::Number(n)) if position == 1 => Ok(Role::Status(RawStatus::from(&n))),
            Arg::Value(Value::String(message)) => Ok(Role::Message(message)),
            Arg::Value(Value::Object(props)) => Ok(Role::Props(props)),
            Arg::Value(Value::Null) => Ok(Role::Props(Map::new())),
            Arg::Value(other) => Err(Error::UnsupportedArgument {
                position,
                kind: kind_of(&other),
            }),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// What an argument contributes to the error.
#[derive(Debug)]
pub(crate) enum Role {
    Error(ErrorArg),
    Status(RawStatus),
    Message(String),
    Props(Map<String, Value>),
}

/// A status before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum RawStatus {
    /// An integral status, possibly out of range.
    Integer(i64),
    /// A number with a fractional part, or too large for `i64`.
    Other(f64),
}

impl From<&Number> for RawStatus {
    fn from(n: &Number) -> Self {
        if let Some(int) = n.as_i64() {
            return RawStatus::Integer(int);
        }
        let float = n.as_f64().unwrap_or(f64::NAN);
        if float.fract() == 0.0 && float >= i64::MIN as f64 && float <= i64::MAX as f64 {
            RawStatus::Integer(float as i64)
        } else {
            RawStatus::Other(float)
        }
    }
}

impl Default for RawStatus {
    fn default() -> Self {
        RawStatus::Integer(500)
    }
}

impl From<HttpError> for Arg {
    fn from(err: HttpError) -> Self {
        Arg::Error(ErrorArg::Http(Box::new(err)))
    }
}

impl From<ErrorArg> for Arg {
    fn from(err: ErrorArg) -> Self {
        Arg::Error(err)
    }
}

impl From<std::io::Error> for Arg {
    fn from(err: std::io::Error) -> Self {
        Arg::error(err)
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for Arg {
    fn from(err: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Arg::Error(ErrorArg::from_boxed(err))
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

impl From<Map<String, Value>> for Arg {
    fn from(props: Map<String, Value>) -> Self {
        Arg::Value(Value::Object(props))
    }
}

impl From<u16> for Arg {
    fn from(status: u16) -> Self {
        Arg::Value(Value::from(status))
    }
}

impl From<i32> for Arg {
    fn from(status: i32) -> Self {
        Arg::Value(Value::from(status))
    }
}

impl From<i64> for Arg {
    fn from(status: i64) -> Self {
        Arg::Value(Value::from(status))
    }
}

impl From<&str> for Arg {
    fn from(message: &str) -> Self {
        Arg::Value(Value::from(message))
    }
}

impl From<String> for Arg {
    fn from(message: String) -> Self {
        Arg::Value(Value::String(message))
    }
}
