//! The base HTTP error type.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::error::class::ErrorClass;

/// Property keys a property bag may never write.
const RESERVED_PROPS: [&str; 2] = ["status", "statusCode"];

/// The capability shared by every HTTP error.
///
/// A type implementing this trait carries a status code, exposes it under
/// both its `status` and `statusCode` names, and says whether its message is
/// safe to show to a client.
pub trait StatusError: StdError {
    /// The HTTP status code.
    fn status(&self) -> u16;

    /// The HTTP status code under its alternative name.
    fn status_code(&self) -> u16 {
        self.status()
    }

    /// Whether the message may be shown to an untrusted client.
    fn expose(&self) -> bool;
}

/// An error carrying an HTTP status.
///
/// An `HttpError` is never built from raw fields. Every value goes through
/// status resolution, either in an [`ErrorClass`] or in
/// [`create_error`](crate::create_error), the [`Builder`](crate::Builder) and
/// its shorthands [`from_status`](Self::from_status) and
/// [`with_message`](Self::with_message).
#[derive(Debug, Clone)]
pub struct HttpError {
    status: u16,
    message: String,
    name: String,
    expose: bool,
    props: Map<String, Value>,
    class: Option<&'static ErrorClass>,
    source: Option<Arc<dyn StdError + Send + Sync + 'static>>,
}

impl HttpError {
    /// Instance of a concrete class.
    pub(crate) fn of_class(class: &'static ErrorClass, message: String) -> Self {
        Self {
            status: class.status(),
            message,
            name: class.name().to_string(),
            expose: class.category().expose(),
            props: Map::new(),
            class: Some(class),
            source: None,
        }
    }

    /// Plain error with no concrete class behind it.
    pub(crate) fn generic(status: u16, message: String) -> Self {
        Self {
            status,
            message,
            name: "Error".to_string(),
            expose: status < 500,
            props: Map::new(),
            class: None,
            source: None,
        }
    }

    /// Wrap a foreign error, taking over its message.
    pub(crate) fn wrap(source: Arc<dyn StdError + Send + Sync + 'static>, status: u16) -> Self {
        let mut err = Self::generic(status, source.to_string());
        err.source = Some(source);
        err
    }

    /// Overwrite the status together with the exposure it implies.
    pub(crate) fn reclassify(&mut self, status: u16) {
        self.expose = status < 500;
        self.status = status;
    }

    /// Merge a property bag into this error.
    ///
    /// `status` and `statusCode` are skipped. `expose`, `message` and `name`
    /// replace the corresponding fields when the value has the right type.
    pub(crate) fn merge_props(&mut self, props: Map<String, Value>) {
        for (key, value) in props {
            if RESERVED_PROPS.contains(&key.as_str()) {
                continue;
            }
            if !matches!(key.as_str(), "expose" | "message" | "name") {
                self.props.insert(key, value);
                continue;
            }
            match (key.as_str(), value) {
                ("expose", Value::Bool(expose)) => self.expose = expose,
                ("message", Value::String(message)) => self.message = message,
                ("name", Value::String(name)) => self.name = name,
                (_, value) => debug!("ignoring property {key} with mismatched type: {value}"),
            }
        }
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The HTTP status code. Always equal to [`status`](Self::status).
    pub fn status_code(&self) -> u16 {
        self.status
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error name, e.g. `NotFoundError`, or `Error` for generic errors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the message may be shown to an untrusted client.
    pub fn expose(&self) -> bool {
        self.expose
    }

    /// Extra properties attached through a property bag.
    pub fn props(&self) -> &Map<String, Value> {
        &self.props
    }

    /// Get a single extra property.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// The concrete class this error was constructed from, if any.
    pub fn class(&self) -> Option<&'static ErrorClass> {
        self.class
    }

    /// Whether this error was constructed from `class`.
    pub fn is_instance_of(&self, class: &ErrorClass) -> bool {
        self.class.is_some_and(|own| std::ptr::eq(own, class))
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for HttpError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn StdError + 'static))
    }
}

impl StatusError for HttpError {
    fn status(&self) -> u16 {
        self.status
    }

    fn expose(&self) -> bool {
        self.expose
    }
}

impl Serialize for HttpError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5 + self.props.len()))?;
        map.serialize_entry("status", &self.status)?;
        map.serialize_entry("statusCode", &self.status)?;
        map.serialize_entry("message", &self.message)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("expose", &self.expose)?;
        for (key, value) in &self.props {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
