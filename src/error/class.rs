//! Concrete error classes.

use serde::Serialize;

use crate::error::http_error::HttpError;
use crate::status::{class_of, reason_phrase, to_identifier};

/// Whether a class covers a client (4xx) or server (5xx) error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// 4xx: the message is exposed to clients.
    Client,
    /// 5xx: the message is kept private.
    Server,
}

impl Category {
    /// The category a status class belongs to, if any.
    pub fn of_class(class: u16) -> Option<Self> {
        match class {
            400 => Some(Category::Client),
            500 => Some(Category::Server),
            _ => None,
        }
    }

    /// Default exposure of errors in this category.
    pub fn expose(&self) -> bool {
        matches!(self, Category::Client)
    }
}

/// The concrete error type for one registered status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorClass {
    status: u16,
    identifier: String,
    name: String,
    message: &'static str,
    category: Category,
}

impl ErrorClass {
    /// Describe the class for `code`.
    ///
    /// Returns `None` for unregistered codes and for codes outside the 4xx
    /// and 5xx classes.
    pub(crate) fn for_code(code: u16) -> Option<Self> {
        let category = Category::of_class(class_of(code))?;
        let message = reason_phrase(code)?;
        let identifier = to_identifier(message);
        let name = class_name(&identifier);

        Some(Self {
            status: code,
            identifier,
            name,
            message,
            category,
        })
    }

    /// Construct an error of this class.
    ///
    /// A missing message defaults to the status's reason phrase.
    pub fn construct(&'static self, message: Option<String>) -> HttpError {
        let message = message.unwrap_or_else(|| self.message.to_string());
        HttpError::of_class(self, message)
    }

    /// Construct an error of this class with the default message.
    pub fn new_error(&'static self) -> HttpError {
        self.construct(None)
    }

    /// The status code every instance carries.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The lookup identifier, e.g. `NotFound`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The type name, e.g. `NotFoundError`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default message, i.e. the reason phrase.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Client or server error.
    pub fn category(&self) -> Category {
        self.category
    }
}

// An empty identifier still yields a usable name.
fn class_name(identifier: &str) -> String {
    if identifier.is_empty() {
        "HttpError".to_string()
    } else if identifier.ends_with("Error") {
        identifier.to_string()
    } else {
        format!("{identifier}Error")
    }
}
