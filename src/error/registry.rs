//! The table of concrete error classes.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use log::debug;

use crate::error::class::ErrorClass;
use crate::status::codes;

static CLASSES: LazyLock<ErrorClasses> = LazyLock::new(ErrorClasses::build);

/// Get the table of error classes.
///
/// The table is built on first use and never changes afterwards.
///
/// # Examples
///
/// ```
/// use http_errors::classes;
///
/// let not_found = classes().get(404).unwrap();
/// assert_eq!(not_found.name(), "NotFoundError");
/// assert_eq!(classes().by_name("NotFound").unwrap().status(), 404);
/// ```
pub fn classes() -> &'static ErrorClasses {
    &CLASSES
}

/// A key into the class table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKey<'a> {
    /// Numeric status code.
    Code(u16),
    /// Identifier, e.g. `NotFound`.
    Name(&'a str),
}

impl From<u16> for ClassKey<'_> {
    fn from(code: u16) -> Self {
        ClassKey::Code(code)
    }
}

impl<'a> From<&'a str> for ClassKey<'a> {
    fn from(name: &'a str) -> Self {
        ClassKey::Name(name)
    }
}

/// Error classes keyed by status code and by identifier.
#[derive(Debug)]
pub struct ErrorClasses {
    by_code: BTreeMap<u16, ErrorClass>,
    by_name: HashMap<String, u16>,
}

impl ErrorClasses {
    fn build() -> Self {
        let by_code: BTreeMap<u16, ErrorClass> = codes()
            .filter_map(|code| ErrorClass::for_code(code).map(|class| (code, class)))
            .collect();

        let by_name = by_code
            .values()
            .filter(|class| !class.identifier().is_empty())
            .map(|class| (class.identifier().to_string(), class.status()))
            .collect();

        debug!("registered {len} error classes", len = by_code.len());
        Self { by_code, by_name }
    }

    /// Get the class for a status code.
    pub fn get(&self, code: u16) -> Option<&ErrorClass> {
        self.by_code.get(&code)
    }

    /// Get the class for an identifier such as `NotFound`.
    pub fn by_name(&self, name: &str) -> Option<&ErrorClass> {
        self.by_name.get(name).and_then(|code| self.by_code.get(code))
    }

    /// Get a class by either kind of key.
    pub fn lookup<'k>(&self, key: impl Into<ClassKey<'k>>) -> Option<&ErrorClass> {
        match key.into() {
            ClassKey::Code(code) => self.get(code),
            ClassKey::Name(name) => self.by_name(name),
        }
    }

    /// Iterate over all classes in status order.
    pub fn iter(&self) -> impl Iterator<Item = &ErrorClass> {
        self.by_code.values()
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
