//! Ordered header lists.
//!
//! Header names compare case-insensitively. [`Headers::insert`] enforces
//! that a name appears once, except for `Set-Cookie` which may repeat.

use crate::{Error, Result};

/// The one header name allowed to appear several times on a request.
pub const SET_COOKIE: &str = "Set-Cookie";

/// Ordered list of header name/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Creates an empty header list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a header, rejecting a second occurrence of any name other than
    /// `Set-Cookie`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateHeader`] if `name` is already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();
        if !name.eq_ignore_ascii_case(SET_COOKIE) && self.contains(&name) {
            return Err(Error::DuplicateHeader(name));
        }
        self.entries.push((name, value.into()));
        Ok(())
    }

    /// Appends a header without the uniqueness check.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Adds `name` only when no header of that name exists yet.
    pub fn insert_default(&mut self, name: &str, value: impl Into<String>) {
        if !self.contains(name) {
            self.entries.push((name.to_owned(), value.into()));
        }
    }

    /// First value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).next()
    }

    /// All values for `name`, in insertion order.
    pub fn get_all<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether a header named `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// Name/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of header lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when there are no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
