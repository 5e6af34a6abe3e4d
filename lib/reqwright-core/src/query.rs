//! Query string construction.
//!
//! [`QueryString`] is an ordered list of key/value entries. Values go through
//! [`IntoQueryValue`], which classifies them into the closed [`QueryValue`]
//! set before rendering:
//!
//! - `None` adds nothing,
//! - date/times with an offset render as `2010-01-01T10:00:00.000+02:00`,
//! - date/times without an offset render as `2010-01-01T10:00:00.000`,
//! - everything else renders through [`Display`] and is trimmed.
//!
//! Values that render to blank text are dropped silently.
//!
//! # Example
//!
//! ```
//! use reqwright_core::QueryString;
//!
//! let mut query = QueryString::new();
//! query.add("q", "rust http")?;
//! query.add_all("page", [Some(1), None, Some(3)])?;
//! query.add("draft", Option::<bool>::None)?;
//!
//! assert_eq!(query.render_query(), "q=rust+http&page=1&page=3");
//! assert_eq!(
//!     query.render_uri("https://example.com/search")?.as_str(),
//!     "https://example.com/search?q=rust+http&page=1&page=3"
//! );
//! # Ok::<(), reqwright_core::Error>(())
//! ```

use std::borrow::Cow;
use std::fmt::{self, Display};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::{Error, Result, UriRef};

const OFFSET_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";
const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

// ============================================================================
// Values
// ============================================================================

/// A value classified for query string rendering.
///
/// The variants are checked in declaration order: date/times are recognised
/// before the generic text fallback, since their `Display` output is not the
/// round-trip format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Absent value. Never produces an entry.
    Null,
    /// Date/time with an offset from UTC.
    DateTimeOffset(DateTime<FixedOffset>),
    /// Date/time without offset information.
    DateTimeLocal(NaiveDateTime),
    /// Any other value, already rendered to text.
    Text(String),
}

impl QueryValue {
    /// Render the value, or `None` when it should not produce an entry.
    #[must_use]
    pub fn render(self) -> Option<String> {
        let rendered = match self {
            Self::Null => return None,
            Self::DateTimeOffset(value) => value.format(OFFSET_DATE_TIME_FORMAT).to_string(),
            Self::DateTimeLocal(value) => value.format(LOCAL_DATE_TIME_FORMAT).to_string(),
            Self::Text(text) => text,
        };

        let trimmed = rendered.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == rendered.len() {
            Some(rendered)
        } else {
            Some(trimmed.to_owned())
        }
    }
}

/// Conversion into a [`QueryValue`].
///
/// Implemented for primitives, strings, chrono date/time types, `Option<T>`
/// and references to any of these.
pub trait IntoQueryValue {
    /// Classify `self` for rendering.
    fn into_query_value(self) -> QueryValue;
}

impl IntoQueryValue for QueryValue {
    fn into_query_value(self) -> QueryValue {
        self
    }
}

impl<T: IntoQueryValue> IntoQueryValue for Option<T> {
    fn into_query_value(self) -> QueryValue {
        self.map_or(QueryValue::Null, IntoQueryValue::into_query_value)
    }
}

impl<T: IntoQueryValue + Clone> IntoQueryValue for &T {
    fn into_query_value(self) -> QueryValue {
        self.clone().into_query_value()
    }
}

impl IntoQueryValue for &str {
    fn into_query_value(self) -> QueryValue {
        QueryValue::Text(self.to_owned())
    }
}

impl IntoQueryValue for String {
    fn into_query_value(self) -> QueryValue {
        QueryValue::Text(self)
    }
}

impl IntoQueryValue for Cow<'_, str> {
    fn into_query_value(self) -> QueryValue {
        QueryValue::Text(self.into_owned())
    }
}

impl<Tz: TimeZone> IntoQueryValue for DateTime<Tz> {
    fn into_query_value(self) -> QueryValue {
        QueryValue::DateTimeOffset(self.fixed_offset())
    }
}

impl IntoQueryValue for NaiveDateTime {
    fn into_query_value(self) -> QueryValue {
        QueryValue::DateTimeLocal(self)
    }
}

macro_rules! display_query_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoQueryValue for $ty {
                fn into_query_value(self) -> QueryValue {
                    QueryValue::Text(self.to_string())
                }
            }
        )*
    };
}

display_query_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    NaiveDate, NaiveTime,
);

// ============================================================================
// Query string
// ============================================================================

/// One key/value pair of a [`QueryString`]. Neither side is ever blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    key: String,
    value: String,
}

impl Entry {
    /// Parameter name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Rendered parameter value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Ordered, append-only list of query parameters.
///
/// Repeated keys are kept in insertion order, which is how multi-valued
/// parameters (`id=1&id=2`) are expressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    entries: Vec<Entry>,
}

impl QueryString {
    /// Creates an empty query string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends `value` under `key`.
    ///
    /// Values that are `None` or render to blank text are skipped without
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `key` is empty or whitespace.
    /// The query string is left unchanged.
    pub fn add(&mut self, key: &str, value: impl IntoQueryValue) -> Result<()> {
        ensure_key(key)?;
        if let Some(value) = value.into_query_value().render() {
            self.entries.push(Entry {
                key: key.to_owned(),
                value,
            });
        }
        Ok(())
    }

    /// Appends every element of `values` under `key`, in order.
    ///
    /// Each element is converted as by [`QueryString::add`]; `None` elements
    /// are skipped and the following elements still land under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `key` is empty or whitespace,
    /// even when `values` is empty.
    pub fn add_all<I>(&mut self, key: &str, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: IntoQueryValue,
    {
        ensure_key(key)?;
        for value in values {
            self.add(key, value)?;
        }
        Ok(())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no entry has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Values stored under `key`, in insertion order.
    pub fn values<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |entry| entry.key == key)
            .map(Entry::value)
    }

    /// Form-url-encodes the entries (`a=1&b=two+words`).
    ///
    /// Returns an empty string when there are no entries.
    #[must_use]
    pub fn render_query(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.entries.iter().map(|entry| (&entry.key, &entry.value)))
            .finish()
    }

    /// Joins `base_url` and the encoded entries into a URI reference.
    ///
    /// With no entries, `base_url` is parsed as is. Otherwise the result is
    /// `base_url?<query>`. Relative references are allowed.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `base_url` is empty or whitespace.
    /// - [`Error::UriFormat`] if the result is not a valid URI reference.
    pub fn render_uri(&self, base_url: &str) -> Result<UriRef> {
        if base_url.trim().is_empty() {
            return Err(Error::invalid_argument("base_url"));
        }

        if self.is_empty() {
            UriRef::parse(base_url)
        } else {
            UriRef::parse(&format!("{base_url}?{}", self.render_query()))
        }
    }
}

fn ensure_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        Err(Error::invalid_argument("key"))
    } else {
        Ok(())
    }
}

impl Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_query())
    }
}

impl<'a> IntoIterator for &'a QueryString {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
