//! Relative or absolute URI references.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::{Error, Result};

/// Only used to check that a relative reference can be resolved at all.
const RESOLUTION_PROBE: &str = "http://reference.invalid/";

/// A syntactically valid URI reference.
///
/// Absolute references are held as a parsed [`Url`] and normalized the way
/// `url` does (`http://localhost` becomes `http://localhost/`). Relative
/// references are kept verbatim until resolved against a base.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UriRef {
    /// Reference with a scheme.
    Absolute(Url),
    /// Reference to be resolved against a base URL.
    Relative(String),
}

impl UriRef {
    /// Parse a relative or absolute URI reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UriFormat`] for whitespace, control characters,
    /// characters outside RFC 3986, malformed percent escapes, or an
    /// authority that does not parse.
    pub fn parse(input: &str) -> Result<Self> {
        check_characters(input)?;

        match Url::parse(input) {
            Ok(url) => Ok(Self::Absolute(url)),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Url::parse(RESOLUTION_PROBE)
                    .and_then(|probe| probe.join(input))
                    .map_err(|_| Error::uri_format(input))?;
                Ok(Self::Relative(input.to_owned()))
            }
            Err(_) => Err(Error::uri_format(input)),
        }
    }

    /// `true` for references with a scheme.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        matches!(self, Self::Absolute(_))
    }

    /// The reference as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Absolute(url) => url.as_str(),
            Self::Relative(reference) => reference,
        }
    }

    /// Resolve against `base`. Absolute references ignore the base.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UriFormat`] if joining fails.
    pub fn resolve(&self, base: &Url) -> Result<Url> {
        match self {
            Self::Absolute(url) => Ok(url.clone()),
            Self::Relative(reference) => base
                .join(reference)
                .map_err(|_| Error::uri_format(reference.as_str())),
        }
    }
}

fn check_characters(input: &str) -> Result<()> {
    let mut chars = input.char_indices();

    while let Some((index, ch)) = chars.next() {
        let allowed = match ch {
            '%' => {
                let escape = input.as_bytes().get(index + 1..index + 3);
                // skip the two hex digits
                chars.nth(1);
                escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
            }
            // RFC 3986 unreserved, gen-delims and sub-delims
            _ if ch.is_ascii() => {
                ch.is_ascii_alphanumeric() || "-._~:/?#[]@!$&'()*+,;=".contains(ch)
            }
            // IRI text, percent-encoded later by `url`
            _ => !ch.is_whitespace() && !ch.is_control(),
        };

        if !allowed {
            return Err(Error::uri_format(input));
        }
    }

    Ok(())
}

impl fmt::Display for UriRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UriRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Url> for UriRef {
    fn from(url: Url) -> Self {
        Self::Absolute(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_absolute() {
        let uri = UriRef::parse("http://localhost").expect("absolute");
        assert!(uri.is_absolute());
        assert_eq!(uri.as_str(), "http://localhost/");
    }

    #[test]
    fn parse_relative_keeps_text() {
        for reference in ["/users/42", "users?page=1", "../up", "?q=a+b", "#frag", "a%20b"] {
            let uri = UriRef::parse(reference).expect(reference);
            assert!(!uri.is_absolute(), "{reference} should be relative");
            assert_eq!(uri.to_string(), reference);
        }
    }

    #[test]
    fn parse_rejects_malformed() {
        for reference in [
            "http://exa mple.com",
            "/with space",
            "/tab\there",
            "bad%zzescape",
            "trailing%2",
            "/pipe|char",
            "/<angle>",
            "http://[::1",
            "/nbsp\u{a0}x",
            "/ideographic\u{3000}space",
            "/line\u{2028}sep",
            "/next\u{85}line",
            "%\u{e9}9",
        ] {
            let err = UriRef::parse(reference).expect_err(reference);
            assert!(matches!(err, Error::UriFormat(_)), "{reference}: {err}");
        }
    }

    #[test]
    fn parse_accepts_non_ascii() {
        let uri = UriRef::parse("/café").expect("iri");
        assert_eq!(uri.as_str(), "/café");

        let uri = UriRef::parse("/東京?q=%E6%9D%B1").expect("iri with escapes");
        assert_eq!(uri.as_str(), "/東京?q=%E6%9D%B1");
    }

    #[test]
    fn resolve_relative_against_base() {
        let base = Url::parse("https://api.example.com/v1/").expect("base");

        let uri = UriRef::parse("users?page=2").expect("relative");
        assert_eq!(
            uri.resolve(&base).expect("resolve").as_str(),
            "https://api.example.com/v1/users?page=2"
        );

        let uri = UriRef::parse("/health").expect("relative");
        assert_eq!(
            uri.resolve(&base).expect("resolve").as_str(),
            "https://api.example.com/health"
        );
    }

    #[test]
    fn resolve_absolute_ignores_base() {
        let base = Url::parse("https://api.example.com/").expect("base");
        let uri: UriRef = "http://other.example.com/x".parse().expect("absolute");
        assert_eq!(
            uri.resolve(&base).expect("resolve").as_str(),
            "http://other.example.com/x"
        );
    }
}
