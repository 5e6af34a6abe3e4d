//! Error types for reqwright.

use derive_more::{Display, Error, From};

/// Main error type for reqwright operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// A required argument was empty or whitespace.
    #[display("invalid argument: `{name}` must not be empty")]
    #[from(skip)]
    InvalidArgument {
        /// Name of the offending argument.
        #[error(not(source))]
        name: &'static str,
    },

    /// The text is not a valid relative or absolute URI reference.
    #[display("invalid URI reference: {_0}")]
    #[from(skip)]
    UriFormat(#[error(not(source))] String),

    /// A header that must be unique was added twice.
    #[display("duplicate header: {_0}")]
    #[from(skip)]
    DuplicateHeader(#[error(not(source))] String),

    /// HTTP-level errors (non-2xx status codes).
    #[display("HTTP error {status}: {message}")]
    #[from(skip)]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
        /// Response body, if available.
        #[error(not(source))]
        body: Option<bytes::Bytes>,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The request cannot be built or sent as configured.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "user.address.city").
        path: String,
        /// Error message.
        message: String,
    },

    /// Form URL-encoded serialization error.
    #[display("form serialization error: {_0}")]
    #[from]
    FormSerialization(serde_html_form::ser::Error),

    /// XML serialization error.
    #[display("XML serialization error: {_0}")]
    #[from]
    XmlSerialization(quick_xml::errors::serialize::SeError),

    /// Response body is not valid UTF-8.
    #[display("response body is not UTF-8: {_0}")]
    #[from]
    Utf8(std::string::FromUtf8Error),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid argument error for the named argument.
    #[must_use]
    pub const fn invalid_argument(name: &'static str) -> Self {
        Self::InvalidArgument { name }
    }

    /// Create a URI format error.
    #[must_use]
    pub fn uri_format(reference: impl Into<String>) -> Self {
        Self::UriFormat(reference.into())
    }

    /// Create an HTTP error with body.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>, body: Option<bytes::Bytes>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            body,
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for caller input errors (argument, URI, header).
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::UriFormat(_) | Self::DuplicateHeader(_)
        )
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns the HTTP status code if this is an HTTP error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response body if this is an HTTP error with a body.
    #[must_use]
    pub fn body(&self) -> Option<&bytes::Bytes> {
        match self {
            Self::Http { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Try to decode the HTTP error body as JSON.
    ///
    /// `None` when there is no body or this is not an HTTP error.
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.body().map(|body| crate::from_json(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::invalid_argument("key");
        assert_eq!(err.to_string(), "invalid argument: `key` must not be empty");

        let err = Error::uri_format("http://exa mple.com");
        assert_eq!(
            err.to_string(),
            "invalid URI reference: http://exa mple.com"
        );

        let err = Error::DuplicateHeader("Accept".to_string());
        assert_eq!(err.to_string(), "duplicate header: Accept");

        let err = Error::http(404, "Not Found", None);
        assert_eq!(err.to_string(), "HTTP error 404: Not Found");

        let err = Error::json_deserialization("user.address.city", "missing field `city`");
        assert_eq!(
            err.to_string(),
            "JSON deserialization error at 'user.address.city': missing field `city`"
        );
    }

    #[test]
    fn argument_errors() {
        assert!(Error::invalid_argument("base_url").is_argument_error());
        assert!(Error::uri_format("::").is_argument_error());
        assert!(Error::DuplicateHeader("Accept".to_string()).is_argument_error());
        assert!(!Error::Timeout.is_argument_error());
        assert!(!Error::connection("refused").is_argument_error());
    }

    #[test]
    fn error_status() {
        assert_eq!(Error::http(500, "Internal Server Error", None).status(), Some(500));
        assert_eq!(Error::Timeout.status(), None);
        assert!(Error::Timeout.is_timeout());
        assert!(Error::connection("failed").is_connection());
    }

    #[test]
    fn error_decode_body() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct ApiError {
            error: String,
        }

        let body = bytes::Bytes::from(r#"{"error": "not found"}"#);
        let err = Error::http(404, "Not Found", Some(body));

        let decoded = err
            .decode_body::<ApiError>()
            .expect("should have body")
            .expect("should decode");
        assert_eq!(
            decoded,
            ApiError {
                error: "not found".to_string()
            }
        );

        assert!(Error::http(404, "Not Found", None).decode_body::<ApiError>().is_none());
        assert!(Error::Timeout.decode_body::<ApiError>().is_none());
    }
}
