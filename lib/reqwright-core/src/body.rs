//! Request body content and serialization helpers.

use bytes::Bytes;

use crate::Result;

/// Content type for request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// `application/json; charset=utf-8`
    Json,
    /// `application/x-www-form-urlencoded`
    FormUrlEncoded,
    /// `application/xml; charset=utf-8`
    Xml,
    /// `text/plain; charset=utf-8`
    PlainText,
    /// `application/octet-stream`
    OctetStream,
}

impl ContentType {
    /// Value for the `Content-Type` header.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json; charset=utf-8",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
            Self::Xml => "application/xml; charset=utf-8",
            Self::PlainText => "text/plain; charset=utf-8",
            Self::OctetStream => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized request content together with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    content_type: ContentType,
    bytes: Bytes,
}

impl Body {
    /// JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    ///
    /// # Example
    ///
    /// ```
    /// use reqwright_core::{Body, ContentType};
    ///
    /// #[derive(serde::Serialize)]
    /// struct User { name: String }
    ///
    /// let body = Body::json(&User { name: "Alice".to_string() })?;
    /// assert_eq!(body.content_type(), ContentType::Json);
    /// assert_eq!(body.as_bytes().as_ref(), br#"{"name":"Alice"}"#);
    /// # Ok::<(), reqwright_core::Error>(())
    /// ```
    pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self {
            content_type: ContentType::Json,
            bytes: to_json(value)?,
        })
    }

    /// Form URL-encoded body. `Vec<T>` fields become repeated keys.
    ///
    /// # Errors
    ///
    /// Returns an error if form serialization fails.
    pub fn form<T: serde::Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self {
            content_type: ContentType::FormUrlEncoded,
            bytes: to_form(value)?,
        })
    }

    /// XML body. The root element is named after the serialized type.
    ///
    /// # Errors
    ///
    /// Returns an error if XML serialization fails.
    pub fn xml<T: serde::Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self {
            content_type: ContentType::Xml,
            bytes: to_xml(value)?,
        })
    }

    /// Plain text body.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::PlainText,
            bytes: Bytes::from(text.into()),
        }
    }

    /// Binary body.
    #[must_use]
    pub fn bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            content_type: ContentType::OctetStream,
            bytes: bytes.into(),
        }
    }

    /// Content type of the body.
    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Serialized content.
    #[must_use]
    pub const fn as_bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Consume into the serialized content.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Serialize a value to form URL-encoded bytes.
///
/// # Errors
///
/// Returns an error if form serialization fails.
pub fn to_form<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_html_form::to_string(value)
        .map(|s| Bytes::from(s.into_bytes()))
        .map_err(Into::into)
}

/// Deserialize JSON bytes with path-aware error messages.
///
/// # Errors
///
/// Returns an error naming the failing field path (e.g. `user.address.city`).
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

/// Serialize a value to XML bytes, without an XML declaration.
///
/// # Errors
///
/// Returns an error if the value has no XML representation.
pub fn to_xml<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    let xml = quick_xml::se::to_string(value)?;
    Ok(Bytes::from(xml))
}
