//! Materialized HTTP requests.
//!
//! A [`Request`] is what the fluent builder hands to an
//! [`HttpClient`](crate::HttpClient): an absolute URL with its query already
//! composed, ordered headers, and optional body content.

use url::Url;

use crate::{Body, Headers, Method};

/// An HTTP request with method, URL, headers, and optional body.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: Url,
    headers: Headers,
    body: Option<Body>,
}

impl Request {
    /// Creates a request without headers or body.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self::from_parts(method, url, Headers::new(), None)
    }

    /// Assemble a request from its parts.
    #[must_use]
    pub const fn from_parts(
        method: Method,
        url: Url,
        headers: Headers,
        body: Option<Body>,
    ) -> Self {
        Self {
            method,
            url,
            headers,
            body,
        }
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Mutable access to headers.
    #[must_use]
    pub const fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// First header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, Url, Headers, Option<Body>) {
        (self.method, self.url, self.headers, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parts_round_trip() {
        let url = Url::parse("https://api.example.com/users?page=1").expect("valid URL");
        let mut headers = Headers::new();
        headers.insert("Accept", "application/json").expect("header");

        let request = Request::from_parts(Method::Post, url, headers, Some(Body::text("hi")));

        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.url().query(), Some("page=1"));
        assert_eq!(request.header("accept"), Some("application/json"));
        assert!(request.body().is_some());

        let (method, url, headers, body) = request.into_parts();
        assert_eq!(method, Method::Post);
        assert_eq!(url.path(), "/users");
        assert_eq!(headers.len(), 1);
        assert_eq!(body, Some(Body::text("hi")));
    }

    #[test]
    fn new_request_is_bare() {
        let url = Url::parse("https://api.example.com").expect("valid URL");
        let mut request = Request::new(Method::Head, url);
        assert!(request.headers().is_empty());
        assert!(request.body().is_none());

        request.headers_mut().append("X-Trace", "1");
        assert_eq!(request.header("x-trace"), Some("1"));
    }
}
