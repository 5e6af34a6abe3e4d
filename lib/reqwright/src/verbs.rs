//! Verb entry points for the fluent builder.
//!
//! [`RequestExt::request`] borrows any [`HttpClient`] and returns [`Verbs`],
//! whose methods pick the HTTP method and request URI and hand back a
//! [`QueryBuilder`].

use reqwright_core::{Body, HttpClient, Method};

use crate::QueryBuilder;

/// Starts a fluent request on an [`HttpClient`].
pub trait RequestExt: HttpClient + Sized {
    /// Begin building a request executed by `self`.
    ///
    /// ```ignore
    /// let response = client.request().get("/users").query("active", true).send().await?;
    /// ```
    fn request(&self) -> Verbs<'_, Self> {
        Verbs::new(self)
    }
}

impl<C: HttpClient> RequestExt for C {}

/// HTTP verb selection for a borrowed client.
#[derive(Debug)]
pub struct Verbs<'c, C> {
    client: &'c C,
}

impl<C> Clone for Verbs<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Verbs<'_, C> {}

impl<'c, C: HttpClient> Verbs<'c, C> {
    /// Verb selection for `client`.
    #[must_use]
    pub const fn new(client: &'c C) -> Self {
        Self { client }
    }

    /// Request with an arbitrary method and no body.
    #[must_use]
    pub fn method(self, method: Method, request_uri: impl Into<String>) -> QueryBuilder<'c, C> {
        QueryBuilder::new(self.client, method, request_uri.into(), None)
    }

    /// `GET request_uri`.
    #[must_use]
    pub fn get(self, request_uri: impl Into<String>) -> QueryBuilder<'c, C> {
        self.method(Method::Get, request_uri)
    }

    /// `POST request_uri` without a body.
    #[must_use]
    pub fn post(self, request_uri: impl Into<String>) -> QueryBuilder<'c, C> {
        self.method(Method::Post, request_uri)
    }

    /// `POST request_uri` with `body`.
    #[must_use]
    pub fn post_with(self, request_uri: impl Into<String>, body: Body) -> QueryBuilder<'c, C> {
        QueryBuilder::new(self.client, Method::Post, request_uri.into(), Some(body))
    }

    /// `POST request_uri` with `content` serialized as JSON.
    ///
    /// A serialization failure is reported by `build`/`send`.
    #[must_use]
    pub fn post_json<T>(self, request_uri: impl Into<String>, content: &T) -> QueryBuilder<'c, C>
    where
        T: serde::Serialize + ?Sized,
    {
        self.with_content(Method::Post, request_uri.into(), Body::json(content))
    }

    /// `POST request_uri` with `content` form-url-encoded.
    #[must_use]
    pub fn post_form<T>(self, request_uri: impl Into<String>, content: &T) -> QueryBuilder<'c, C>
    where
        T: serde::Serialize + ?Sized,
    {
        self.with_content(Method::Post, request_uri.into(), Body::form(content))
    }

    /// `POST request_uri` with `content` serialized as XML.
    #[must_use]
    pub fn post_xml<T>(self, request_uri: impl Into<String>, content: &T) -> QueryBuilder<'c, C>
    where
        T: serde::Serialize + ?Sized,
    {
        self.with_content(Method::Post, request_uri.into(), Body::xml(content))
    }

    /// `PUT request_uri` without a body.
    #[must_use]
    pub fn put(self, request_uri: impl Into<String>) -> QueryBuilder<'c, C> {
        self.method(Method::Put, request_uri)
    }

    /// `PUT request_uri` with `body`.
    #[must_use]
    pub fn put_with(self, request_uri: impl Into<String>, body: Body) -> QueryBuilder<'c, C> {
        QueryBuilder::new(self.client, Method::Put, request_uri.into(), Some(body))
    }

    /// `PUT request_uri` with `content` serialized as JSON.
    #[must_use]
    pub fn put_json<T>(self, request_uri: impl Into<String>, content: &T) -> QueryBuilder<'c, C>
    where
        T: serde::Serialize + ?Sized,
    {
        self.with_content(Method::Put, request_uri.into(), Body::json(content))
    }

    /// `PUT request_uri` with `content` serialized as XML.
    #[must_use]
    pub fn put_xml<T>(self, request_uri: impl Into<String>, content: &T) -> QueryBuilder<'c, C>
    where
        T: serde::Serialize + ?Sized,
    {
        self.with_content(Method::Put, request_uri.into(), Body::xml(content))
    }

    /// `DELETE request_uri`.
    #[must_use]
    pub fn delete(self, request_uri: impl Into<String>) -> QueryBuilder<'c, C> {
        self.method(Method::Delete, request_uri)
    }

    /// `HEAD request_uri`.
    #[must_use]
    pub fn head(self, request_uri: impl Into<String>) -> QueryBuilder<'c, C> {
        self.method(Method::Head, request_uri)
    }

    fn with_content(
        self,
        method: Method,
        request_uri: String,
        body: reqwright_core::Result<Body>,
    ) -> QueryBuilder<'c, C> {
        match body {
            Ok(body) => QueryBuilder::new(self.client, method, request_uri, Some(body)),
            Err(err) => QueryBuilder::new(self.client, method, request_uri, None).fail(err),
        }
    }
}
