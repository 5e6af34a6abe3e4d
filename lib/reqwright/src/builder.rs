//! Fluent query/header accumulation and request dispatch.
//!
//! Builder methods never fail mid-chain. The first error (blank query key,
//! duplicate header, body serialization) is kept and returned by
//! [`QueryBuilder::build`] or any of the `send*` methods.

use bytes::Bytes;
use reqwright_core::{
    Body, Error, Headers, HttpClient, IntoQueryValue, Method, QueryString, Request, Response,
    Result, UriRef,
};
use tracing::debug;

/// A request under construction, bound to the client that will send it.
///
/// Created through [`Verbs`](crate::Verbs).
#[derive(Debug)]
pub struct QueryBuilder<'c, C> {
    client: &'c C,
    method: Method,
    request_uri: String,
    body: Option<Body>,
    query: QueryString,
    headers: Headers,
    error: Option<Error>,
}

impl<'c, C: HttpClient> QueryBuilder<'c, C> {
    pub(crate) fn new(
        client: &'c C,
        method: Method,
        request_uri: String,
        body: Option<Body>,
    ) -> Self {
        Self {
            client,
            method,
            request_uri,
            body,
            query: QueryString::new(),
            headers: Headers::new(),
            error: None,
        }
    }

    pub(crate) fn fail(mut self, err: Error) -> Self {
        self.record(Err(err));
        self
    }

    fn record(&mut self, result: Result<()>) {
        if let Err(err) = result {
            debug!(error = %err, "request builder error deferred");
            self.error.get_or_insert(err);
        }
    }

    /// Adds a query parameter. `None` and blank values are skipped.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl IntoQueryValue) -> Self {
        let result = self.query.add(key, value);
        self.record(result);
        self
    }

    /// Adds every element of `values` under `key`, skipping `None` elements.
    #[must_use]
    pub fn query_all<I>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoQueryValue,
    {
        let result = self.query.add_all(key, values);
        self.record(result);
        self
    }

    /// Adds a header. Only `Set-Cookie` may be added more than once.
    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        let result = self.headers.insert(name, value);
        self.record(result);
        self
    }

    /// Adds a header whose values are joined with `", "`.
    #[must_use]
    pub fn header_values<I>(self, name: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .fold(String::new(), |mut joined, value| {
                if !joined.is_empty() {
                    joined.push_str(", ");
                }
                joined.push_str(value.as_ref());
                joined
            });
        self.header(name, joined)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URI as given, without the query string.
    #[must_use]
    pub fn request_uri(&self) -> &str {
        &self.request_uri
    }

    /// Query parameters added so far.
    #[must_use]
    pub const fn query_string(&self) -> &QueryString {
        &self.query
    }

    /// Headers added so far.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Request body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Materialize the request.
    ///
    /// Relative request URIs are resolved against the client's base URL.
    /// A body sets `Content-Type` unless a header already did.
    ///
    /// # Errors
    ///
    /// - the first error deferred while chaining,
    /// - [`Error::InvalidArgument`] for a blank request URI,
    /// - [`Error::UriFormat`] for a malformed request URI,
    /// - [`Error::InvalidRequest`] for a relative URI without a base URL.
    pub fn build(self) -> Result<Request> {
        let Self {
            client,
            method,
            request_uri,
            body,
            query,
            mut headers,
            error,
        } = self;

        if let Some(err) = error {
            return Err(err);
        }
        if request_uri.trim().is_empty() {
            return Err(Error::invalid_argument("request_uri"));
        }

        let url = match query.render_uri(&request_uri)? {
            UriRef::Absolute(url) => url,
            relative => {
                let base = client.base_url().ok_or_else(|| {
                    Error::invalid_request(format!(
                        "relative URI `{relative}` requires a client base URL"
                    ))
                })?;
                relative.resolve(base)?
            }
        };

        if let Some(body) = &body {
            headers.insert_default("Content-Type", body.content_type().as_str());
        }

        debug!(%method, %url, "built request");
        Ok(Request::from_parts(method, url, headers, body))
    }

    /// Build and execute the request. Any status code is returned as is.
    pub async fn send(self) -> Result<Response> {
        let client = self.client;
        let request = self.build()?;
        client.execute(request).await
    }

    /// Send, require a 2xx status, and deserialize the JSON body.
    pub async fn send_json<T: serde::de::DeserializeOwned>(self) -> Result<T> {
        self.send().await?.error_for_status()?.json()
    }

    /// Send, require a 2xx status, and return the body as text.
    pub async fn send_text(self) -> Result<String> {
        self.send().await?.error_for_status()?.text()
    }

    /// Send, require a 2xx status, and return the raw body.
    pub async fn send_bytes(self) -> Result<Bytes> {
        Ok(self.send().await?.error_for_status()?.into_body())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert2::{check, let_assert};
    use url::Url;

    use super::*;
    use crate::RequestExt;

    /// Records requests and answers with a canned response.
    struct Recorder {
        base_url: Option<Url>,
        status: u16,
        body: &'static str,
        seen: Mutex<Vec<Request>>,
    }

    impl Recorder {
        fn new(base_url: Option<&str>) -> Self {
            Self {
                base_url: base_url.map(|url| Url::parse(url).expect("base url")),
                status: 200,
                body: "",
                seen: Mutex::new(Vec::new()),
            }
        }

        fn responding(mut self, status: u16, body: &'static str) -> Self {
            self.status = status;
            self.body = body;
            self
        }
    }

    impl HttpClient for Recorder {
        async fn execute(&self, request: Request) -> Result<Response> {
            self.seen.lock().expect("lock").push(request);
            Ok(Response::new(
                self.status,
                Headers::new(),
                Bytes::from_static(self.body.as_bytes()),
            ))
        }

        fn base_url(&self) -> Option<&Url> {
            self.base_url.as_ref()
        }
    }

    #[test]
    fn build_composes_query_in_order() {
        let client = Recorder::new(None);
        let request = client
            .request()
            .get("http://localhost")
            .query_all("key1", [1, 2, 3])
            .query("key2", "value2")
            .query("skipped", Option::<u32>::None)
            .build()
            .expect("build");

        check!(request.method() == Method::Get);
        check!(request.url().as_str() == "http://localhost/?key1=1&key1=2&key1=3&key2=value2");
    }

    #[test]
    fn build_without_query_keeps_uri() {
        let client = Recorder::new(None);
        let request = client
            .request()
            .delete("https://api.example.com/users/7")
            .build()
            .expect("build");

        check!(request.url().as_str() == "https://api.example.com/users/7");
        check!(request.url().query().is_none());
    }

    #[test]
    fn build_resolves_relative_against_base() {
        let client = Recorder::new(Some("https://api.example.com/v1/"));
        let request = client
            .request()
            .get("users")
            .query("page", 2)
            .build()
            .expect("build");

        check!(request.url().as_str() == "https://api.example.com/v1/users?page=2");
    }

    #[test]
    fn build_relative_without_base_fails() {
        let client = Recorder::new(None);
        let result = client.request().get("/users").build();
        let_assert!(Err(Error::InvalidRequest(message)) = result);
        check!(message.contains("/users"));
    }

    #[test]
    fn build_rejects_blank_uri() {
        let client = Recorder::new(None);
        let_assert!(Err(Error::InvalidArgument { name }) = client.request().get("  ").build());
        check!(name == "request_uri");
    }

    #[test]
    fn build_rejects_malformed_uri() {
        let client = Recorder::new(None);
        let result = client.request().get("http://exa mple.com").build();
        let_assert!(Err(Error::UriFormat(_)) = result);
    }

    #[test]
    fn blank_query_key_is_deferred() {
        let client = Recorder::new(None);
        let builder = client
            .request()
            .get("http://localhost")
            .query("", "value")
            .query("ok", 1);

        check!(builder.query_string().len() == 1);
        let_assert!(Err(Error::InvalidArgument { name }) = builder.build());
        check!(name == "key");
    }

    #[test]
    fn duplicate_header_is_deferred() {
        let client = Recorder::new(None);
        let result = client
            .request()
            .get("http://localhost")
            .header("Accept", "application/json")
            .header("accept", "text/plain")
            .build();

        let_assert!(Err(Error::DuplicateHeader(name)) = result);
        check!(name == "accept");
    }

    #[test]
    fn set_cookie_header_may_repeat() {
        let client = Recorder::new(None);
        let request = client
            .request()
            .get("http://localhost")
            .header("Set-Cookie", "a=1")
            .header("Set-Cookie", "b=2")
            .header_values("Accept", ["application/json", "text/plain"])
            .build()
            .expect("build");

        let cookies: Vec<_> = request.headers().get_all("set-cookie").collect();
        check!(cookies == ["a=1", "b=2"]);
        check!(request.header("accept") == Some("application/json, text/plain"));
    }

    #[test]
    fn json_body_sets_content_type() {
        #[derive(serde::Serialize)]
        struct Payload {
            name: &'static str,
        }

        let client = Recorder::new(None);
        let request = client
            .request()
            .post_json("http://localhost/items", &Payload { name: "widget" })
            .build()
            .expect("build");

        check!(request.method() == Method::Post);
        check!(request.header("content-type") == Some("application/json; charset=utf-8"));
        let_assert!(Some(body) = request.body());
        check!(body.as_bytes().as_ref() == br#"{"name":"widget"}"#);
    }

    #[test]
    fn explicit_content_type_wins() {
        let client = Recorder::new(None);
        let request = client
            .request()
            .put_with("http://localhost/doc", Body::text("a,b"))
            .header("Content-Type", "text/csv")
            .build()
            .expect("build");

        let content_types: Vec<_> = request.headers().get_all("content-type").collect();
        check!(content_types == ["text/csv"]);
    }

    #[test]
    fn head_and_post_without_body() {
        let client = Recorder::new(None);
        let request = client.request().head("http://localhost").build().expect("head");
        check!(request.method() == Method::Head);
        check!(request.body().is_none());

        let request = client.request().post("http://localhost").build().expect("post");
        check!(request.header("content-type").is_none());
    }

    #[tokio::test]
    async fn send_hands_request_to_client() {
        let client = Recorder::new(Some("http://localhost/"));
        let response = client
            .request()
            .get("search")
            .query("q", "two words")
            .send()
            .await
            .expect("send");

        check!(response.is_success());
        let seen = client.seen.lock().expect("lock");
        let_assert!([request] = seen.as_slice());
        check!(request.url().as_str() == "http://localhost/search?q=two+words");
    }

    #[tokio::test]
    async fn send_does_not_reach_client_on_error() {
        let client = Recorder::new(None);
        let result = client.request().get("http://localhost").query(" ", 1).send().await;

        let_assert!(Err(Error::InvalidArgument { .. }) = result);
        check!(client.seen.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn send_json_deserializes() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Item {
            id: u32,
        }

        let client = Recorder::new(None).responding(200, r#"[{"id":1},{"id":2}]"#);
        let items: Vec<Item> = client
            .request()
            .get("http://localhost/items")
            .send_json()
            .await
            .expect("json");

        check!(items == [Item { id: 1 }, Item { id: 2 }]);
    }

    #[tokio::test]
    async fn typed_helpers_reject_error_status() {
        let client = Recorder::new(None).responding(404, "missing");

        let result = client.request().get("http://localhost/x").send_text().await;
        let_assert!(Err(err) = result);
        check!(err.status() == Some(404));
        check!(err.body() == Some(&Bytes::from_static(b"missing")));

        // the raw response is still available through `send`
        let response = client.request().get("http://localhost/x").send().await.expect("send");
        check!(response.status() == 404);
    }
}
