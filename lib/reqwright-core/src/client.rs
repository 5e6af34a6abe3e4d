//! The HTTP client contract.
//!
//! The fluent builder never talks to the network itself: it materializes a
//! [`Request`] and hands it to an [`HttpClient`]. Implement the trait to plug
//! in another transport or a test double.

use std::future::Future;

use url::Url;

use crate::{Request, Response, Result};

/// Executes materialized requests.
///
/// # Example
///
/// ```
/// use reqwright_core::{HttpClient, Request, Response, Result, Headers};
///
/// struct Echo;
///
/// impl HttpClient for Echo {
///     async fn execute(&self, request: Request) -> Result<Response> {
///         let body = request.url().as_str().to_owned().into();
///         Ok(Response::new(200, Headers::new(), body))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;

    /// Base URL that relative request URIs are resolved against.
    fn base_url(&self) -> Option<&Url> {
        None
    }
}

impl<C: HttpClient> HttpClient for std::sync::Arc<C> {
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send {
        (**self).execute(request)
    }

    fn base_url(&self) -> Option<&Url> {
        (**self).base_url()
    }
}
