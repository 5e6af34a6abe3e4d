//! Fluent HTTP request building for Rust.
//!
//! Compose a request from a verb, a request URI, query parameters, and
//! headers, then send it through any [`HttpClient`] and deserialize the
//! response.
//!
//! # Example
//!
//! ```ignore
//! use reqwright::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct Order {
//!     id: u64,
//! }
//!
//! let client = HyperClient::builder()
//!     .base_url("https://api.example.com/".parse()?)
//!     .with_logging()
//!     .build();
//!
//! let orders: Vec<Order> = client
//!     .request()
//!     .get("orders")
//!     .query_all("status", ["open", "pending"])
//!     .query("since", chrono::Utc::now())
//!     .query("limit", Some(50))
//!     .send_json()
//!     .await?;
//! ```

mod builder;
mod client;
mod config;
mod connector;
pub mod middleware;
pub mod prelude;
mod verbs;

pub use builder::QueryBuilder;
pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_USER_AGENT};
pub use verbs::{RequestExt, Verbs};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use reqwright_core::{
    Body, ContentType, Entry, Error, Headers, HttpClient, IntoQueryValue, Method, QueryString,
    QueryValue, Request, Response, Result, SET_COOKIE, UriRef, from_json, to_form, to_json,
    to_xml,
};

pub use url;
