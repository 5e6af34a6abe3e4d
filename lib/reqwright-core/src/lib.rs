//! Core types for the reqwright fluent HTTP client.
//!
//! This crate provides the transport-independent pieces:
//! - [`QueryString`] - Ordered query parameters with type-aware value rendering
//! - [`UriRef`] - Relative or absolute URI references
//! - [`Method`], [`Headers`], [`Body`] - Request building blocks
//! - [`Request`] and [`Response`] - Materialized HTTP messages
//! - [`HttpClient`] - The client contract requests are executed through
//! - [`Error`] and [`Result`] - Error handling

mod body;
mod client;
mod error;
mod headers;
mod method;
pub mod prelude;
mod query;
mod request;
mod response;
mod uri_ref;

pub use body::{Body, ContentType, from_json, to_form, to_json, to_xml};
pub use client::HttpClient;
pub use error::{Error, Result};
pub use headers::{Headers, SET_COOKIE};
pub use method::Method;
pub use query::{Entry, IntoQueryValue, QueryString, QueryValue};
pub use request::Request;
pub use response::Response;
pub use uri_ref::UriRef;
