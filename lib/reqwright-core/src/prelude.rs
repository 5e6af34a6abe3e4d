//! Prelude module for convenient imports.
//!
//! ```ignore
//! use reqwright_core::prelude::*;
//! ```

pub use crate::{
    Body, ContentType, Error, Headers, HttpClient, IntoQueryValue, Method, QueryString, Request,
    Response, Result, UriRef,
};
