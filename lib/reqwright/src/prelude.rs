//! Prelude module for convenient imports.
//!
//! ```ignore
//! use reqwright::prelude::*;
//! ```

pub use crate::{
    Body, ClientConfig, ContentType, Error, Headers, HttpClient, HyperClient, IntoQueryValue,
    Method, QueryBuilder, QueryString, RequestExt, Request, Response, Result, UriRef,
};
pub use serde::{Deserialize, Serialize};
