//! Tower middleware layers for the reqwright HTTP client.
//!
//! Layers wrap the transport service inside [`HyperClient`](crate::HyperClient).
//! Add them with [`HyperClientBuilder::layer`](crate::HyperClientBuilder::layer);
//! the first layer added is the outermost.
//!
//! - [`LoggingLayer`] - Logs requests/responses using `tracing`

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for convenience
pub use tower::{Layer, ServiceBuilder};
