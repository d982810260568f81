//! Reqwest-backed implementation of the Poolside catalog API.
//!
//! The engine in `poolside-core` only knows the [`poolside_core::CatalogApi`]
//! trait; this crate supplies the HTTP client that talks to the actual
//! backend, plus the on-disk client configuration.

pub mod api_client;
pub mod config;

pub use api_client::ApiClient;
pub use config::ClientConfig;
