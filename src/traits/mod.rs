//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET against the remote data source

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
