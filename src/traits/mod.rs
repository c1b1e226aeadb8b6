//! Trait abstractions for dependency injection and testability.
//!
//! The only seam the catalog core needs is the transport: everything above
//! it (decoding, resource state, stores) is plain owned data.

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
