//! Concrete implementations of trait abstractions.
//!
//! Production adapters implementing the traits defined in `crate::traits`,
//! plus test doubles under [`mock`].
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`mock::MockHttpClient`] - Configurable canned responses for tests

pub mod mock;
pub mod reqwest_http;

pub use reqwest_http::ReqwestHttpClient;
