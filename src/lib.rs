//! Marquee - client core for a movie catalog browser
//!
//! The catalog API publishes no schema, so everything revolves around a
//! dynamic JSON value with fail-soft accessors ([`json::Json`]), the
//! loading/success/error state every fetched screen lives in
//! ([`resource::ResourceState`]), single-shot fetch pipelines over a
//! mockable transport ([`fetch`], [`traits::HttpClient`]), and file-backed
//! keyed lists for favorites and ratings ([`store::FileStore`]).

pub mod adapters;
pub mod api;
pub mod fetch;
pub mod json;
pub mod prelude;
pub mod resource;
pub mod store;
pub mod traits;
