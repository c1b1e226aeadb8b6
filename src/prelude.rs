//! Prelude module for convenient imports.
//!
//! ```ignore
//! use marquee::prelude::*;
//! ```

// Dynamic JSON value
pub use crate::json::{DecodeError, Json};

// Resource state machine
pub use crate::resource::{JsonResource, PaginatedResource, ResourceState};

// Fetch pipeline
pub use crate::fetch::{fetch_bytes, fetch_json, FetchError};

// Transport seam
pub use crate::adapters::ReqwestHttpClient;
pub use crate::traits::{Headers, HttpClient, HttpError, Response};

// Endpoints and persistence
pub use crate::api::{Catalog, FeaturedGenre};
pub use crate::store::FileStore;
