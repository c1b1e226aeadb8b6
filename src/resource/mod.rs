//! Asynchronous resource state.
//!
//! [`ResourceState`] is the tri-state every fetched screenful of data lives
//! in: it starts `Loading`, then lands in `Success` or `Error`. A fresh
//! fetch resets it to `Loading`; nothing else leaves `Error`.
//!
//! [`JsonResource`] owns one state for a single URL, [`PaginatedResource`]
//! owns one for an infinite-scroll list.

use std::collections::BTreeMap;
use std::fmt;

use crate::json::Json;

mod json_resource;
mod paginated;

pub use json_resource::JsonResource;
pub use paginated::PaginatedResource;

/// State of an asynchronous fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> ResourceState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResourceState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResourceState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResourceState::Error(_))
    }

    /// The payload, if the fetch has succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            ResourceState::Success(data) => Some(data),
            _ => None,
        }
    }

    /// The failure message, if the fetch has failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            ResourceState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        ResourceState::Loading
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for ResourceState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => ResourceState::Success(data),
            Err(err) => ResourceState::Error(err.to_string()),
        }
    }
}

impl ResourceState<Json> {
    /// Concatenate a freshly fetched page onto the current one.
    ///
    /// Both sides are projected to their arrays, narrowed first by
    /// `key_path` when given (the `"results"` envelope the catalog API
    /// returns). The combined list is wrapped back up as
    /// `Success({key_path: [..]})`, or a bare array when unkeyed.
    ///
    /// Defined only in `Success`; while `Loading` or `Error` this is a
    /// no-op, so callers gate on [`is_success`](Self::is_success) before
    /// requesting the next page.
    pub fn append_data(&mut self, new_data: Json, key_path: Option<&str>) {
        let Some(current) = self.data() else {
            return;
        };

        let narrow = |value: &Json| -> Vec<Json> {
            match key_path {
                Some(key) => value.get(key).array().to_vec(),
                None => value.array().to_vec(),
            }
        };

        let mut combined = narrow(current);
        combined.extend(narrow(&new_data));

        let merged = match key_path {
            Some(key) => {
                let mut envelope = BTreeMap::new();
                envelope.insert(key.to_string(), Json::Array(combined));
                Json::Object(envelope)
            }
            None => Json::Array(combined),
        };
        *self = ResourceState::Success(merged);
    }
}
