//! Single-URL JSON resource.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::fetch::fetch_json;
use crate::json::Json;
use crate::resource::ResourceState;
use crate::traits::HttpClient;

/// Owner of one [`ResourceState<Json>`] fed by a URL.
///
/// `load` can be called again at any time (pull-to-refresh, retry after an
/// error); each call supersedes the previous one. A completion is applied
/// only if no newer `load` has started since it was issued, so a slow stale
/// response can never overwrite a fresh one.
///
/// Handles are cheap clones sharing the same state; whoever rendered the
/// screen keeps one and the spawned fetch task keeps another.
pub struct JsonResource<C: HttpClient> {
    client: Arc<C>,
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    state: ResourceState<Json>,
    generation: u64,
}

impl<C: HttpClient> JsonResource<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            inner: Arc::new(Mutex::new(Inner {
                state: ResourceState::Loading,
                generation: 0,
            })),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ResourceState<Json> {
        self.inner.lock().unwrap().state.clone()
    }

    /// Fetch `url`, decode it, and land in `Success` or `Error`.
    ///
    /// When `key_path` is given the decoded value is narrowed to that key
    /// before being stored (e.g. `Some("results")` stores just the list out
    /// of a paginated envelope).
    pub async fn load(&self, url: &str, key_path: Option<&str>) {
        let generation = {
            let mut inner = self.inner.lock().unwrap();
            inner.generation += 1;
            inner.state = ResourceState::Loading;
            inner.generation
        };

        let result = fetch_json(self.client.as_ref(), url).await;

        let mut inner = self.inner.lock().unwrap();
        if inner.generation != generation {
            // A newer load superseded this one while it was in flight.
            debug!(url, "dropping stale completion");
            return;
        }
        inner.state = match result {
            Ok(value) => {
                let narrowed = match key_path {
                    Some(key) => value.get(key).clone(),
                    None => value,
                };
                ResourceState::Success(narrowed)
            }
            Err(err) => ResourceState::Error(err.to_string()),
        };
    }
}

impl<C: HttpClient> Clone for JsonResource<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::Response;
    use bytes::Bytes;
    use std::time::Duration;

    fn client_with(url: &str, body: &str) -> Arc<MockHttpClient> {
        let client = MockHttpClient::new();
        client.set_response(
            url,
            MockResponse::Success(Response::new(200, Bytes::from(body.to_string()))),
        );
        Arc::new(client)
    }

    #[tokio::test]
    async fn test_load_success() {
        let client = client_with("https://api.test/movie/1", r#"{"id":1,"title":"Dune"}"#);
        let resource = JsonResource::new(client);
        assert!(resource.state().is_loading());

        resource.load("https://api.test/movie/1", None).await;

        let state = resource.state();
        assert!(state.is_success());
        assert_eq!(state.data().unwrap()["title"].string_value(), "Dune");
    }

    #[tokio::test]
    async fn test_load_narrows_by_key_path() {
        let client = client_with(
            "https://api.test/popular",
            r#"{"results":[{"id":1}],"page":1}"#,
        );
        let resource = JsonResource::new(client);

        resource
            .load("https://api.test/popular", Some("results"))
            .await;

        let state = resource.state();
        assert_eq!(state.data().unwrap().array().len(), 1);
    }

    #[tokio::test]
    async fn test_load_error_lands_message() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://api.test/down",
            MockResponse::Error(crate::traits::HttpError::ConnectionFailed(
                "refused".to_string(),
            )),
        );
        let resource = JsonResource::new(Arc::new(client));

        resource.load("https://api.test/down", None).await;

        let state = resource.state();
        assert_eq!(state.error(), Some("Connection failed: refused"));
    }

    #[tokio::test]
    async fn test_reload_after_error_resets_to_loading() {
        let client = MockHttpClient::new();
        client.set_delay("https://api.test", Duration::from_millis(30));
        client.set_default_response(MockResponse::Error(
            crate::traits::HttpError::Other("down".to_string()),
        ));
        let resource = JsonResource::new(Arc::new(client));

        resource.load("https://api.test/a", None).await;
        assert!(resource.state().is_error());

        let task = {
            let resource = resource.clone();
            tokio::spawn(async move { resource.load("https://api.test/a", None).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(resource.state().is_loading());
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_stale_completion_is_dropped() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://api.test/slow",
            MockResponse::Success(Response::new(200, Bytes::from(r#"{"from":"slow"}"#))),
        );
        client.set_delay("https://api.test/slow", Duration::from_millis(50));
        client.set_response(
            "https://api.test/fast",
            MockResponse::Success(Response::new(200, Bytes::from(r#"{"from":"fast"}"#))),
        );

        let resource = JsonResource::new(Arc::new(client));

        let slow = {
            let resource = resource.clone();
            tokio::spawn(async move { resource.load("https://api.test/slow", None).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;

        // Supersede the slow load, then let it finish.
        resource.load("https://api.test/fast", None).await;
        slow.await.unwrap();

        let state = resource.state();
        assert_eq!(state.data().unwrap()["from"].string_value(), "fast");
    }
}
