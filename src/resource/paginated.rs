//! Paginated JSON resource for infinite-scroll lists.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::api::with_page;
use crate::fetch::fetch_json;
use crate::json::Json;
use crate::resource::ResourceState;
use crate::traits::HttpClient;

/// Owner of a [`ResourceState<Json>`] accumulated one page at a time.
///
/// Each [`load_more`](Self::load_more) call fetches `base_url` with the next
/// `page` query parameter and appends the new page's items (narrowed by
/// `key_path`, `"results"` by default) onto the accumulated list.
///
/// The UI trigger for `load_more` is edge-triggered at the last rendered
/// item and can fire twice before the first fetch completes, so an
/// in-flight flag suppresses duplicate loads: while one page is pending,
/// further calls return `false` without issuing a request. The page counter
/// only advances after a page lands successfully; a failed page is
/// refetched by the next trigger.
pub struct PaginatedResource<C: HttpClient> {
    client: Arc<C>,
    base_url: String,
    key_path: String,
    inner: Arc<Mutex<PageInner>>,
}

struct PageInner {
    state: ResourceState<Json>,
    page: u32,
    in_flight: bool,
}

impl<C: HttpClient> PaginatedResource<C> {
    pub fn new(client: Arc<C>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            key_path: "results".to_string(),
            inner: Arc::new(Mutex::new(PageInner {
                state: ResourceState::Loading,
                page: 1,
                in_flight: false,
            })),
        }
    }

    /// Use a different envelope key than `"results"`.
    pub fn with_key_path(mut self, key_path: impl Into<String>) -> Self {
        self.key_path = key_path.into();
        self
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ResourceState<Json> {
        self.inner.lock().unwrap().state.clone()
    }

    /// The next page that will be requested (1-based).
    pub fn page(&self) -> u32 {
        self.inner.lock().unwrap().page
    }

    pub fn is_loading_more(&self) -> bool {
        self.inner.lock().unwrap().in_flight
    }

    /// Items accumulated so far.
    pub fn item_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        match inner.state.data() {
            Some(data) => data.get(&self.key_path).array().len(),
            None => 0,
        }
    }

    /// Infinite-scroll trigger policy: request more when the item being
    /// rendered is the last one currently known.
    pub fn wants_more(&self, rendered_index: usize) -> bool {
        let count = self.item_count();
        count > 0 && rendered_index + 1 == count
    }

    /// Fetch the next page. Returns `true` if a request was issued, `false`
    /// if it was suppressed because a page load is already in flight.
    pub async fn load_more(&self) -> bool {
        let (url, page) = {
            let mut inner = self.inner.lock().unwrap();
            if inner.in_flight {
                debug!(base_url = %self.base_url, "page load already in flight");
                return false;
            }
            inner.in_flight = true;
            (with_page(&self.base_url, inner.page), inner.page)
        };

        let result = fetch_json(self.client.as_ref(), &url).await;

        let mut inner = self.inner.lock().unwrap();
        inner.in_flight = false;
        match result {
            Ok(value) => {
                if inner.state.is_success() {
                    inner.state.append_data(value, Some(&self.key_path));
                } else {
                    inner.state = ResourceState::Success(value);
                }
                inner.page += 1;
            }
            Err(err) => {
                debug!(url, page, "page load failed: {err}");
                // The first page's failure is the screen's failure. A later
                // page keeps what already loaded; the counter stays put so
                // the next trigger retries this page.
                if !inner.state.is_success() {
                    inner.state = ResourceState::Error(err.to_string());
                }
            }
        }
        true
    }
}

impl<C: HttpClient> Clone for PaginatedResource<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            base_url: self.base_url.clone(),
            key_path: self.key_path.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}
