//! Common test utilities for integration tests.

use std::sync::Arc;

use bytes::Bytes;
use marquee::adapters::mock::{MockHttpClient, MockResponse};
use marquee::api::with_page;
use marquee::traits::Response;

/// A paginated envelope body in the shape the catalog API returns.
pub fn envelope_body(page: u32, ids: &[i64]) -> String {
    let results: Vec<String> = ids
        .iter()
        .map(|id| format!(r#"{{"id":{id},"title":"Movie {id}"}}"#))
        .collect();
    format!(
        r#"{{"results":[{}],"page":{page},"total_pages":500}}"#,
        results.join(",")
    )
}

/// Mock client serving consecutive pages of `base_url` starting at page 1.
pub fn paged_client(base_url: &str, pages: &[&[i64]]) -> Arc<MockHttpClient> {
    let client = MockHttpClient::new();
    for (i, ids) in pages.iter().enumerate() {
        let page = (i + 1) as u32;
        client.set_response(
            &with_page(base_url, page),
            MockResponse::Success(Response::new(
                200,
                Bytes::from(envelope_body(page, ids)),
            )),
        );
    }
    Arc::new(client)
}
