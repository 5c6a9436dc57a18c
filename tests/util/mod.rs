//! Test utilities for building application state and reading handler responses

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;
use touchline::server::{
    cache::{AppCache, MemoryCache},
    model::app::AppState,
};
use touchline_test_utils::TestContext;

/// Extension trait for TestContext to create AppState backed by an in-process cache
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            cache: AppCache::Memory(MemoryCache::default()),
        }
    }
}

/// Read and deserialize a JSON response body
pub async fn response_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
