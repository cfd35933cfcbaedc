//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with the [`State`](axum::extract::State) and session of a
//! [`TestContext`], verifying status codes, response bodies and the session handling shared
//! by every endpoint.

mod finding;
mod item;
mod team;
mod user;

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;
use vigil::server::model::session::user::SessionUserId;
use vigil_test_utils::prelude::*;

/// Logs `user_id` in by storing it in the test session
async fn login(test: &TestContext, user_id: i32) {
    SessionUserId::insert(&test.session, user_id).await.unwrap();
}

/// Deserializes the JSON body of a handler response
async fn read_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
