use axum::{
    body::{to_bytes, Body, Bytes},
    extract::State,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    config::{ChirpRules, Platform},
    router,
    service::metrics::VisitCounter,
    state::AppState,
};

mod user;

/// Builds application state over a fresh in-memory database with the user table.
///
/// The returned `TestContext` owns the original connection and must outlive the state.
async fn setup(platform: Platform) -> (TestContext, AppState) {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();
    let state = AppState::new(db, VisitCounter::new(), ChirpRules::default(), platform);

    (test, state)
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Serializes a DTO into the raw body a handler receives.
fn dto_body<T: Serialize>(dto: &T) -> Bytes {
    Bytes::from(serde_json::to_vec(dto).unwrap())
}

fn json_request(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn untyped_request(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(body.into())
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
