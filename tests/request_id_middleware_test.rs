// ABOUTME: Integration tests for request id middleware
// ABOUTME: Generation, propagation of caller ids, and availability in handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

mod helpers;

use axum::{middleware, routing::get, Extension, Router};
use helpers::axum_test::AxumTestRequest;
use proposal_mock_server::middleware::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
use uuid::Uuid;

async fn echo_handler(Extension(request_id): Extension<RequestId>) -> String {
    format!("Request ID: {}", request_id.as_str())
}

fn app() -> Router {
    Router::new()
        .route("/", get(echo_handler))
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn test_request_id_generated_when_absent() {
    let response = AxumTestRequest::get("/").send(app()).await;

    let header = response.header(REQUEST_ID_HEADER).unwrap().to_owned();
    assert!(Uuid::parse_str(&header).is_ok(), "Request ID is not a valid UUID");
    assert_eq!(response.text(), format!("Request ID: {header}"));
}

#[tokio::test]
async fn test_request_id_from_caller_is_kept() {
    let response = AxumTestRequest::get("/")
        .header(REQUEST_ID_HEADER, "frontend-42")
        .send(app())
        .await;

    assert_eq!(response.header(REQUEST_ID_HEADER), Some("frontend-42"));
    assert_eq!(response.text(), "Request ID: frontend-42");
}

#[tokio::test]
async fn test_blank_request_id_is_replaced() {
    let response = AxumTestRequest::get("/")
        .header(REQUEST_ID_HEADER, "   ")
        .send(app())
        .await;

    let header = response.header(REQUEST_ID_HEADER).unwrap();
    assert!(Uuid::parse_str(header).is_ok());
}

#[tokio::test]
async fn test_each_request_gets_a_new_id() {
    let first = AxumTestRequest::get("/").send(app()).await;
    let second = AxumTestRequest::get("/").send(app()).await;
    assert_ne!(
        first.header(REQUEST_ID_HEADER),
        second.header(REQUEST_ID_HEADER)
    );
}
