// ABOUTME: Terminal error boundaries for unmatched routes and panicking handlers
// ABOUTME: Every error leaves the server as the uniform envelope with a matching status code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

use std::any::Any;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Json, Router,
};
use http::{header, Method, StatusCode, Uri};
use proposal_core::ErrorEnvelope;
use tower_http::catch_panic::CatchPanicLayer;

use crate::logging::AppLogger;

/// Add the not-found fallback and panic recovery to `router`
///
/// Must be applied after every route is merged so the fallback and the panic
/// layer cover all of them.
pub fn with_error_boundaries(router: Router) -> Router {
    router
        .fallback(handle_not_found)
        .layer(middleware::from_fn(envelope_bare_errors))
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Catch-all for requests no route matched
async fn handle_not_found(method: Method, uri: Uri) -> (StatusCode, Json<ErrorEnvelope>) {
    AppLogger::log_unmatched_route(method.as_str(), uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(ErrorEnvelope::not_found(method.as_str(), uri.path())),
    )
}

/// Wrap error responses produced by the router itself (such as 405) in the
/// envelope; responses that already carry JSON pass through untouched
async fn envelope_bare_errors(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;

    let status = response.status();
    let is_error = status.is_client_error() || status.is_server_error();
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));
    if !is_error || is_json {
        return response;
    }

    let reason = status.canonical_reason().unwrap_or("Error");
    let envelope = ErrorEnvelope {
        error: reason.to_owned(),
        message: format!("{reason}: {method} {path}"),
        status_code: status.as_u16(),
    };
    tracing::debug!(http.status = status.as_u16(), http.path = %path, "Wrapped bare error response");

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.remove(header::CONTENT_TYPE);
    (parts, Json(envelope)).into_response()
}

/// Render a panic as a 500 envelope; the panic payload stays in the logs
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = %detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorEnvelope::internal()),
    )
        .into_response()
}
