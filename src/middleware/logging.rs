//! Per-request logging.
//!
//! Every request gets an `x-request-id` (generated as a UUID unless the
//! client sent one) and runs inside an `http_request` span carrying method,
//! URI and that id, so any event a handler logs is tied back to its request.

use axum::{body::Body, http::Request, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnFailure, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Wrap `router` with request-id assignment and request/response tracing
///
/// The last layer added sees the request first, so the id is set before the
/// trace span is created and copied onto the response on the way out.
pub fn with_request_logging<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
