//! API middleware

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::{info, warn};

use core_kernel::UserId;

/// The authenticated actor performing the request
///
/// Resolved once from the `X-Actor-Id` header and threaded explicitly
/// into every domain call.
#[derive(Debug, Clone, Copy)]
pub struct ActorId(pub UserId);

/// Actor propagation middleware
///
/// Extracts the acting user from the `X-Actor-Id` header and stores it
/// in the request extensions. Requests without a parseable actor are
/// refused.
pub async fn actor_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let header = request
        .headers()
        .get("x-actor-id")
        .and_then(|h| h.to_str().ok());

    let actor = match header.and_then(|value| value.parse::<UserId>().ok()) {
        Some(id) => ActorId(id),
        None => {
            warn!("Missing or invalid X-Actor-Id header");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    request.extensions_mut().insert(actor);
    Ok(next.run(request).await)
}

/// Audit logging middleware
///
/// Logs all API requests with the acting user for compliance and
/// debugging.
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let actor = request
        .extensions()
        .get::<ActorId>()
        .map(|a| a.0.to_string())
        .unwrap_or_else(|| "anonymous".to_string());

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        actor = %actor,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "api request"
    );

    response
}
