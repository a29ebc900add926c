//! HTTP API Layer
//!
//! This crate provides the REST API for the contract claims core using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for claims and users
//! - **Middleware**: Actor propagation, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! The acting user arrives as an `X-Actor-Id` header and is threaded
//! explicitly through every domain call; there is no ambient session.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(claims, users, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ports::ClaimStore;
use domain_users::ports::UserStore;

use crate::config::ApiConfig;
use crate::handlers::{claims, health, users};
use crate::middleware::{actor_middleware, audit_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub claims: Arc<dyn ClaimStore>,
    pub users: Arc<dyn UserStore>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `claims` - Claim store adapter
/// * `users` - User store adapter
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(
    claims: Arc<dyn ClaimStore>,
    users: Arc<dyn UserStore>,
    config: ApiConfig,
) -> Router {
    let state = AppState {
        claims,
        users,
        config,
    };

    // Public routes (no actor required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Claims routes
    let claims_routes = Router::new()
        .route("/", post(claims::submit_claim))
        .route("/", get(claims::list_claims))
        .route("/validate-entries", post(claims::validate_entries))
        .route("/:id", get(claims::get_claim))
        .route("/:id/process", post(claims::process_claim))
        .route("/:id/decision", post(claims::decide_claim));

    // User routes
    let user_routes = Router::new()
        .route("/", post(users::register_user))
        .route("/check-duplicate", post(users::check_duplicate));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .nest("/users", user_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn(actor_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
