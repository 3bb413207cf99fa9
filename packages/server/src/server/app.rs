//! Application setup and router wiring.

use axum::extract::Extension;
use axum::routing::{get, put};
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{health, members, orders};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the axum application with all routes and layers.
pub fn build_app(db_pool: PgPool) -> Router {
    let state = AppState { db_pool };

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/members",
            get(members::members_v1).post(members::create_member_v1),
        )
        .route(
            "/api/v2/members",
            get(members::members_v2).post(members::create_member_v2),
        )
        .route("/api/v2/members/:id", put(members::update_member_v2))
        .route("/api/v1/simple-orders", get(orders::orders_v1))
        .route("/api/v2/simple-orders", get(orders::orders_v2))
        .route("/api/v3/simple-orders", get(orders::orders_v3))
        .route("/api/v4/simple-orders", get(orders::orders_v4))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
