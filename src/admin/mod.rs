//! Admin HTTP surface
//!
//! Routes:
//! - `GET    /1.0/signinglog[?fromID=N]`
//! - `DELETE /1.0/signinglog/:id`
//! - `GET    /health`

pub mod signinglog;

use axum::{
    response::Json,
    routing::{delete, get},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::signinglog::AdminQueryService;

pub fn admin_router(service: AdminQueryService) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/1.0/signinglog", get(signinglog::handle_list))
        .route("/1.0/signinglog/:id", delete(signinglog::handle_delete))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .into_inner(),
        )
        .with_state(service)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "signinglog-admin",
        "timestamp": chrono::Utc::now()
    }))
}
