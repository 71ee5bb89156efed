use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use tracing::warn;

use crate::run::AppState;

#[derive(Serialize)]
pub struct LiveStatus {
    pub status: String,
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub strapi: String,
}

pub async fn health_live_handler() -> impl IntoResponse {
    // Nothing much to check, if it hits this function, it's alive
    Json(LiveStatus {
        status: "UP".to_string(),
    })
}

pub async fn health_ready_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.strapi.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthStatus {
                status: "UP".to_string(),
                message: "All systems go".to_string(),
                checks: HealthChecks {
                    strapi: "UP".to_string(),
                },
            }),
        ),
        Err(e) => {
            warn!("Strapi readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus {
                    status: "DOWN".to_string(),
                    message: "Some health checks failed".to_string(),
                    checks: HealthChecks {
                        strapi: "DOWN".to_string(),
                    },
                }),
            )
        }
    }
}
