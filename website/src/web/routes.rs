use axum::extract::State;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get, get_service, post};
use axum::{Extension, Router, middleware};
use std::path::PathBuf;
use tower_http::services::{ServeDir, ServeFile};
use tracing::error;

use crate::ctx::Ctx;
use crate::error::ErrorInfo;
use crate::run::AppState;

use super::entries::{
    add_entry_button_handler, new_entry_handler, post_new_entry_handler, search_entries_handler,
};
use super::health::{health_live_handler, health_ready_handler};
use super::index::index_handler;
use super::middleware::ctx_middleware;
use super::prefs::post_token_handler;
use super::users::{new_user_handler, post_new_user_handler, users_handler};
use super::{error_handler, handle_error};

pub fn all_routes(state: AppState, frontend_dir: &PathBuf) -> Router {
    Router::new()
        .merge(page_routes(state.clone()))
        .merge(health_routes(state.clone()))
        .merge(assets_routes(frontend_dir))
        .fallback(any(error_handler).with_state(state))
}

pub fn assets_routes(dir: &PathBuf) -> Router {
    let target_dir = dir.join("public");
    Router::new()
        .route(
            "/favicon.ico",
            get_service(ServeFile::new(target_dir.join("favicon.ico"))),
        )
        .nest_service(
            "/assets",
            get_service(
                ServeDir::new(target_dir.join("assets"))
                    .not_found_service(file_not_found.into_service()),
            ),
        )
}

async fn file_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "File not found")
}

pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/prefs/token", post(post_token_handler))
        .nest("/entries", entry_routes(state.clone()))
        .nest("/users", user_routes(state.clone()))
        .layer(middleware::map_response_with_state(
            state.clone(),
            response_mapper,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            ctx_middleware,
        ))
        .with_state(state)
}

fn entry_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/search", get(search_entries_handler))
        .route(
            "/new",
            get(new_entry_handler).post(post_new_entry_handler),
        )
        .route("/new/cancel", get(add_entry_button_handler))
        .with_state(state)
}

fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(users_handler))
        .route("/new", get(new_user_handler).post(post_new_user_handler))
        .with_state(state)
}

fn health_routes(state: AppState) -> Router {
    Router::new()
        .route("/health/liveness", get(health_live_handler))
        .route("/health/readiness", get(health_ready_handler))
        .with_state(state)
}

async fn response_mapper(
    State(state): State<AppState>,
    Extension(ctx): Extension<Ctx>,
    headers: HeaderMap,
    res: Response,
) -> Response {
    let error = res.extensions().get::<ErrorInfo>();
    if let Some(e) = error {
        if e.status_code.is_server_error() {
            error!("{}", e.message);
            if let Some(bt) = &e.backtrace {
                error!("{}", bt);
            }
        }

        let full_page = headers.get("HX-Request").is_none();
        return handle_error(&state, &ctx, e.clone(), full_page);
    }
    res
}
