use axum::Router;
use axum::extract::FromRef;
use snafu::ResultExt;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

use crate::Result;
use crate::config::Config;
use crate::error::{ServerBindSnafu, ServerSnafu};
use crate::services::strapi::{StrapiClient, StrapiSource};
use crate::web::all_routes;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<Config>,
    pub strapi: Arc<dyn StrapiSource>,
}

pub fn create_app_state(config: Config) -> AppState {
    let strapi = StrapiClient::new(&config.strapi_url, config.page_size);
    AppState {
        config: Arc::new(config),
        strapi: Arc::new(strapi),
    }
}

pub async fn run(config: Config) -> Result<()> {
    let port = config.port;
    let frontend_dir = config.frontend_dir.clone();
    info!("Using Strapi at {}", &config.strapi_url);

    let state = create_app_state(config);

    let routes_all = Router::new()
        .merge(all_routes(state, &frontend_dir))
        .layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            ),
        );

    // Setup the server
    let ip = "127.0.0.1";
    let addr = format!("{}:{}", ip, port);
    info!("HTTP Server running on {}", addr);

    let listener = TcpListener::bind(addr).await.context(ServerBindSnafu)?;
    axum::serve(listener, routes_all.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context(ServerSnafu)?;

    info!("HTTP Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
pub fn create_test_app_state(strapi: crate::services::strapi::StrapiTestSource) -> AppState {
    use std::path::PathBuf;

    let config = Config {
        port: 43710,
        frontend_dir: PathBuf::from("."),
        strapi_url: "http://strapi.test".to_string(),
        strapi_token: None,
        page_size: 100,
        ga_tag_id: None,
    };

    AppState {
        config: Arc::new(config),
        strapi: Arc::new(strapi),
    }
}
