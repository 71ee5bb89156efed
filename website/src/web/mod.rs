mod entries;
mod health;
mod index;
mod middleware;
mod prefs;
mod routes;
mod users;

use askama::Template;
use axum::body::Body;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use tracing::error;

use crate::ctx::Ctx;
use crate::error::ErrorInfo;
use crate::models::TemplateData;
use crate::run::AppState;

pub use routes::all_routes;

pub const TOKEN_COOKIE: &str = "strapi_token";

#[derive(Template)]
#[template(path = "pages/error.html")]
struct ErrorPageTemplate {
    t: TemplateData,
    error: ErrorInfo,
}

#[derive(Template)]
#[template(path = "widgets/error_message.html")]
struct ErrorMessageTemplate {
    error: ErrorInfo,
}

/// Renders the error as a full page or as an htmx fragment
pub fn handle_error(state: &AppState, ctx: &Ctx, error: ErrorInfo, full_page: bool) -> Response {
    let status = error.status_code;
    let rendered = if full_page {
        let mut t = TemplateData::new(state, ctx);
        t.title = error.title.clone();
        ErrorPageTemplate { t, error }.render()
    } else {
        ErrorMessageTemplate { error }.render()
    };

    let body = match rendered {
        Ok(html) => html,
        Err(e) => {
            error!("Unable to render error page: {}", e);
            "Something went wrong".to_string()
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Something went wrong")))
}

pub async fn error_handler(
    State(state): State<AppState>,
    cookies: CookieJar,
    headers: HeaderMap,
) -> Response<Body> {
    let ctx = Ctx::new(middleware::request_credential(&state, &cookies));
    let full_page = headers.get("HX-Request").is_none();
    handle_error(&state, &ctx, ErrorInfo::not_found(), full_page)
}
