use axum::Form;
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use serde::Deserialize;
use tracing::info;

use super::TOKEN_COOKIE;

#[derive(Deserialize)]
pub struct TokenFormData {
    #[serde(default)]
    pub token: String,
}

/// Stores the Strapi API token in a cookie, an empty token clears it
pub async fn post_token_handler(
    cookies: CookieJar,
    Form(payload): Form<TokenFormData>,
) -> impl IntoResponse {
    let token = payload.token.trim().to_string();
    if token.is_empty() {
        info!("Clearing stored API token");
        let jar = cookies.remove(Cookie::build(TOKEN_COOKIE).path("/"));
        return (jar, Redirect::to("/"));
    }

    let cookie = Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    (cookies.add(cookie), Redirect::to("/"))
}
