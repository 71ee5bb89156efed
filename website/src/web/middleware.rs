use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::ctx::{Credential, Ctx};
use crate::run::AppState;

use super::TOKEN_COOKIE;

/// Token from the browser cookie, falling back to the configured one
pub fn request_credential(state: &AppState, cookies: &CookieJar) -> Credential {
    let token = cookies
        .get(TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
        .or_else(|| state.config.strapi_token.clone());

    Credential::new(token)
}

/// Attaches the request context, never rejects the request
pub async fn ctx_middleware(
    State(state): State<AppState>,
    cookies: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let ctx = Ctx::new(request_credential(&state, &cookies));
    req.extensions_mut().insert(ctx);
    next.run(req).await
}
