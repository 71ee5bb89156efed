use askama::Template;
use axum::extract::Query;
use axum::{Extension, body::Body, extract::State, response::Response};
use snafu::ResultExt;

use crate::{
    Result,
    ctx::Ctx,
    error::{ResponseBuilderSnafu, TemplateSnafu},
    models::{SearchParams, TemplateData},
    run::AppState,
    services::home::{HeroView, load_hero},
};

#[derive(Template)]
#[template(path = "pages/index.html")]
struct IndexTemplate {
    t: TemplateData,
    hero: Option<HeroView>,
    query: String,
    search_url: String,
}

pub async fn index_handler(
    Extension(ctx): Extension<Ctx>,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response<Body>> {
    let mut t = TemplateData::new(&state, &ctx);
    t.title = String::from("Your Passwords");

    let hero = load_hero(state.strapi.as_ref(), ctx.credential()).await;

    // Entries are loaded by the search widget once the page is shown
    let query_string = params.to_string();
    let search_url = if query_string.is_empty() {
        "/entries/search".to_string()
    } else {
        format!("/entries/search?{}", query_string)
    };

    let tpl = IndexTemplate {
        t,
        hero,
        query: params.query().to_string(),
        search_url,
    };

    Ok(Response::builder()
        .status(200)
        .body(Body::from(tpl.render().context(TemplateSnafu)?))
        .context(ResponseBuilderSnafu)?)
}
