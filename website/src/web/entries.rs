use askama::Template;
use axum::extract::Query;
use axum::{Extension, Form, body::Body, extract::State, response::Response};
use snafu::ResultExt;
use tracing::warn;

use crate::models::SearchParams;
use crate::services::entries::{EntryFormData, create_entry, search_entries};
use crate::{
    Result,
    ctx::Ctx,
    error::{ErrorInfo, ResponseBuilderSnafu, TemplateSnafu},
    run::AppState,
};
use dto::entry::PasswordEntryDto;

/// Entry as shown in the listing, absent fields render as blanks
pub struct EntryCard {
    pub id: i64,
    pub app_name: String,
    pub email: String,
    pub text: String,
}

impl From<PasswordEntryDto> for EntryCard {
    fn from(entry: PasswordEntryDto) -> Self {
        Self {
            id: entry.id,
            app_name: entry.app_name.unwrap_or_default(),
            email: entry.email.unwrap_or_default(),
            text: entry.text.unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "widgets/search_entries.html")]
struct SearchEntriesTemplate {
    entries: Vec<EntryCard>,
    loading: bool,
    filtering: bool,
    total: usize,
    error_message: Option<String>,
}

pub async fn search_entries_handler(
    Extension(ctx): Extension<Ctx>,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response<Body>> {
    let mut tpl = SearchEntriesTemplate {
        entries: Vec::new(),
        loading: false,
        filtering: !params.query().trim().is_empty(),
        total: 0,
        error_message: None,
    };

    match search_entries(state.strapi.as_ref(), ctx.credential(), params.query()).await {
        Ok(search) => {
            tpl.loading = search.is_loading();
            tpl.filtering = search.is_filtering();
            tpl.total = search.items().len();
            tpl.entries = search.into_view().into_iter().map(EntryCard::from).collect();

            Ok(Response::builder()
                .status(200)
                .body(Body::from(tpl.render().context(TemplateSnafu)?))
                .context(ResponseBuilderSnafu)?)
        }
        Err(err) => {
            warn!("Unable to load entries: {}", err);
            let error_info = ErrorInfo::from(&err);
            tpl.error_message = Some(error_info.message);

            Ok(Response::builder()
                .status(error_info.status_code)
                .body(Body::from(tpl.render().context(TemplateSnafu)?))
                .context(ResponseBuilderSnafu)?)
        }
    }
}

#[derive(Template)]
#[template(path = "widgets/new_entry_form.html")]
struct EntryFormTemplate {
    payload: EntryFormData,
    error_message: Option<String>,
}

#[derive(Template)]
#[template(path = "widgets/add_entry_button.html")]
struct AddEntryButtonTemplate {}

pub async fn new_entry_handler() -> Result<Response<Body>> {
    let tpl = EntryFormTemplate {
        payload: EntryFormData::default(),
        error_message: None,
    };

    Ok(Response::builder()
        .status(200)
        .body(Body::from(tpl.render().context(TemplateSnafu)?))
        .context(ResponseBuilderSnafu)?)
}

pub async fn add_entry_button_handler() -> Result<Response<Body>> {
    let tpl = AddEntryButtonTemplate {};

    Ok(Response::builder()
        .status(200)
        .body(Body::from(tpl.render().context(TemplateSnafu)?))
        .context(ResponseBuilderSnafu)?)
}

pub async fn post_new_entry_handler(
    Extension(ctx): Extension<Ctx>,
    State(state): State<AppState>,
    payload: Form<EntryFormData>,
) -> Result<Response<Body>> {
    let result = create_entry(state.strapi.as_ref(), ctx.credential(), &payload).await;

    match result {
        Ok(_) => {
            // Reload the page so the listing picks up the new entry
            Ok(Response::builder()
                .status(200)
                .header("HX-Redirect", "/")
                .body(Body::from("".to_string()))
                .context(ResponseBuilderSnafu)?)
        }
        Err(err) => {
            let error_info = ErrorInfo::from(&err);
            let tpl = EntryFormTemplate {
                payload: payload.0,
                error_message: Some(error_info.message),
            };

            Ok(Response::builder()
                .status(error_info.status_code)
                .body(Body::from(tpl.render().context(TemplateSnafu)?))
                .context(ResponseBuilderSnafu)?)
        }
    }
}
