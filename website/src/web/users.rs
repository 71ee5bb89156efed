use askama::Template;
use axum::{Extension, Form, body::Body, extract::State, response::Response};
use snafu::ResultExt;
use tracing::warn;

use crate::{
    Result,
    ctx::Ctx,
    error::{ErrorInfo, ResponseBuilderSnafu, TemplateSnafu},
    models::TemplateData,
    run::AppState,
    services::users::{UserFormData, create_user, list_users},
};
use dto::user::UserDto;

pub struct UserRow {
    pub username: String,
    pub email: String,
    pub avatar_url: String,
    pub status: String,
}

impl UserRow {
    fn new(user: UserDto, state: &AppState) -> Self {
        let status = if user.blocked {
            "Blocked"
        } else if user.confirmed {
            "Confirmed"
        } else {
            "Unconfirmed"
        };
        Self {
            username: user.username,
            email: user.email.unwrap_or_default(),
            avatar_url: user
                .avatar
                .map(|a| state.strapi.media_url(&a.url))
                .unwrap_or_default(),
            status: status.to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/users.html")]
struct UsersTemplate {
    t: TemplateData,
    users: Vec<UserRow>,
    list_error: Option<String>,

    // Inline new user form
    username: String,
    error_message: Option<String>,
}

#[derive(Template)]
#[template(path = "widgets/new_user_form.html")]
struct UserFormTemplate {
    username: String,
    error_message: Option<String>,
}

pub async fn users_handler(
    Extension(ctx): Extension<Ctx>,
    State(state): State<AppState>,
) -> Result<Response<Body>> {
    let mut t = TemplateData::new(&state, &ctx);
    t.title = String::from("Users");

    let mut tpl = UsersTemplate {
        t,
        users: Vec::new(),
        list_error: None,
        username: "".to_string(),
        error_message: None,
    };

    match list_users(state.strapi.as_ref(), ctx.credential()).await {
        Ok(users) => {
            tpl.users = users.into_iter().map(|u| UserRow::new(u, &state)).collect();
        }
        Err(err) => {
            warn!("Unable to load users: {}", err);
            tpl.list_error = Some(ErrorInfo::from(&err).message);
        }
    }

    Ok(Response::builder()
        .status(200)
        .body(Body::from(tpl.render().context(TemplateSnafu)?))
        .context(ResponseBuilderSnafu)?)
}

pub async fn new_user_handler() -> Result<Response<Body>> {
    let tpl = UserFormTemplate {
        username: "".to_string(),
        error_message: None,
    };

    Ok(Response::builder()
        .status(200)
        .body(Body::from(tpl.render().context(TemplateSnafu)?))
        .context(ResponseBuilderSnafu)?)
}

pub async fn post_new_user_handler(
    Extension(ctx): Extension<Ctx>,
    State(state): State<AppState>,
    payload: Form<UserFormData>,
) -> Result<Response<Body>> {
    match create_user(state.strapi.as_ref(), ctx.credential(), &payload).await {
        Ok(_) => Ok(Response::builder()
            .status(200)
            .header("HX-Redirect", "/users")
            .body(Body::from("".to_string()))
            .context(ResponseBuilderSnafu)?),
        Err(err) => {
            let error_info = ErrorInfo::from(&err);

            // Never echo the password back
            let tpl = UserFormTemplate {
                username: payload.username.clone(),
                error_message: Some(error_info.message),
            };

            Ok(Response::builder()
                .status(error_info.status_code)
                .body(Body::from(tpl.render().context(TemplateSnafu)?))
                .context(ResponseBuilderSnafu)?)
        }
    }
}
