mod params;

pub use params::*;

use crate::ctx::Ctx;
use crate::run::AppState;

#[derive(Clone)]
pub struct TemplateData {
    pub title: String,
    pub has_token: bool,
    pub ga_tag_id: Option<String>,
}

impl TemplateData {
    pub fn new(state: &AppState, ctx: &Ctx) -> Self {
        Self {
            title: String::from(""),
            has_token: !ctx.credential().is_anonymous(),
            ga_tag_id: state.config.ga_tag_id.clone(),
        }
    }
}
