use serde::{Deserialize, Serialize};
use vault::search::Searchable;

/// A stored password entry as served by `/api/password-entries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordEntryDto {
    pub id: i64,

    #[serde(default)]
    pub document_id: Option<String>,

    #[serde(default)]
    pub app_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPasswordEntryDto {
    pub app_name: String,
    pub email: String,
    pub text: String,
}

impl Searchable for PasswordEntryDto {
    fn search_fields(&self) -> impl Iterator<Item = Option<&str>> {
        [
            self.app_name.as_deref(),
            self.email.as_deref(),
            self.text.as_deref(),
        ]
        .into_iter()
    }
}
