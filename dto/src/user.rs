use serde::{Deserialize, Serialize};

use crate::home::ImageDto;

/// Users-permissions user, `/api/users` returns a bare array of these
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,

    #[serde(default)]
    pub document_id: Option<String>,

    pub username: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub confirmed: bool,

    #[serde(default)]
    pub blocked: bool,

    #[serde(default)]
    pub avatar: Option<ImageDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUserDto {
    pub username: String,
    pub password: String,
}
