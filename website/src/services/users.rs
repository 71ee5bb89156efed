use serde::{Deserialize, Serialize};
use snafu::ensure;
use tracing::info;
use validator::Validate;

use crate::Result;
use crate::ctx::Credential;
use crate::error::ValidationSnafu;
use crate::services::strapi::StrapiSource;
use dto::user::{NewUserDto, UserDto};

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UserFormData {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub password: String,
}

pub async fn list_users(source: &dyn StrapiSource, credential: &Credential) -> Result<Vec<UserDto>> {
    source.list_users(credential).await
}

pub async fn create_user(
    source: &dyn StrapiSource,
    credential: &Credential,
    form: &UserFormData,
) -> Result<UserDto> {
    ensure!(
        form.validate().is_ok(),
        ValidationSnafu {
            msg: "Missing fields".to_string(),
        }
    );

    let data = NewUserDto {
        username: form.username.clone(),
        password: form.password.clone(),
    };

    let user = source.create_user(credential, &data).await?;
    info!("Created user {}", user.username);

    Ok(user)
}
