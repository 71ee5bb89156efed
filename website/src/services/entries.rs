use serde::{Deserialize, Serialize};
use snafu::ensure;
use tracing::info;
use validator::Validate;

use crate::Result;
use crate::ctx::Credential;
use crate::error::ValidationSnafu;
use crate::services::strapi::StrapiSource;
use dto::entry::{NewPasswordEntryDto, PasswordEntryDto};
use vault::search::Search;
use vault::validators::flatten_errors;

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct EntryFormData {
    #[serde(rename = "appName", default)]
    #[validate(length(min = 1, message = "App name required"))]
    pub app_name: String,

    #[serde(default)]
    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Text required"))]
    pub text: String,
}

/// Loads every entry and applies the keyword to them
pub async fn search_entries(
    source: &dyn StrapiSource,
    credential: &Credential,
    query: &str,
) -> Result<Search<PasswordEntryDto>> {
    let mut search = Search::new();
    search.set_query(query);

    let entries = source.list_entries(credential).await?;
    search.set_items(entries);

    Ok(search)
}

pub async fn create_entry(
    source: &dyn StrapiSource,
    credential: &Credential,
    form: &EntryFormData,
) -> Result<PasswordEntryDto> {
    let errors = form.validate();
    ensure!(
        errors.is_ok(),
        ValidationSnafu {
            msg: errors.err().map(|e| flatten_errors(&e)).unwrap_or_default(),
        }
    );

    let data = NewPasswordEntryDto {
        app_name: form.app_name.clone(),
        email: form.email.clone(),
        text: form.text.clone(),
    };

    let entry = source.create_entry(credential, &data).await?;
    info!("Created password entry {}", entry.id);

    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::services::strapi::StrapiTestSource;

    fn entry(id: i64, app_name: &str, email: &str, text: &str) -> PasswordEntryDto {
        PasswordEntryDto {
            id,
            document_id: None,
            app_name: Some(app_name.to_string()),
            email: Some(email.to_string()),
            text: Some(text.to_string()),
            created_at: None,
            updated_at: None,
        }
    }

    fn source() -> StrapiTestSource {
        StrapiTestSource::new(
            None,
            vec![
                entry(1, "GitHub", "a@x.com", "p1"),
                entry(2, "Gmail", "b@y.com", "p2"),
            ],
        )
    }

    #[tokio::test]
    async fn test_search_entries() {
        let source = source();
        let credential = Credential::anonymous();

        let search = search_entries(&source, &credential, "").await.unwrap();
        assert!(!search.is_loading());
        assert_eq!(search.view_len(), 2);

        let search = search_entries(&source, &credential, "Y.COM").await.unwrap();
        let ids: Vec<i64> = search.view().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn test_search_entries_failure() {
        let source = StrapiTestSource::failing();
        let result = search_entries(&source, &Credential::anonymous(), "git").await;
        assert!(matches!(result, Err(Error::Service { .. })));
    }

    #[tokio::test]
    async fn test_create_entry_validation() {
        let source = source();
        let credential = Credential::new(Some("token".to_string()));
        let form = EntryFormData {
            app_name: "".to_string(),
            email: "nope".to_string(),
            text: "".to_string(),
        };

        let err = create_entry(&source, &credential, &form).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "App name required, Invalid email, Text required"
        );
        assert_eq!(source.entries.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_entry() {
        let source = source();
        let credential = Credential::new(Some("token".to_string()));
        let form = EntryFormData {
            app_name: "Steam".to_string(),
            email: "gamer@outlook.com".to_string(),
            text: "s3cret".to_string(),
        };

        let created = create_entry(&source, &credential, &form).await.unwrap();
        assert_eq!(created.id, 3);

        let search = search_entries(&source, &credential, "steam").await.unwrap();
        assert_eq!(search.view_len(), 1);
    }

    #[tokio::test]
    async fn test_create_entry_requires_token() {
        let source = source();
        let form = EntryFormData {
            app_name: "Steam".to_string(),
            email: "gamer@outlook.com".to_string(),
            text: "s3cret".to_string(),
        };

        let err = create_entry(&source, &Credential::anonymous(), &form)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::RequiresAuth));
    }
}
