use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use snafu::{OptionExt, ResultExt};

use crate::ctx::Credential;
use crate::error::{HomePageNotFoundSnafu, HttpClientSnafu, HttpResponseParseSnafu};
use crate::{Error, Result};
use dto::entry::{NewPasswordEntryDto, PasswordEntryDto};
use dto::home::{FOOTER, HERO_SECTION, HomePageDto};
use dto::pagination::{DataDto, ItemDto, ListDto};
use dto::user::{NewUserDto, UserDto};

use super::handle_response_error;

pub const HOME_PAGE_PATH: &str = "/api/home-page";
pub const ENTRIES_PATH: &str = "/api/password-entries";
pub const USERS_PATH: &str = "/api/users";
pub const HEALTH_PATH: &str = "/_health";

/// Content and records served by the CMS
#[async_trait]
pub trait StrapiSource: Send + Sync {
    async fn ping(&self) -> Result<()>;

    async fn get_home_page(&self, credential: &Credential) -> Result<HomePageDto>;

    async fn list_entries(&self, credential: &Credential) -> Result<Vec<PasswordEntryDto>>;

    async fn create_entry(
        &self,
        credential: &Credential,
        data: &NewPasswordEntryDto,
    ) -> Result<PasswordEntryDto>;

    async fn list_users(&self, credential: &Credential) -> Result<Vec<UserDto>>;

    async fn create_user(&self, credential: &Credential, data: &NewUserDto) -> Result<UserDto>;

    /// Absolute URL for a media asset path
    fn media_url(&self, path: &str) -> String;
}

pub struct StrapiClient {
    base_url: String,
    page_size: u32,
    client: Client,
}

impl StrapiClient {
    pub fn new(base_url: &str, page_size: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", &self.base_url, path)
    }
}

fn authorize(req: RequestBuilder, credential: &Credential) -> RequestBuilder {
    match credential.token() {
        Some(token) => req.bearer_auth(token),
        None => req,
    }
}

/// Populates the image and link of the hero and footer blocks
pub fn home_page_query() -> Vec<(String, String)> {
    let mut query: Vec<(String, String)> = Vec::new();
    for block in [HERO_SECTION, FOOTER] {
        let prefix = format!("populate[blocks][on][{}][populate]", block);
        query.push((
            format!("{}[image][fields][0]", prefix),
            "url".to_string(),
        ));
        query.push((
            format!("{}[image][fields][1]", prefix),
            "alternativeText".to_string(),
        ));
        query.push((format!("{}[link]", prefix), "true".to_string()));
    }
    query
}

pub fn entries_query(page_size: u32) -> Vec<(String, String)> {
    vec![
        ("populate".to_string(), "*".to_string()),
        ("sort[0]".to_string(), "appName:asc".to_string()),
        ("pagination[pageSize]".to_string(), page_size.to_string()),
    ]
}

pub fn users_query() -> Vec<(String, String)> {
    vec![
        (
            "populate[avatar][fields][0]".to_string(),
            "url".to_string(),
        ),
        (
            "populate[avatar][fields][1]".to_string(),
            "alternativeText".to_string(),
        ),
    ]
}

pub fn media_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[async_trait]
impl StrapiSource for StrapiClient {
    async fn ping(&self) -> Result<()> {
        let response = self
            .client
            .get(self.url(HEALTH_PATH))
            .send()
            .await
            .context(HttpClientSnafu {
                msg: "Unable to reach Strapi.".to_string(),
            })?;

        if !response.status().is_success() {
            return Err(handle_response_error(response, "health", "Strapi is not ready".into()).await);
        }

        Ok(())
    }

    async fn get_home_page(&self, credential: &Credential) -> Result<HomePageDto> {
        let req = self
            .client
            .get(self.url(HOME_PAGE_PATH))
            .query(&home_page_query());

        let response = authorize(req, credential)
            .send()
            .await
            .context(HttpClientSnafu {
                msg: "Unable to load home page. Try again later.".to_string(),
            })?;

        if !response.status().is_success() {
            return Err(handle_response_error(response, "home page", Error::HomePageNotFound).await);
        }

        let page = response
            .json::<ItemDto<HomePageDto>>()
            .await
            .context(HttpResponseParseSnafu {
                msg: "Unable to parse home page.".to_string(),
            })?;

        page.data.context(HomePageNotFoundSnafu)
    }

    async fn list_entries(&self, credential: &Credential) -> Result<Vec<PasswordEntryDto>> {
        let req = self
            .client
            .get(self.url(ENTRIES_PATH))
            .query(&entries_query(self.page_size));

        let response = authorize(req, credential)
            .send()
            .await
            .context(HttpClientSnafu {
                msg: "Unable to list entries. Try again later.".to_string(),
            })?;

        if !response.status().is_success() {
            return Err(handle_response_error(response, "entries", Error::EntryNotFound).await);
        }

        let listing = response
            .json::<ListDto<PasswordEntryDto>>()
            .await
            .context(HttpResponseParseSnafu {
                msg: "Unable to parse entries.".to_string(),
            })?;

        Ok(listing.data)
    }

    async fn create_entry(
        &self,
        credential: &Credential,
        data: &NewPasswordEntryDto,
    ) -> Result<PasswordEntryDto> {
        let body = DataDto { data: data.clone() };
        let req = self.client.post(self.url(ENTRIES_PATH)).json(&body);

        let response = authorize(req, credential)
            .send()
            .await
            .context(HttpClientSnafu {
                msg: "Unable to create entry. Try again later.".to_string(),
            })?;

        if !response.status().is_success() {
            return Err(handle_response_error(response, "entries", Error::EntryNotFound).await);
        }

        let entry = response
            .json::<ItemDto<PasswordEntryDto>>()
            .await
            .context(HttpResponseParseSnafu {
                msg: "Unable to parse entry information.".to_string(),
            })?;

        entry.data.ok_or_else(|| Error::Service {
            msg: "Strapi returned an empty entry.".to_string(),
        })
    }

    async fn list_users(&self, credential: &Credential) -> Result<Vec<UserDto>> {
        let req = self
            .client
            .get(self.url(USERS_PATH))
            .query(&users_query());

        let response = authorize(req, credential)
            .send()
            .await
            .context(HttpClientSnafu {
                msg: "Unable to list users. Try again later.".to_string(),
            })?;

        if !response.status().is_success() {
            return Err(handle_response_error(response, "users", Error::UserNotFound).await);
        }

        let users = response
            .json::<Vec<UserDto>>()
            .await
            .context(HttpResponseParseSnafu {
                msg: "Unable to parse users.".to_string(),
            })?;

        Ok(users)
    }

    async fn create_user(&self, credential: &Credential, data: &NewUserDto) -> Result<UserDto> {
        let req = self.client.post(self.url(USERS_PATH)).json(data);

        let response = authorize(req, credential)
            .send()
            .await
            .context(HttpClientSnafu {
                msg: "Unable to create user. Try again later.".to_string(),
            })?;

        if !response.status().is_success() {
            return Err(handle_response_error(response, "users", Error::UserNotFound).await);
        }

        let user = response
            .json::<UserDto>()
            .await
            .context(HttpResponseParseSnafu {
                msg: "Unable to parse user information.".to_string(),
            })?;

        Ok(user)
    }

    fn media_url(&self, path: &str) -> String {
        media_url(&self.base_url, path)
    }
}

#[cfg(test)]
pub use test_source::StrapiTestSource;

#[cfg(test)]
mod test_source {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::{StrapiSource, media_url};
    use crate::ctx::Credential;
    use crate::{Error, Result};
    use dto::entry::{NewPasswordEntryDto, PasswordEntryDto};
    use dto::home::HomePageDto;
    use dto::user::{NewUserDto, UserDto};

    pub const TEST_BASE_URL: &str = "http://strapi.test";

    /// In-memory CMS, writes require a token
    pub struct StrapiTestSource {
        pub home_page: Option<HomePageDto>,
        pub entries: Mutex<Vec<PasswordEntryDto>>,
        pub users: Mutex<Vec<UserDto>>,
        pub fail_listing: bool,
    }

    impl StrapiTestSource {
        pub fn new(home_page: Option<HomePageDto>, entries: Vec<PasswordEntryDto>) -> Self {
            Self {
                home_page,
                entries: Mutex::new(entries),
                users: Mutex::new(Vec::new()),
                fail_listing: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                fail_listing: true,
                ..Self::new(None, Vec::new())
            }
        }
    }

    #[async_trait]
    impl StrapiSource for StrapiTestSource {
        async fn ping(&self) -> Result<()> {
            if self.fail_listing {
                return Err(Error::Service {
                    msg: "Strapi is not ready".to_string(),
                });
            }
            Ok(())
        }

        async fn get_home_page(&self, _credential: &Credential) -> Result<HomePageDto> {
            self.home_page.clone().ok_or(Error::HomePageNotFound)
        }

        async fn list_entries(&self, _credential: &Credential) -> Result<Vec<PasswordEntryDto>> {
            if self.fail_listing {
                return Err(Error::Service {
                    msg: "Unable to process entries. Try again later.".to_string(),
                });
            }
            Ok(self.entries.lock().unwrap().clone())
        }

        async fn create_entry(
            &self,
            credential: &Credential,
            data: &NewPasswordEntryDto,
        ) -> Result<PasswordEntryDto> {
            if credential.is_anonymous() {
                return Err(Error::RequiresAuth);
            }
            let mut entries = self.entries.lock().unwrap();
            let id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
            let entry = PasswordEntryDto {
                id,
                document_id: None,
                app_name: Some(data.app_name.clone()),
                email: Some(data.email.clone()),
                text: Some(data.text.clone()),
                created_at: None,
                updated_at: None,
            };
            entries.push(entry.clone());
            Ok(entry)
        }

        async fn list_users(&self, _credential: &Credential) -> Result<Vec<UserDto>> {
            Ok(self.users.lock().unwrap().clone())
        }

        async fn create_user(&self, credential: &Credential, data: &NewUserDto) -> Result<UserDto> {
            if credential.is_anonymous() {
                return Err(Error::RequiresAuth);
            }
            let mut users = self.users.lock().unwrap();
            let user = UserDto {
                id: users.len() as i64 + 1,
                document_id: None,
                username: data.username.clone(),
                email: None,
                confirmed: false,
                blocked: false,
                avatar: None,
            };
            users.push(user.clone());
            Ok(user)
        }

        fn media_url(&self, path: &str) -> String {
            media_url(TEST_BASE_URL, path)
        }
    }
}
