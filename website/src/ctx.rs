/// API token used when talking to Strapi on behalf of the browser
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credential {
    token: Option<String>,
}

impl Credential {
    pub fn new(token: Option<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        Self { token }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.token.is_none()
    }
}

/// Per-request context, always present on routed requests
#[derive(Clone, Debug)]
pub struct Ctx {
    credential: Credential,
}

impl Ctx {
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}
