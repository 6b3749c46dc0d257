use std::collections::BTreeMap;

use serde::Deserialize;

/// Input for one fetch. Built fresh per call and discarded after.
///
/// `access_token` is used by the GitHub (bearer header) and GitLab (query
/// parameter) conventions; `username`/`password` only by Bitbucket basic auth.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    pub url: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_basic_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}

/// The one request shape this crate issues: a GET with optional auth headers.
#[derive(Debug, Clone)]
pub struct HttpRequestParts {
    pub url: url::Url,
    pub headers: BTreeMap<String, String>,
}

impl HttpRequestParts {
    pub fn get(url: url::Url) -> Self {
        Self {
            url,
            headers: BTreeMap::new(),
        }
    }
}
