use std::collections::BTreeMap;

use crate::error::FetchError;
use crate::fetcher::SpecFetcher;
use crate::request::FetchRequest;

/// Thin façade for the host platform's scripting layer, which hands over its
/// macro parameters as a string map rather than a typed request.
#[derive(Default)]
pub struct ProxyService {
    fetcher: SpecFetcher,
}

impl ProxyService {
    pub fn new(fetcher: SpecFetcher) -> Self {
        Self { fetcher }
    }

    /// Builds a [`FetchRequest`] from the parameter map and delegates to the
    /// fetcher. Missing keys mean "no credential"; unknown keys are ignored.
    pub async fn execute(&self, params: &BTreeMap<String, String>) -> Result<String, FetchError> {
        let request = FetchRequest {
            url: params.get("url").cloned().unwrap_or_default(),
            access_token: params.get("accessToken").cloned(),
            username: params.get("username").cloned(),
            password: params.get("password").cloned(),
        };
        self.fetcher.fetch(&request).await
    }

    /// Same as [`execute`](Self::execute) for hosts that forward their
    /// parameters as a JSON object (`url`, `accessToken`, `username`,
    /// `password`). Objects missing the `url` key fetch nothing and get the
    /// sentinel back.
    pub async fn execute_json(&self, params: &serde_json::Value) -> Result<String, FetchError> {
        let request: FetchRequest =
            serde_json::from_value(params.clone()).unwrap_or_else(|_| FetchRequest::default());
        self.fetcher.fetch(&request).await
    }
}
