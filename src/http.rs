use async_trait::async_trait;

use crate::request::HttpRequestParts;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HttpError {
    #[error("timeout")]
    Timeout,
    #[error("connect/dns/tls error: {0}")]
    Network(String),
    #[error("http error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
pub struct HttpResponseParts {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponseParts {
    /// Response body decoded as text. Invalid UTF-8 is replaced rather than
    /// rejected; a spec document that is not valid UTF-8 is broken anyway.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The injected transport: one GET, one response. TLS, pooling, and timeouts
/// belong to the implementation's own configuration, not to this seam.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, req: HttpRequestParts) -> Result<HttpResponseParts, HttpError>;
}

pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        // Client creation should never fail in practice, but if it does, we'll
        // get a better error when trying to use it rather than panicking at
        // initialization.
        let client = reqwest::Client::builder()
            .user_agent(concat!("openapi-proxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                panic!("failed to create reqwest HTTP client: {e}. This is a bug - please report it.");
            });
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, req: HttpRequestParts) -> Result<HttpResponseParts, HttpError> {
        let mut rb = self.client.get(req.url);
        for (k, v) in req.headers {
            rb = rb.header(k, v);
        }

        let resp = rb.send().await.map_err(map_reqwest_error)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(map_reqwest_error)?.to_vec();

        Ok(HttpResponseParts { status, body })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        return HttpError::Timeout;
    }
    if e.is_connect() || e.is_request() {
        return HttpError::Network(e.to_string());
    }
    HttpError::Other(e.to_string())
}
