#![forbid(unsafe_code)]

//! Fetches remote OpenAPI/Swagger specification documents on behalf of a host
//! platform, adapting the request to the authentication conventions of the
//! source (generic URL, GitHub, GitLab, Bitbucket).
//!
//! The caller always gets a renderable string back: the document body on
//! success, the literal `"{}"` on any soft failure.

pub mod error;
pub mod fetcher;
pub mod http;
pub mod provider;
pub mod request;
pub mod service;

pub use crate::error::FetchError;
pub use crate::fetcher::{SpecFetcher, DEFAULT_OBJECT};
pub use crate::http::{HttpClient, HttpError, HttpResponseParts, ReqwestHttpClient};
pub use crate::provider::Provider;
pub use crate::request::{FetchRequest, HttpRequestParts};
pub use crate::service::ProxyService;
