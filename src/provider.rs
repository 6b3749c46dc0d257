use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;

use crate::request::{FetchRequest, HttpRequestParts};

const AUTHORIZATION_HEADER: &str = "Authorization";

/// The four recognized source-hosting conventions. Adding a fifth convention
/// is one variant plus one `apply_auth` arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    GitHub,
    GitLab,
    Bitbucket,
    Generic,
}

impl Provider {
    /// Classifies a URL by host substring, case-sensitive, first match wins.
    ///
    /// Substring containment is deliberate: a host like
    /// `my-github-mirror.example.com` also gets the GitHub convention.
    /// Operates on the raw URL text rather than a parsed `url::Url`, which
    /// lowercases domain hosts and would defeat the case-sensitive match.
    /// URLs without a host component are Generic.
    pub fn classify(raw_url: &str) -> Self {
        let Some(host) = raw_host(raw_url) else {
            return Self::Generic;
        };
        if host.contains("github") {
            Self::GitHub
        } else if host.contains("gitlab") {
            Self::GitLab
        } else if host.contains("bitbucket") {
            Self::Bitbucket
        } else {
            Self::Generic
        }
    }

    /// Decorates the outgoing GET with this provider's auth convention.
    /// Credentials that are absent or empty leave the request untouched,
    /// except for the GitHub raw-content Accept header which is always set.
    pub fn apply_auth(&self, parts: &mut HttpRequestParts, request: &FetchRequest) {
        match self {
            Self::GitHub => {
                if let Some(token) = non_empty(request.access_token.as_deref()) {
                    parts
                        .headers
                        .insert(AUTHORIZATION_HEADER.to_string(), format!("Bearer {token}"));
                }
                // Ask the GitHub contents API for the raw file rather than
                // its JSON wrapper.
                parts.headers.insert(
                    "Accept".to_string(),
                    "application/vnd.github.v3.raw".to_string(),
                );
            }
            Self::GitLab => {
                if let Some(token) = non_empty(request.access_token.as_deref()) {
                    parts
                        .url
                        .query_pairs_mut()
                        .append_pair("private_token", token);
                }
            }
            Self::Bitbucket => {
                if let (Some(user), Some(pass)) = (
                    non_empty(request.username.as_deref()),
                    non_empty(request.password.as_deref()),
                ) {
                    let encoded = BASE64_STANDARD.encode(format!("{user}:{pass}"));
                    parts
                        .headers
                        .insert(AUTHORIZATION_HEADER.to_string(), format!("Basic {encoded}"));
                }
            }
            Self::Generic => {}
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

/// Case-preserved host component of the URL text: the authority with
/// userinfo and port stripped.
fn raw_host(raw_url: &str) -> Option<&str> {
    let (_, rest) = raw_url.split_once("://")?;
    let authority = match rest.find(['/', '?', '#']) {
        Some(end) => &rest[..end],
        None => rest,
    };
    let host = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    let host = match host.find(':') {
        Some(end) => &host[..end],
        None => host,
    };
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}
