use thiserror::Error;

/// Hard failures surfaced to the caller. Everything else (transport errors,
/// non-200 responses) degrades to the `"{}"` sentinel inside the fetcher.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid specification URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
