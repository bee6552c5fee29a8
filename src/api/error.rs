use thiserror::Error;

/// Errors raised while talking to the data feed or the stats API
#[derive(Error, Debug)]
pub enum NbaApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("result set {0} missing from response")]
    MissingResultSet(String),

    #[error("result set {0} has no rows")]
    EmptyResultSet(String),
}
