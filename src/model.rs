// Core structs: CallResult, request errors
use thiserror::Error;

/// Fields pulled out of one Bot API response.
///
/// `Default` doubles as the "no data" value: a failed call and a call that
/// returned nothing of interest both end up here when the caller chooses
/// `unwrap_or_default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallResult {
    pub update_id: i64,
    pub text: String,
}

impl CallResult {
    pub fn is_empty(&self) -> bool {
        self.update_id == 0 && self.text.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("HTTP client init failed: {0}")]
    Init(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("response body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("invalid JSON in response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing setting: {0}")]
    Missing(&'static str),
}
