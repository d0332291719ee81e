//! Error taxonomy for the collaborator boundary.
//!
//! Two user-visible kinds: a rejection from the backend, whose message
//! is surfaced verbatim, and a transport failure, collapsed into a
//! generic message. Nothing here is fatal; every failure is recoverable
//! by resubmission with the preserved editor state.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BackendError>;

#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend rejected the request. The message comes from the
    /// error body and is shown to the administrator as-is.
    #[error("{message}")]
    Rejected { message: String },

    /// The request never completed (connect, timeout, TLS, ...).
    #[error("something went wrong")]
    Transport(#[source] reqwest::Error),

    /// A successful response carried a body we could not decode.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client construction failed (bad base URL or API key).
    #[error("configuration error: {0}")]
    Config(String),
}

impl BackendError {
    /// The text to display in the admin error banner.
    pub fn display_message(&self) -> String {
        self.to_string()
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}
