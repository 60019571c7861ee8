//! Dispatch error handling

use thiserror::Error;

/// Result type for dispatch operations
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Failure to deliver an envelope to the provider
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The provider call could not be completed
    #[error("failed to send email: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a failure status
    #[error("sendgrid error: {status} - {body}")]
    ProviderRejection { status: u16, body: String },
}

impl DispatchError {
    /// HTTP status returned by the provider, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::ProviderRejection { status, .. } => Some(*status),
        }
    }
}
