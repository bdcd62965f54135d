use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

/// Failure of a call against the remote Esper API.
#[derive(ThisError, Debug)]
pub enum ApiError {
    #[error("{status} {reason}")]
    Status {
        status: u16,
        reason: String,
        body: String,
    },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Unable to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid path segment {0:?}")]
    InvalidPathSegment(String),
}

impl ApiError {
    /// Short, human readable cause, without the response body.
    pub fn reason(&self) -> String {
        match self {
            Self::Status { reason, .. } => reason.clone(),
            Self::Transport(err) => err.to_string(),
            Self::InvalidUrl(err) => format!("invalid API URL ({err})"),
            Self::Decode(err) => format!("unexpected response ({err})"),
            Self::InvalidPathSegment(segment) => format!("invalid id {segment:?}"),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Failure of the local document store. Never caused by the network.
#[derive(ThisError, Debug)]
pub enum StoreError {
    #[error("Unable to access store file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Store file {} is corrupt: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },
    #[error("Unable to locate the home directory for the store file")]
    NoHomeDirectory,
}
