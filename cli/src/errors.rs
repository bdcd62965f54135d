use esper_sdk::{ApiError, StoreError};
use log::debug;
use thiserror::Error as ThisError;

pub const EXIT_RUNTIME_ERROR: i32 = 1;
pub const EXIT_VALIDATION_ERROR: i32 = 2;
pub const EXIT_NOT_CONFIGURED: i32 = 3;
pub const EXIT_STORAGE_ERROR: i32 = 4;

#[derive(ThisError, Debug)]
pub enum CliError {
    #[error("No credentials found, run `esper configure set` first")]
    MissingCredentials,
    #[error("No enterprise id configured, run `esper configure set --enterprise-id <ID>`")]
    MissingEnterpriseContext,
    #[error("{0}")]
    Validation(String),
    #[error("Failed to {action}, reason: {reason}")]
    RemoteApi { action: String, reason: String },
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl CliError {
    /// Wraps a remote failure, keeping only its reason. The full error,
    /// response body included, goes to the debug log.
    pub fn remote(action: &str, err: ApiError) -> CliError {
        debug!("Failed to {action}: {err:?}");
        CliError::RemoteApi {
            action: action.to_string(),
            reason: err.reason(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingCredentials | CliError::MissingEnterpriseContext => {
                EXIT_NOT_CONFIGURED
            }
            CliError::Validation(_) => EXIT_VALIDATION_ERROR,
            CliError::RemoteApi { .. } => EXIT_RUNTIME_ERROR,
            CliError::Storage(_) => EXIT_STORAGE_ERROR,
        }
    }
}

/// Exit code for any error a command returned.
pub fn exit_code_for(report: &eyre::Report) -> i32 {
    report
        .downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(EXIT_RUNTIME_ERROR)
}
