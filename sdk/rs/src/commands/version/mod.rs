use crate::{commands::api_path, errors::ApiError};

pub mod delete;
pub mod get;
pub mod list;

pub(crate) fn version_collection_path(
    enterprise_id: &str,
    application_id: &str,
) -> Result<String, ApiError> {
    api_path(&[
        "v0",
        "enterprise",
        enterprise_id,
        "application",
        application_id,
        "version",
    ])
}

pub(crate) fn version_path(
    enterprise_id: &str,
    application_id: &str,
    version_id: &str,
) -> Result<String, ApiError> {
    api_path(&[
        "v0",
        "enterprise",
        enterprise_id,
        "application",
        application_id,
        "version",
        version_id,
    ])
}
