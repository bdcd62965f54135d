use crate::{commands::api_path, errors::ApiError};

pub mod get;

pub(crate) fn application_path(
    enterprise_id: &str,
    application_id: &str,
) -> Result<String, ApiError> {
    api_path(&["v0", "enterprise", enterprise_id, "application", application_id])
}
