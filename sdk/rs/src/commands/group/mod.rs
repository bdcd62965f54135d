use crate::{commands::api_path, errors::ApiError};

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub(crate) fn group_collection_path(enterprise_id: &str) -> Result<String, ApiError> {
    api_path(&["v0", "enterprise", enterprise_id, "devicegroup"])
}

pub(crate) fn group_path(enterprise_id: &str, group_id: &str) -> Result<String, ApiError> {
    api_path(&["v0", "enterprise", enterprise_id, "devicegroup", group_id])
}
