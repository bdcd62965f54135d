use crate::{commands::version::version_path, errors::ApiError, EsperClient};

#[derive(Debug, PartialEq, Clone)]
pub struct DeleteAppVersionCommand {
    pub enterprise_id: String,
    pub application_id: String,
    pub version_id: String,
}

impl DeleteAppVersionCommand {
    pub fn execute(&self, client: &dyn EsperClient) -> Result<(), ApiError> {
        client.delete(version_path(
            &self.enterprise_id,
            &self.application_id,
            &self.version_id,
        )?)
    }
}
