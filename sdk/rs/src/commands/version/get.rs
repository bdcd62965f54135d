use crate::{
    commands::version::version_path, errors::ApiError, models::AppVersion, EsperClient,
};

#[derive(Debug, PartialEq, Clone)]
pub struct GetAppVersionCommand {
    pub enterprise_id: String,
    pub application_id: String,
    pub version_id: String,
}

impl GetAppVersionCommand {
    pub fn execute(&self, client: &dyn EsperClient) -> Result<AppVersion, ApiError> {
        let response = client.get(
            version_path(&self.enterprise_id, &self.application_id, &self.version_id)?,
            vec![],
        )?;
        Ok(serde_json::from_value(response)?)
    }
}
