use crate::{
    commands::version::version_collection_path, errors::ApiError, models::AppVersionList,
    EsperClient,
};

#[derive(Debug, PartialEq, Clone)]
pub struct ListAppVersionCommand {
    pub enterprise_id: String,
    pub application_id: String,
    pub version_code: Option<String>,
    pub build_number: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl ListAppVersionCommand {
    pub fn execute(&self, client: &dyn EsperClient) -> Result<AppVersionList, ApiError> {
        let mut query = vec![
            ("limit".to_string(), self.limit.to_string()),
            ("offset".to_string(), self.offset.to_string()),
        ];
        if let Some(version_code) = &self.version_code {
            query.push(("version_code".to_string(), version_code.clone()));
        }
        if let Some(build_number) = &self.build_number {
            query.push(("build_number".to_string(), build_number.clone()));
        }

        let response = client.get(
            version_collection_path(&self.enterprise_id, &self.application_id)?,
            query,
        )?;
        Ok(serde_json::from_value(response)?)
    }
}
