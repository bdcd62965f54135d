use crate::{
    commands::group::group_collection_path, errors::ApiError, models::DeviceGroupList,
    EsperClient,
};

#[derive(Debug, PartialEq, Clone)]
pub struct ListDeviceGroupCommand {
    pub enterprise_id: String,
    /// Forwarded as-is; matching semantics belong to the API.
    pub name: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl ListDeviceGroupCommand {
    pub fn execute(&self, client: &dyn EsperClient) -> Result<DeviceGroupList, ApiError> {
        let mut query = vec![
            ("limit".to_string(), self.limit.to_string()),
            ("offset".to_string(), self.offset.to_string()),
        ];
        if let Some(name) = &self.name {
            query.push(("name".to_string(), name.clone()));
        }

        let response = client.get(group_collection_path(&self.enterprise_id)?, query)?;
        Ok(serde_json::from_value(response)?)
    }
}
