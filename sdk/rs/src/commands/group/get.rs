use crate::{commands::group::group_path, errors::ApiError, models::DeviceGroup, EsperClient};

#[derive(Debug, PartialEq, Clone)]
pub struct GetDeviceGroupCommand {
    pub enterprise_id: String,
    pub group_id: String,
}

impl GetDeviceGroupCommand {
    pub fn execute(&self, client: &dyn EsperClient) -> Result<DeviceGroup, ApiError> {
        let response = client.get(group_path(&self.enterprise_id, &self.group_id)?, vec![])?;
        Ok(serde_json::from_value(response)?)
    }
}
