use crate::{
    commands::group::group_path,
    errors::ApiError,
    models::{DeviceGroup, DeviceGroupUpdate},
    EsperClient,
};

/// Partial update; only the name is ever sent.
#[derive(Debug, PartialEq, Clone)]
pub struct UpdateDeviceGroupCommand {
    pub enterprise_id: String,
    pub group_id: String,
    pub name: String,
}

impl UpdateDeviceGroupCommand {
    pub fn execute(&self, client: &dyn EsperClient) -> Result<DeviceGroup, ApiError> {
        let body = serde_json::to_value(DeviceGroupUpdate {
            name: Some(self.name.clone()),
        })?;

        let response = client.patch(group_path(&self.enterprise_id, &self.group_id)?, body)?;
        Ok(serde_json::from_value(response)?)
    }
}
