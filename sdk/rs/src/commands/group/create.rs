use crate::{
    commands::group::group_collection_path,
    errors::ApiError,
    models::{DeviceGroup, DeviceGroupCreate},
    EsperClient,
};

#[derive(Debug, PartialEq, Clone)]
pub struct CreateDeviceGroupCommand {
    pub enterprise_id: String,
    pub name: String,
}

impl CreateDeviceGroupCommand {
    pub fn execute(&self, client: &dyn EsperClient) -> Result<DeviceGroup, ApiError> {
        let body = serde_json::to_value(DeviceGroupCreate {
            name: self.name.clone(),
        })?;

        let response = client.post(group_collection_path(&self.enterprise_id)?, body)?;
        Ok(serde_json::from_value(response)?)
    }
}
