use crate::{commands::group::group_path, errors::ApiError, EsperClient};

#[derive(Debug, PartialEq, Clone)]
pub struct DeleteDeviceGroupCommand {
    pub enterprise_id: String,
    pub group_id: String,
}

impl DeleteDeviceGroupCommand {
    pub fn execute(&self, client: &dyn EsperClient) -> Result<(), ApiError> {
        client.delete(group_path(&self.enterprise_id, &self.group_id)?)
    }
}
