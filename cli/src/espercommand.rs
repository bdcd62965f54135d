use esper_sdk::{
    commands::{
        application::get::GetApplicationCommand,
        group::{
            create::CreateDeviceGroupCommand, delete::DeleteDeviceGroupCommand,
            get::GetDeviceGroupCommand, list::ListDeviceGroupCommand,
            update::UpdateDeviceGroupCommand,
        },
        version::{
            delete::DeleteAppVersionCommand, get::GetAppVersionCommand,
            list::ListAppVersionCommand,
        },
    },
    ApiError, AppVersion, AppVersionList, Application, DeviceGroup, DeviceGroupList, EsperClient,
};
use mockall::automock;

#[automock]
pub trait CliCommand {
    fn list_group(&self, cmd: ListDeviceGroupCommand) -> Result<DeviceGroupList, ApiError>;
    fn get_group(&self, cmd: GetDeviceGroupCommand) -> Result<DeviceGroup, ApiError>;
    fn create_group(&self, cmd: CreateDeviceGroupCommand) -> Result<DeviceGroup, ApiError>;
    fn update_group(&self, cmd: UpdateDeviceGroupCommand) -> Result<DeviceGroup, ApiError>;
    fn delete_group(&self, cmd: DeleteDeviceGroupCommand) -> Result<(), ApiError>;

    fn get_application(&self, cmd: GetApplicationCommand) -> Result<Application, ApiError>;

    fn list_version(&self, cmd: ListAppVersionCommand) -> Result<AppVersionList, ApiError>;
    fn get_version(&self, cmd: GetAppVersionCommand) -> Result<AppVersion, ApiError>;
    fn delete_version(&self, cmd: DeleteAppVersionCommand) -> Result<(), ApiError>;
}

pub struct CliCommandImpl<'a> {
    client: &'a dyn EsperClient,
}

impl CliCommandImpl<'_> {
    pub fn new(client: &dyn EsperClient) -> CliCommandImpl<'_> {
        CliCommandImpl { client }
    }
}

impl CliCommand for CliCommandImpl<'_> {
    fn list_group(&self, cmd: ListDeviceGroupCommand) -> Result<DeviceGroupList, ApiError> {
        cmd.execute(self.client)
    }
    fn get_group(&self, cmd: GetDeviceGroupCommand) -> Result<DeviceGroup, ApiError> {
        cmd.execute(self.client)
    }
    fn create_group(&self, cmd: CreateDeviceGroupCommand) -> Result<DeviceGroup, ApiError> {
        cmd.execute(self.client)
    }
    fn update_group(&self, cmd: UpdateDeviceGroupCommand) -> Result<DeviceGroup, ApiError> {
        cmd.execute(self.client)
    }
    fn delete_group(&self, cmd: DeleteDeviceGroupCommand) -> Result<(), ApiError> {
        cmd.execute(self.client)
    }

    fn get_application(&self, cmd: GetApplicationCommand) -> Result<Application, ApiError> {
        cmd.execute(self.client)
    }

    fn list_version(&self, cmd: ListAppVersionCommand) -> Result<AppVersionList, ApiError> {
        cmd.execute(self.client)
    }
    fn get_version(&self, cmd: GetAppVersionCommand) -> Result<AppVersion, ApiError> {
        cmd.execute(self.client)
    }
    fn delete_version(&self, cmd: DeleteAppVersionCommand) -> Result<(), ApiError> {
        cmd.execute(self.client)
    }
}
