use crate::{
    context::SessionContext,
    errors::CliError,
    espercommand::CliCommand,
    formatters::{render, OutputFormat},
    group::{GroupDetailsDisplay, GROUP_DETAILS_HEADING},
    validators::{validate_group_name, validate_id},
};
use clap::Args;
use esper_sdk::commands::group::update::UpdateDeviceGroupCommand;
use std::io::Write;

#[derive(Args, Debug)]
pub struct UpdateGroupCliCommand {
    /// Id of the group to update
    pub group_id: String,
    /// New group name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Render result in JSON format
    #[arg(short, long, default_value_t = false)]
    pub json: bool,
}

impl UpdateGroupCliCommand {
    pub fn execute<C: CliCommand, W: Write>(
        self,
        client: &C,
        ctx: &mut SessionContext,
        out: &mut W,
    ) -> eyre::Result<()> {
        ctx.check_credentials()?;
        let enterprise_id = ctx.enterprise_id()?;
        validate_id("group", &self.group_id)?;
        let name = validate_group_name(self.name)?;

        let group = client
            .update_group(UpdateDeviceGroupCommand {
                enterprise_id,
                group_id: self.group_id,
                name,
            })
            .map_err(|err| CliError::remote("update details of a group", err))?;

        render(
            out,
            OutputFormat::from_json_flag(self.json),
            &GroupDetailsDisplay::new(GROUP_DETAILS_HEADING, group),
        )
    }
}
