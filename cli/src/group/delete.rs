use crate::{
    context::SessionContext, errors::CliError, espercommand::CliCommand, validators::validate_id,
};
use clap::Args;
use esper_sdk::commands::group::delete::DeleteDeviceGroupCommand;
use log::debug;
use std::io::Write;

#[derive(Args, Debug)]
pub struct DeleteGroupCliCommand {
    /// Id of the group to delete
    pub group_id: String,
}

impl DeleteGroupCliCommand {
    pub fn execute<C: CliCommand, W: Write>(
        self,
        client: &C,
        ctx: &mut SessionContext,
        out: &mut W,
    ) -> eyre::Result<()> {
        ctx.check_credentials()?;
        let enterprise_id = ctx.enterprise_id()?;
        validate_id("group", &self.group_id)?;

        client
            .delete_group(DeleteDeviceGroupCommand {
                enterprise_id,
                group_id: self.group_id.clone(),
            })
            .map_err(|err| CliError::remote("delete group", err))?;

        writeln!(out, "Group with id {} deleted successfully", self.group_id)?;

        // A deleted group must not stay current.
        if ctx
            .current_group()
            .is_some_and(|group| group.id == self.group_id)
        {
            ctx.unset_current_group()?;
            debug!("Unset the current group {}", self.group_id);
        }

        Ok(())
    }
}
