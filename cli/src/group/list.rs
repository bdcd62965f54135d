use crate::{
    context::SessionContext,
    errors::CliError,
    espercommand::CliCommand,
    formatters::{render, OutputFormat},
    group::GroupListDisplay,
    validators::non_empty,
};
use clap::Args;
use esper_sdk::commands::group::list::ListDeviceGroupCommand;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ListGroupCliCommand {
    /// Filter groups by group name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Number of results to return per page
    #[arg(short, long, default_value_t = 20)]
    pub limit: u32,
    /// The initial index from which to return the results
    #[arg(short = 'i', long, default_value_t = 0)]
    pub offset: u32,
    /// Render result in JSON format
    #[arg(short, long, default_value_t = false)]
    pub json: bool,
}

impl ListGroupCliCommand {
    pub fn execute<C: CliCommand, W: Write>(
        self,
        client: &C,
        ctx: &mut SessionContext,
        out: &mut W,
    ) -> eyre::Result<()> {
        ctx.check_credentials()?;
        let enterprise_id = ctx.enterprise_id()?;

        let response = client
            .list_group(ListDeviceGroupCommand {
                enterprise_id,
                name: non_empty(self.name),
                limit: self.limit,
                offset: self.offset,
            })
            .map_err(|err| CliError::remote("list groups", err))?;

        render(
            out,
            OutputFormat::from_json_flag(self.json),
            &GroupListDisplay::from(response),
        )
    }
}
