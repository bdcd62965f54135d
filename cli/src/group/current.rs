use crate::{
    context::SessionContext,
    errors::CliError,
    espercommand::CliCommand,
    formatters::{render, Notice, OutputFormat},
    group::{GroupDetailsDisplay, GROUP_DETAILS_HEADING},
};
use clap::Args;
use esper_sdk::commands::group::get::GetDeviceGroupCommand;
use serde_json::json;
use std::io::Write;

pub const NO_CURRENT_GROUP: &str = "Not set the current group.";
pub const NO_GROUP_TO_UNSET: &str = "No current group to unset.";

#[derive(Args, Debug)]
pub struct CurrentGroupCliCommand {
    /// Render result in JSON format
    #[arg(short, long, default_value_t = false)]
    pub json: bool,
    /// Unset the current group
    #[arg(short, long, default_value_t = false)]
    pub unset: bool,
}

impl CurrentGroupCliCommand {
    pub fn execute<C: CliCommand, W: Write>(
        self,
        client: &C,
        ctx: &mut SessionContext,
        out: &mut W,
    ) -> eyre::Result<()> {
        ctx.check_credentials()?;
        let format = OutputFormat::from_json_flag(self.json);

        if self.unset {
            let notice = match ctx.unset_current_group()? {
                Some(previous) => Notice::new(
                    format!("Unset the current group {}", previous.id),
                    json!({ "unset": previous.id }),
                ),
                None => Notice::new(NO_GROUP_TO_UNSET, json!({ "unset": null })),
            };
            return render(out, format, &notice);
        }

        let Some(group_id) = ctx.current_group().map(|group| group.id.clone()) else {
            return render(
                out,
                format,
                &Notice::new(NO_CURRENT_GROUP, json!({ "current": null })),
            );
        };

        let enterprise_id = ctx.enterprise_id()?;
        let group = client
            .get_group(GetDeviceGroupCommand {
                enterprise_id,
                group_id,
            })
            .map_err(|err| CliError::remote("show the current group", err))?;

        let heading = format!("{GROUP_DETAILS_HEADING} of {}", group.name);
        render(out, format, &GroupDetailsDisplay::new(heading, group))
    }
}
