use crate::{
    application::current::NO_CURRENT_APPLICATION,
    context::SessionContext,
    errors::CliError,
    espercommand::CliCommand,
    formatters::{render, Notice, OutputFormat},
    validators::{non_empty, validate_id},
    version::{resolve_application, VersionListDisplay},
};
use clap::Args;
use esper_sdk::commands::version::list::ListAppVersionCommand;
use serde_json::json;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ListVersionCliCommand {
    /// Application id, defaults to the current application
    #[arg(short, long = "app", value_name = "APPLICATION_ID")]
    pub app: Option<String>,
    /// Filter versions by version code
    #[arg(long)]
    pub version_code: Option<String>,
    /// Filter versions by build number
    #[arg(long)]
    pub build_number: Option<String>,
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

impl ListVersionCliCommand {
    pub fn execute<C: CliCommand, W: Write>(
        self,
        client: &C,
        ctx: &mut SessionContext,
        out: &mut W,
    ) -> eyre::Result<()> {
        ctx.check_credentials()?;
        let enterprise_id = ctx.enterprise_id()?;
        let format = OutputFormat::from_json_flag(self.json);

        let Some(application_id) = resolve_application(self.app, ctx) else {
            return render(
                out,
                format,
                &Notice::new(NO_CURRENT_APPLICATION, json!({ "application": null })),
            );
        };
        validate_id("application", &application_id)?;

        let versions = client
            .list_version(ListAppVersionCommand {
                enterprise_id,
                application_id,
                version_code: non_empty(self.version_code),
                build_number: non_empty(self.build_number),
                limit: self.limit,
                offset: self.offset,
            })
            .map_err(|err| CliError::remote("list versions", err))?;

        render(out, format, &VersionListDisplay::from(versions))
    }
}
