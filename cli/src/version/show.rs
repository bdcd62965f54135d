use crate::{
    application::current::NO_CURRENT_APPLICATION,
    context::SessionContext,
    errors::CliError,
    espercommand::CliCommand,
    formatters::{render, Notice, OutputFormat},
    validators::validate_id,
    version::{resolve_application, VersionDetailsDisplay, VERSION_DETAILS_HEADING},
};
use clap::Args;
use esper_sdk::commands::version::get::GetAppVersionCommand;
use serde_json::json;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ShowVersionCliCommand {
    /// Id of the version to show
    pub version_id: String,
    /// Application id, defaults to the current application
    #[arg(short, long = "app", value_name = "APPLICATION_ID")]
    pub app: Option<String>,
    /// Render result in JSON format
    #[arg(short, long, default_value_t = false)]
    pub json: bool,
}

impl ShowVersionCliCommand {
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
        validate_id("version", &self.version_id)?;

        let heading = format!("{VERSION_DETAILS_HEADING} of {}", self.version_id);
        let version = client
            .get_version(GetAppVersionCommand {
                enterprise_id,
                application_id,
                version_id: self.version_id,
            })
            .map_err(|err| CliError::remote("show details of a version", err))?;

        render(out, format, &VersionDetailsDisplay::new(heading, version))
    }
}
