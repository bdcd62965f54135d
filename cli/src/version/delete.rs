use crate::{
    application::current::NO_CURRENT_APPLICATION,
    context::SessionContext,
    errors::CliError,
    espercommand::CliCommand,
    validators::validate_id,
    version::resolve_application,
};
use clap::Args;
use esper_sdk::commands::{
    application::get::GetApplicationCommand, version::delete::DeleteAppVersionCommand,
};
use log::{debug, warn};
use std::io::Write;

#[derive(Args, Debug)]
pub struct DeleteVersionCliCommand {
    /// Id of the version to delete
    pub version_id: String,
    /// Application id, defaults to the current application
    #[arg(short, long = "app", value_name = "APPLICATION_ID")]
    pub app: Option<String>,
}

impl DeleteVersionCliCommand {
    pub fn execute<C: CliCommand, W: Write>(
        self,
        client: &C,
        ctx: &mut SessionContext,
        out: &mut W,
    ) -> eyre::Result<()> {
        ctx.check_credentials()?;
        let enterprise_id = ctx.enterprise_id()?;

        let Some(application_id) = resolve_application(self.app, ctx) else {
            writeln!(out, "{NO_CURRENT_APPLICATION}")?;
            return Ok(());
        };
        validate_id("application", &application_id)?;
        validate_id("version", &self.version_id)?;

        client
            .delete_version(DeleteAppVersionCommand {
                enterprise_id: enterprise_id.clone(),
                application_id: application_id.clone(),
                version_id: self.version_id.clone(),
            })
            .map_err(|err| CliError::remote("delete a version", err))?;

        writeln!(out, "Version with id {} deleted successfully", self.version_id)?;

        // Deleting the last version removes the application too; a gone
        // application must not stay current.
        match client.get_application(GetApplicationCommand {
            enterprise_id,
            application_id: application_id.clone(),
        }) {
            Ok(_) => {}
            Err(err) if err.status() == Some(404) => {
                if ctx
                    .current_application()
                    .is_some_and(|application| application.id == application_id)
                {
                    ctx.unset_current_application()?;
                    debug!("Unset the current application {application_id}");
                }
            }
            Err(err) => {
                debug!("Failed to get an application when deleting a version: {err:?}");
                warn!(
                    "Failed to get an application when deleting a version, reason: {}",
                    err.reason()
                );
            }
        }

        Ok(())
    }
}
