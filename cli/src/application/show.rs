use crate::{
    application::{ApplicationDetailsDisplay, APPLICATION_DETAILS_HEADING},
    context::SessionContext,
    errors::CliError,
    espercommand::CliCommand,
    formatters::{render, OutputFormat},
    validators::validate_id,
};
use clap::Args;
use esper_sdk::{commands::application::get::GetApplicationCommand, ApplicationDocument};
use log::debug;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ShowApplicationCliCommand {
    /// Id of the application to show
    pub application_id: String,
    /// Render result in JSON format
    #[arg(short, long, default_value_t = false)]
    pub json: bool,
    /// Set application as current application for further version commands
    #[arg(short, long, default_value_t = false)]
    pub active: bool,
}

impl ShowApplicationCliCommand {
    pub fn execute<C: CliCommand, W: Write>(
        self,
        client: &C,
        ctx: &mut SessionContext,
        out: &mut W,
    ) -> eyre::Result<()> {
        ctx.check_credentials()?;
        let enterprise_id = ctx.enterprise_id()?;
        validate_id("application", &self.application_id)?;

        let application = client
            .get_application(GetApplicationCommand {
                enterprise_id,
                application_id: self.application_id,
            })
            .map_err(|err| CliError::remote("show details of an application", err))?;

        // Pinned after the fetch so the stored selection carries the name.
        if self.active {
            ctx.set_current_application(ApplicationDocument {
                id: application.id.clone(),
                name: Some(application.application_name.clone()),
            })?;
            debug!("Set the current application {}", application.id);
        }

        render(
            out,
            OutputFormat::from_json_flag(self.json),
            &ApplicationDetailsDisplay::new(APPLICATION_DETAILS_HEADING, application),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        application::show::ShowApplicationCliCommand,
        tests::utils::{create_test_client, create_test_context, test_application, test_config},
    };
    use esper_sdk::{
        commands::application::get::GetApplicationCommand, ApiError, ApplicationDocument,
    };
    use mockall::predicate;

    #[test]
    fn test_cli_application_show() {
        let mut client = create_test_client();
        let (_tmpdir, mut ctx) = create_test_context(Some(test_config()));

        client
            .expect_get_application()
            .with(predicate::eq(GetApplicationCommand {
                enterprise_id: "e1".to_string(),
                application_id: "a1".to_string(),
            }))
            .times(1)
            .returning(|_| Ok(test_application("a1", "Tiny Notepad")));

        let mut output = Vec::new();
        let res = ShowApplicationCliCommand {
            application_id: "a1".to_string(),
            json: false,
            active: false,
        }
        .execute(&client, &mut ctx, &mut output);
        assert!(res.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output_str.lines().collect();
        assert!(lines[0].contains("APPLICATION DETAILS"));
        assert_eq!(lines[1], " TITLE        | DETAILS             ");
        assert_eq!(lines[2], " id           | a1                  ");
        assert_eq!(lines[3], " name         | Tiny Notepad        ");
        assert_eq!(lines[4], " package_name | com.example.notepad ");
        assert_eq!(ctx.current_application(), None);
    }

    #[test]
    fn test_cli_application_show_active() {
        let mut client = create_test_client();
        let (_tmpdir, mut ctx) = create_test_context(Some(test_config()));

        client
            .expect_get_application()
            .returning(|_| Ok(test_application("a1", "Tiny Notepad")));

        let mut output = Vec::new();
        ShowApplicationCliCommand {
            application_id: "a1".to_string(),
            json: true,
            active: true,
        }
        .execute(&client, &mut ctx, &mut output)
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "a1",
                "name": "Tiny Notepad",
                "package_name": "com.example.notepad"
            })
        );
        assert_eq!(
            ctx.store().get::<ApplicationDocument>().unwrap(),
            Some(ApplicationDocument {
                id: "a1".to_string(),
                name: Some("Tiny Notepad".to_string()),
            })
        );
    }

    #[test]
    fn test_cli_application_show_active_not_pinned_on_failure() {
        let mut client = create_test_client();
        let (_tmpdir, mut ctx) = create_test_context(Some(test_config()));

        client.expect_get_application().returning(|_| {
            Err(ApiError::Status {
                status: 404,
                reason: "Not Found".to_string(),
                body: String::new(),
            })
        });

        let mut output = Vec::new();
        let err = ShowApplicationCliCommand {
            application_id: "missing".to_string(),
            json: false,
            active: true,
        }
        .execute(&client, &mut ctx, &mut output)
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to show details of an application, reason: Not Found"
        );
        assert_eq!(ctx.current_application(), None);
    }
}
