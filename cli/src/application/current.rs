use crate::{
    application::{ApplicationDetailsDisplay, APPLICATION_DETAILS_HEADING},
    context::SessionContext,
    errors::CliError,
    espercommand::CliCommand,
    formatters::{render, Notice, OutputFormat},
};
use clap::Args;
use esper_sdk::commands::application::get::GetApplicationCommand;
use serde_json::json;
use std::io::Write;

pub const NO_CURRENT_APPLICATION: &str = "Not set the current application.";
pub const NO_APPLICATION_TO_UNSET: &str = "No current application to unset.";

#[derive(Args, Debug)]
pub struct CurrentApplicationCliCommand {
    /// Render result in JSON format
    #[arg(short, long, default_value_t = false)]
    pub json: bool,
    /// Unset the current application
    #[arg(short, long, default_value_t = false)]
    pub unset: bool,
}

impl CurrentApplicationCliCommand {
    pub fn execute<C: CliCommand, W: Write>(
        self,
        client: &C,
        ctx: &mut SessionContext,
        out: &mut W,
    ) -> eyre::Result<()> {
        ctx.check_credentials()?;
        let format = OutputFormat::from_json_flag(self.json);

        if self.unset {
            let notice = match ctx.unset_current_application()? {
                Some(previous) => Notice::new(
                    format!("Unset the current application {}", previous.id),
                    json!({ "unset": previous.id }),
                ),
                None => Notice::new(NO_APPLICATION_TO_UNSET, json!({ "unset": null })),
            };
            return render(out, format, &notice);
        }

        let Some(application_id) = ctx.current_application().map(|app| app.id.clone()) else {
            return render(
                out,
                format,
                &Notice::new(NO_CURRENT_APPLICATION, json!({ "current": null })),
            );
        };

        let enterprise_id = ctx.enterprise_id()?;
        let application = client
            .get_application(GetApplicationCommand {
                enterprise_id,
                application_id,
            })
            .map_err(|err| CliError::remote("show the current application", err))?;

        let heading = format!(
            "{APPLICATION_DETAILS_HEADING} of {}",
            application.application_name
        );
        render(
            out,
            format,
            &ApplicationDetailsDisplay::new(heading, application),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        application::current::{
            CurrentApplicationCliCommand, NO_APPLICATION_TO_UNSET, NO_CURRENT_APPLICATION,
        },
        tests::utils::{create_test_client, create_test_context, test_application, test_config},
    };
    use esper_sdk::{commands::application::get::GetApplicationCommand, ApplicationDocument};
    use mockall::predicate;
    use serde_json::json;

    fn pinned() -> ApplicationDocument {
        ApplicationDocument {
            id: "a1".to_string(),
            name: Some("Tiny Notepad".to_string()),
        }
    }

    #[test]
    fn test_cli_application_current_not_set() {
        let mut client = create_test_client();
        let (_tmpdir, mut ctx) = create_test_context(Some(test_config()));

        client.expect_get_application().never();

        let mut output = Vec::new();
        CurrentApplicationCliCommand {
            json: false,
            unset: false,
        }
        .execute(&client, &mut ctx, &mut output)
        .unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{NO_CURRENT_APPLICATION}\n")
        );

        let mut output = Vec::new();
        CurrentApplicationCliCommand {
            json: false,
            unset: true,
        }
        .execute(&client, &mut ctx, &mut output)
        .unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{NO_APPLICATION_TO_UNSET}\n")
        );
    }

    #[test]
    fn test_cli_application_current_shows_details() {
        let mut client = create_test_client();
        let (_tmpdir, mut ctx) = create_test_context(Some(test_config()));
        ctx.set_current_application(pinned()).unwrap();

        client
            .expect_get_application()
            .with(predicate::eq(GetApplicationCommand {
                enterprise_id: "e1".to_string(),
                application_id: "a1".to_string(),
            }))
            .times(1)
            .returning(|_| Ok(test_application("a1", "Tiny Notepad")));

        let mut output = Vec::new();
        CurrentApplicationCliCommand {
            json: false,
            unset: false,
        }
        .execute(&client, &mut ctx, &mut output)
        .unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("APPLICATION DETAILS of Tiny Notepad"));
        assert!(output_str.contains(" id           | a1 "));
    }

    #[test]
    fn test_cli_application_current_unset_json() {
        let mut client = create_test_client();
        let (_tmpdir, mut ctx) = create_test_context(Some(test_config()));
        ctx.set_current_application(pinned()).unwrap();

        client.expect_get_application().never();

        let mut output = Vec::new();
        CurrentApplicationCliCommand {
            json: true,
            unset: true,
        }
        .execute(&client, &mut ctx, &mut output)
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value, json!({"unset": "a1"}));
        assert_eq!(ctx.current_application(), None);
    }
}
