use crate::{
    context::SessionContext,
    errors::CliError,
    espercommand::CliCommand,
    formatters::{render, OutputFormat},
    group::{GroupDetailsDisplay, GROUP_DETAILS_HEADING},
    validators::validate_id,
};
use clap::Args;
use esper_sdk::commands::group::get::GetDeviceGroupCommand;
use log::debug;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ShowGroupCliCommand {
    /// Id of the group to show
    pub group_id: String,
    /// Render result in JSON format
    #[arg(short, long, default_value_t = false)]
    pub json: bool,
    /// Set group as current group for further group related commands
    #[arg(short, long, default_value_t = false)]
    pub set: bool,
}

impl ShowGroupCliCommand {
    pub fn execute<C: CliCommand, W: Write>(
        self,
        client: &C,
        ctx: &mut SessionContext,
        out: &mut W,
    ) -> eyre::Result<()> {
        ctx.check_credentials()?;
        let enterprise_id = ctx.enterprise_id()?;
        validate_id("group", &self.group_id)?;

        // Pinned before the fetch: an id the API rejects still becomes current.
        if self.set {
            ctx.set_current_group(&self.group_id)?;
            debug!("Set the current group {}", self.group_id);
        }

        let group = client
            .get_group(GetDeviceGroupCommand {
                enterprise_id,
                group_id: self.group_id,
            })
            .map_err(|err| CliError::remote("show details of a group", err))?;

        render(
            out,
            OutputFormat::from_json_flag(self.json),
            &GroupDetailsDisplay::new(GROUP_DETAILS_HEADING, group),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::CliError,
        group::show::ShowGroupCliCommand,
        tests::utils::{create_test_client, create_test_context, test_config, test_group},
    };
    use esper_sdk::{commands::group::get::GetDeviceGroupCommand, ApiError, CurrentGroup};
    use mockall::predicate;

    #[test]
    fn test_cli_group_show() {
        let mut client = create_test_client();
        let (_tmpdir, mut ctx) = create_test_context(Some(test_config()));

        client
            .expect_get_group()
            .with(predicate::eq(GetDeviceGroupCommand {
                enterprise_id: "e1".to_string(),
                group_id: "g1".to_string(),
            }))
            .times(1)
            .returning(|_| Ok(test_group("g1", "All devices", Some(3))));

        let mut output = Vec::new();
        let res = ShowGroupCliCommand {
            group_id: "g1".to_string(),
            json: false,
            set: false,
        }
        .execute(&client, &mut ctx, &mut output);
        assert!(res.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("GROUP DETAILS"));
        assert!(output_str.contains(" name         | All devices "));
        assert_eq!(ctx.current_group(), None);
    }

    #[test]
    fn test_cli_group_show_set_current() {
        let mut client = create_test_client();
        let (_tmpdir, mut ctx) = create_test_context(Some(test_config()));

        client
            .expect_get_group()
            .returning(|_| Ok(test_group("g1", "All devices", Some(3))));

        let mut output = Vec::new();
        let res = ShowGroupCliCommand {
            group_id: "g1".to_string(),
            json: true,
            set: true,
        }
        .execute(&client, &mut ctx, &mut output);
        assert!(res.is_ok());

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "g1", "name": "All devices", "device_count": 3})
        );
        assert_eq!(
            ctx.store().get::<CurrentGroup>().unwrap(),
            Some(CurrentGroup {
                id: "g1".to_string()
            })
        );
    }

    #[test]
    fn test_cli_group_show_set_pins_even_when_fetch_fails() {
        let mut client = create_test_client();
        let (_tmpdir, mut ctx) = create_test_context(Some(test_config()));

        client.expect_get_group().returning(|_| {
            Err(ApiError::Status {
                status: 404,
                reason: "Not Found".to_string(),
                body: String::new(),
            })
        });

        let mut output = Vec::new();
        let err = ShowGroupCliCommand {
            group_id: "wrong-group".to_string(),
            json: false,
            set: true,
        }
        .execute(&client, &mut ctx, &mut output)
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::RemoteApi { .. })
        ));
        assert_eq!(
            ctx.current_group().map(|g| g.id.as_str()),
            Some("wrong-group")
        );
    }

    #[test]
    fn test_cli_group_show_set_requires_credentials() {
        let mut client = create_test_client();
        let (_tmpdir, mut ctx) = create_test_context(None);

        client.expect_get_group().never();

        let mut output = Vec::new();
        let res = ShowGroupCliCommand {
            group_id: "g1".to_string(),
            json: false,
            set: true,
        }
        .execute(&client, &mut ctx, &mut output);

        assert!(res.is_err());
        assert_eq!(ctx.current_group(), None);
        assert_eq!(ctx.store().get::<CurrentGroup>().unwrap(), None);
    }

    #[test]
    fn test_cli_group_show_rejects_dot_id() {
        let mut client = create_test_client();
        let (_tmpdir, mut ctx) = create_test_context(Some(test_config()));

        client.expect_get_group().never();

        let mut output = Vec::new();
        let err = ShowGroupCliCommand {
            group_id: "..".to_string(),
            json: false,
            set: true,
        }
        .execute(&client, &mut ctx, &mut output)
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Validation(_))
        ));
        assert_eq!(ctx.store().get::<CurrentGroup>().unwrap(), None);
    }
}
