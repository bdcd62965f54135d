use crate::{
    configure::write_config_summary, context::SessionContext, errors::CliError,
    validators::non_empty,
};
use clap::{ArgGroup, Args};
use esper_config::Environment;
use esper_sdk::ConfigDocument;
use std::io::Write;

#[derive(Args, Debug)]
#[clap(group(
    ArgGroup::new("mandatory")
        .args(&["api_key", "enterprise_id", "environment", "host"])
        .required(true)
        .multiple(true)
))]
pub struct SetConfigureCliCommand {
    #[arg(long, help = "API key generated in the Esper console")]
    pub api_key: Option<String>,
    #[arg(long, help = "Enterprise id every command is scoped to")]
    pub enterprise_id: Option<String>,
    #[arg(
        long,
        conflicts_with = "host",
        help = "Esper tenant name (e.g. `acme` for acme-api.esper.cloud)"
    )]
    pub environment: Option<String>,
    #[arg(long, help = "Full API base URL, for hosts not derived from a tenant name")]
    pub host: Option<String>,
}

impl SetConfigureCliCommand {
    pub fn execute<W: Write>(self, ctx: &mut SessionContext, out: &mut W) -> eyre::Result<()> {
        let location = resolve_location(non_empty(self.environment), non_empty(self.host))?;
        let api_key = non_empty(self.api_key);
        let enterprise_id = non_empty(self.enterprise_id);

        let config = match ctx.config().cloned() {
            Some(mut config) => {
                if let Some(api_key) = api_key {
                    config.api_key = api_key;
                }
                if let Some(enterprise_id) = enterprise_id {
                    config.enterprise_id = Some(enterprise_id);
                }
                if let Some((environment, host)) = location {
                    config.environment = environment;
                    config.host = host;
                }
                config
            }
            None => {
                let (environment, host) = location.ok_or_else(|| {
                    CliError::Validation(
                        "--environment or --host is required for the first configuration"
                            .to_string(),
                    )
                })?;
                ConfigDocument {
                    api_key: api_key.ok_or_else(|| {
                        CliError::Validation(
                            "--api-key is required for the first configuration".to_string(),
                        )
                    })?,
                    enterprise_id: Some(enterprise_id.ok_or_else(|| {
                        CliError::Validation(
                            "--enterprise-id is required for the first configuration"
                                .to_string(),
                        )
                    })?),
                    environment,
                    host,
                }
            }
        };

        ctx.set_config(config)?;

        if let Some(config) = ctx.config() {
            write_config_summary(out, ctx.store().path(), config)?;
        }

        Ok(())
    }
}

/// Resolves `--environment`/`--host` into the stored environment name and
/// API base URL.
fn resolve_location(
    environment: Option<String>,
    host: Option<String>,
) -> Result<Option<(Option<String>, String)>, CliError> {
    let invalid = |err: eyre::Report| CliError::Validation(err.to_string());

    match (environment, host) {
        (Some(environment), _) => {
            let environment: Environment = environment.parse().map_err(invalid)?;
            let config = environment.config().map_err(invalid)?;
            Ok(Some((config.tenant, config.api_host)))
        }
        (None, Some(host)) => match host.parse::<Environment>().map_err(invalid)? {
            Environment::Custom(url) => Ok(Some((
                None,
                url.as_str().trim_end_matches('/').to_string(),
            ))),
            Environment::Tenant(_) => Err(CliError::Validation(format!(
                "Invalid host {host}, must be an http(s) URL"
            ))),
        },
        (None, None) => Ok(None),
    }
}
