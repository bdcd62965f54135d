use crate::{configure::write_config_summary, context::SessionContext};
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
pub struct GetConfigureCliCommand {}

impl GetConfigureCliCommand {
    pub fn execute<W: Write>(self, ctx: &SessionContext, out: &mut W) -> eyre::Result<()> {
        match ctx.config() {
            Some(config) => write_config_summary(out, ctx.store().path(), config),
            None => {
                writeln!(
                    out,
                    "No configuration found in {}, run `esper configure set`",
                    ctx.store().path().display()
                )?;
                Ok(())
            }
        }
    }
}
