use clap::{Args, Subcommand};

use esper_cli::configure::get::GetConfigureCliCommand;
use esper_cli::configure::set::SetConfigureCliCommand;

#[derive(Args, Debug)]
pub struct ConfigureCliCommand {
    #[command(subcommand)]
    pub command: ConfigureCommands,
}

#[derive(Debug, Subcommand)]
pub enum ConfigureCommands {
    /// Get current config settings
    #[command()]
    Get(GetConfigureCliCommand),
    /// Set config settings
    #[command()]
    Set(SetConfigureCliCommand),
}
