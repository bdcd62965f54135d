use crate::cli::{
    application::ApplicationCliCommand, configure::ConfigureCliCommand, group::GroupCliCommand,
    version::VersionCliCommand,
};
use clap::{Args, Subcommand};
use clap_complete::Shell;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage device groups
    #[command(hide = false)]
    Group(GroupCliCommand),
    /// Inspect applications and pick the current one
    #[command(hide = false, name = "app")]
    Application(ApplicationCliCommand),
    /// Manage application versions
    #[command(hide = false)]
    Version(VersionCliCommand),
    /// Local configuration
    #[command(hide = false)]
    Configure(ConfigureCliCommand),
    /// Generate shell completions
    #[command(hide = false)]
    Completion(CompletionCliCommand),
}

#[derive(Args, Debug, Clone)]
pub struct CompletionCliCommand {
    #[arg(value_enum)]
    pub shell: Shell,
}
