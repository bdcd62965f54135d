use clap::{Args, Subcommand};

use esper_cli::application::current::CurrentApplicationCliCommand;
use esper_cli::application::show::ShowApplicationCliCommand;

#[derive(Args, Debug)]
pub struct ApplicationCliCommand {
    #[command(subcommand)]
    pub command: ApplicationCommands,
}

#[derive(Debug, Subcommand)]
pub enum ApplicationCommands {
    /// Show the details of an application
    Show(ShowApplicationCliCommand),
    /// Show or unset the current application
    Current(CurrentApplicationCliCommand),
}
