use clap::{Args, Subcommand};

use esper_cli::version::delete::DeleteVersionCliCommand;
use esper_cli::version::list::ListVersionCliCommand;
use esper_cli::version::show::ShowVersionCliCommand;

#[derive(Args, Debug)]
pub struct VersionCliCommand {
    #[command(subcommand)]
    pub command: VersionCommands,
}

#[derive(Debug, Subcommand)]
pub enum VersionCommands {
    /// List versions of an application
    List(ListVersionCliCommand),
    /// Show the details of a version
    Show(ShowVersionCliCommand),
    /// Delete a version
    Delete(DeleteVersionCliCommand),
}
