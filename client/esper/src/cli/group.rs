use clap::{Args, Subcommand};

use esper_cli::group::create::CreateGroupCliCommand;
use esper_cli::group::current::CurrentGroupCliCommand;
use esper_cli::group::delete::DeleteGroupCliCommand;
use esper_cli::group::list::ListGroupCliCommand;
use esper_cli::group::show::ShowGroupCliCommand;
use esper_cli::group::update::UpdateGroupCliCommand;

#[derive(Args, Debug)]
pub struct GroupCliCommand {
    #[command(subcommand)]
    pub command: GroupCommands,
}

#[derive(Debug, Subcommand)]
pub enum GroupCommands {
    /// List groups of the enterprise
    List(ListGroupCliCommand),
    /// Show the details of a group
    Show(ShowGroupCliCommand),
    /// Show or unset the current group
    Current(CurrentGroupCliCommand),
    /// Create a group
    Create(CreateGroupCliCommand),
    /// Rename a group
    Update(UpdateGroupCliCommand),
    /// Delete a group
    Delete(DeleteGroupCliCommand),
}
