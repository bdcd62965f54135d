use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::{io::Write, path::PathBuf};
mod cli;
use crate::cli::{
    application::ApplicationCommands, command::Command, configure::ConfigureCommands,
    group::GroupCommands, version::VersionCommands,
};
use esper_cli::{
    context::SessionContext,
    errors::{exit_code_for, CliError},
    espercommand::CliCommandImpl,
};
use esper_sdk::{ConfigStore, EsperHttpClient};
use log::error;


#[derive(Parser, Debug)]
#[command(term_width = 0)]
#[command(name = "esper")]
#[command(version = option_env!("BUILD_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")))]
#[command(about = "Esper device management client tool", long_about = None)]
struct App {
    #[command(subcommand)]
    command: Command,
    /// Path to the local store file
    #[arg(long, value_name = "PATH", global = true)]
    config_file: Option<PathBuf>,
    /// Log debug details, including full API errors
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() {
    let app = App::parse();
    init_logger(app.verbose);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    if let Err(e) = run(app, &mut handle) {
        error!("{e}");
        std::process::exit(exit_code_for(&e));
    }
}

fn init_logger(verbose: bool) {
    // Debug output stays limited to our crates; HTTP internals are noisy.
    let default_filter = if verbose {
        "warn,esper=debug,esper_cli=debug,esper_sdk=debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn load_context(config_file: Option<PathBuf>) -> Result<SessionContext, CliError> {
    let store = match config_file {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::open_default()?,
    };
    Ok(SessionContext::load(store)?)
}

/// Session plus API client, for commands that talk to the API.
fn connect(config_file: Option<PathBuf>) -> eyre::Result<(SessionContext, EsperHttpClient)> {
    let ctx = load_context(config_file)?;
    let config = ctx.check_credentials()?;
    let esperclient = EsperHttpClient::new(&config.host, &config.api_key)?;
    Ok((ctx, esperclient))
}

fn run<W: Write>(app: App, out: &mut W) -> eyre::Result<()> {
    let App {
        command,
        config_file,
        ..
    } = app;

    match command {
        Command::Completion(args) => {
            let mut cmd = App::command();
            generate(args.shell, &mut cmd, "esper", out);
            Ok(())
        }
        Command::Configure(command) => {
            let mut ctx = load_context(config_file)?;
            match command.command {
                ConfigureCommands::Get(args) => args.execute(&ctx, out),
                ConfigureCommands::Set(args) => args.execute(&mut ctx, out),
            }
        }
        Command::Group(command) => {
            let (mut ctx, esperclient) = connect(config_file)?;
            let client = CliCommandImpl::new(&esperclient);

            match command.command {
                GroupCommands::List(args) => args.execute(&client, &mut ctx, out),
                GroupCommands::Show(args) => args.execute(&client, &mut ctx, out),
                GroupCommands::Current(args) => args.execute(&client, &mut ctx, out),
                GroupCommands::Create(args) => args.execute(&client, &mut ctx, out),
                GroupCommands::Update(args) => args.execute(&client, &mut ctx, out),
                GroupCommands::Delete(args) => args.execute(&client, &mut ctx, out),
            }
        }
        Command::Application(command) => {
            let (mut ctx, esperclient) = connect(config_file)?;
            let client = CliCommandImpl::new(&esperclient);

            match command.command {
                ApplicationCommands::Show(args) => args.execute(&client, &mut ctx, out),
                ApplicationCommands::Current(args) => args.execute(&client, &mut ctx, out),
            }
        }
        Command::Version(command) => {
            let (mut ctx, esperclient) = connect(config_file)?;
            let client = CliCommandImpl::new(&esperclient);

            match command.command {
                VersionCommands::List(args) => args.execute(&client, &mut ctx, out),
                VersionCommands::Show(args) => args.execute(&client, &mut ctx, out),
                VersionCommands::Delete(args) => args.execute(&client, &mut ctx, out),
            }
        }
    }
}
