//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::api::Api;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Serve { host, port }) => cmd_serve(cli, host.as_deref(), *port),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(cli),
            ConfigCommands::Init => {
                output::info(&Settings::template());
                Ok(())
            }
            ConfigCommands::Path => cmd_config_path(),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, run with --help".to_string(),
        )),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    Ok(Settings::load(cli.config.as_deref())?)
}

#[instrument(skip(cli))]
fn cmd_serve(cli: &Cli, host: Option<&str>, port: Option<u16>) -> CliResult<()> {
    let mut settings = load_settings(cli)?;
    if let Some(host) = host {
        if host.trim().is_empty() {
            return Err(CliError::InvalidArgs("--host must not be empty".into()));
        }
        settings.host = host.to_string();
    }
    if let Some(port) = port {
        settings.port = port;
    }
    debug!("cmd_serve: settings={:?}", settings);

    let addr = settings.bind_addr();
    let container = ServiceContainer::new(settings);
    let api = Api::new(container.deck_service.clone(), container.settings.clone());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Io {
            context: "start async runtime".into(),
            source: e,
        })?;

    output::action("Serving", &addr);
    runtime
        .block_on(api.serve())
        .map_err(|source| CliError::Server { addr, source })
}

fn cmd_config_show(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    output::info(&settings.to_toml()?);
    Ok(())
}

fn cmd_config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => {
            if !path.exists() {
                output::warning(&format!("{} does not exist yet", path.display()));
            }
            output::info(&path.display());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no home directory, global config unavailable".into(),
        )),
    }
}
