use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use musadora_core::{
    config::{OutputFormat, Settings},
    logger::{init_logger, init_tracing},
};

mod handlers;

use handlers::{CommandHandler, utils::WriteAdapter};

/// Options configurable via the CLI.
#[derive(Debug, Parser)]
#[command(name = "musadora", version = env!("CARGO_PKG_VERSION"), about)]
struct Flags {
    /// config file path (defaults to `Musadora.toml` in the user's config directory)
    #[clap(long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,
    /// Set the log level (off, error, warn, info, debug, trace)
    #[clap(long)]
    log_level: Option<log::LevelFilter>,
    /// How to print items (plain, json)
    #[clap(long)]
    format: Option<OutputFormat>,
    /// subcommand to run
    #[clap(subcommand)]
    subcommand: Option<handlers::Command>,
}

#[test]
fn verify_cli() {
    Flags::command().debug_assert();
}

#[cfg(not(tarpaulin_include))]
fn main() -> anyhow::Result<()> {
    clap_complete::CompleteEnv::with_factory(Flags::command).complete();

    let flags = Flags::parse();

    let config = match flags.config {
        Some(config) => config,
        None => Settings::get_config_path()?,
    };
    let settings = Settings::init(config, flags.log_level, flags.format)?;

    init_logger(settings.cli.log_level);
    tracing::subscriber::set_global_default(init_tracing())?;

    let mut stdout_adapter = WriteAdapter(std::io::stdout());
    let mut stderr_adapter = WriteAdapter(std::io::stderr());

    if let Some(command) = flags.subcommand {
        command.handle(&settings.cli, &mut stdout_adapter, &mut stderr_adapter)?;
    } else {
        eprintln!("No subcommand provided");
    }

    Ok(())
}
