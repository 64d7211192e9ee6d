use clap::Parser;
use tracing_subscriber::EnvFilter;

use il_cli::cli::{self, Cli, Command, ConfigCommand, SessionsCommand};
use il_domain::config::load_config;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_cli_tracing();

    match args.command {
        Command::Files { format, key, json } => {
            let (config, _) = load_config()?;
            cli::files::run(&config, format, &key, json)
        }
        Command::Sessions(SessionsCommand::Show { key }) => {
            let (config, _) = load_config()?;
            cli::sessions::show(&config, &key)
        }
        Command::Sessions(SessionsCommand::List { json }) => {
            let (config, _) = load_config()?;
            cli::sessions::list(&config, json)
        }
        Command::Config(ConfigCommand::Validate) => {
            let (config, config_path) = load_config()?;
            if !cli::config::validate(&config, &config_path, &mut std::io::stdout().lock())? {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Config(ConfigCommand::Show) => {
            let (config, _) = load_config()?;
            cli::config::show(&config)
        }
        Command::Doctor => {
            let (config, config_path) = load_config()?;
            if !cli::doctor::run(&config, &config_path) {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Version => {
            println!("imaging-locator {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Initialize compact stderr-only tracing.
///
/// Defaults to `warn` level so diagnostic output does not pollute stdout,
/// which carries the file lists.
fn init_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
