mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigCommands};
use colored::Colorize;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Demo => commands::demo::run(),
        Commands::Render(args) => commands::render::run(args),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init {
                path,
                columns,
                force,
            } => commands::config::init(path, columns, force),
            ConfigCommands::Show { path } => commands::config::show(path),
        },
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
