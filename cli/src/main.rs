mod bump;
mod cli;
mod error;
mod logging;
mod show;
mod targets;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config.as_deref();
    let result = match &cli.command {
        Commands::Increment {
            component,
            amount,
            files,
        } => bump::increment(component, *amount, files, config),
        Commands::Decrement {
            component,
            amount,
            files,
        } => bump::decrement(component, *amount, files, config),
        Commands::Set {
            component,
            value,
            files,
        } => bump::set(component, value, files, config),
        Commands::Show { json, files } => show::execute(files, config, *json),
    };

    if let Err(err) = result {
        tracing::debug!(error = ?err, "command failed");
        ui::error_message(&err.user_message());
        process::exit(1);
    }
}
