use clap::Parser;
use condotel_pricing::cli::{self, output, CheckCommand, Cli, Commands};
use tracing::error;

fn main() {
    let _ = dotenvy::dotenv();

    let result = match Cli::parse().command {
        Commands::Quote(args) => cli::quote::execute(&args),
        Commands::Stay(args) => cli::stay::execute(&args),
        Commands::Check(CheckCommand::Config(args)) => cli::check::execute_config(&args.config),
    };

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
