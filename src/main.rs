use clap::Parser;
use std::path::Path;

mod cli;
mod core;
mod generators;
mod models;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::models::PasswordGenerationOptions;

fn main() {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let result = match args.command {
        Some(CliCommand::Generate {
            length,
            no_upper,
            no_lower,
            no_digits,
            no_symbols,
            count,
        }) => {
            let options = PasswordGenerationOptions {
                length: length.unwrap_or(config.default_password_length),
                include_uppercase: !no_upper,
                include_lowercase: !no_lower,
                include_numbers: !no_digits,
                include_symbols: !no_symbols,
            };
            cli::handlers::handle_generate(&options, count, args.json)
        }
        Some(CliCommand::Rate { password }) => cli::handlers::handle_rate(&password, args.json),
        None => {
            log::info!("🔐 Starting interactive menu");
            cli::menu::run_menu(&config)
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
