// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate {
        /// Password length (4-64)
        #[arg(long, short, env = "DEFAULT_PASSWORD_LENGTH")]
        length: Option<usize>,

        /// Exclude uppercase letters
        #[arg(long)]
        no_upper: bool,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lower: bool,

        /// Exclude digits
        #[arg(long)]
        no_digits: bool,

        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,

        /// Number of passwords to generate
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },

    /// Rate the strength of a password
    Rate {
        /// Password to rate
        #[arg(required = true)]
        password: String,
    },
}
