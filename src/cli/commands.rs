// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Check the strength of a password
    Check {
        /// Password to check (prompted for when omitted)
        password: Option<String>,
    },

    /// Generate a random password
    Generate {
        /// Password length (defaults to DEFAULT_PASSWORD_LENGTH)
        #[arg(long, short)]
        length: Option<usize>,

        /// Leave digits out of the character pool
        #[arg(long)]
        no_digits: bool,

        /// Leave punctuation out of the character pool
        #[arg(long)]
        no_special: bool,
    },

    /// Log in with an email and password
    Login {
        /// Email address
        #[arg(long, short)]
        email: String,

        /// Password (prompted for when omitted)
        #[arg(long, short)]
        password: Option<String>,

        /// Save the credentials to the credentials file
        #[arg(long)]
        remember: bool,
    },

    /// List remembered email addresses
    History,
}
