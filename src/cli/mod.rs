// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Password strength checker, generator and login demo", long_about = None)]
pub struct Args {
    /// Credentials file (overrides CREDENTIALS_FILE)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Command to execute; the interactive menu runs when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_flags() {
        let args = Args::try_parse_from(["securelogin", "generate", "--length", "16", "--no-special"]).unwrap();
        match args.command {
            Some(CliCommand::Generate { length, no_digits, no_special }) => {
                assert_eq!(length, Some(16));
                assert!(!no_digits);
                assert!(no_special);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_login_with_file_override() {
        let args = Args::try_parse_from([
            "securelogin", "--file", "creds.json", "login", "--email", "u@e.com", "--remember",
        ])
        .unwrap();
        assert_eq!(args.file, Some(PathBuf::from("creds.json")));
        match args.command {
            Some(CliCommand::Login { email, password, remember }) => {
                assert_eq!(email, "u@e.com");
                assert!(password.is_none());
                assert!(remember);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_means_menu() {
        let args = Args::try_parse_from(["securelogin"]).unwrap();
        assert!(args.command.is_none());
    }
}
