use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use inquire::Password;

mod cli;

use crate::cli::{Args, CliCommand};
use securelogin::core::{Config, LoginSession};
use securelogin::store::CredentialStore;

fn init_logging(config: &Config) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(log_file) = &config.log_file {
        if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
        let file = std::fs::File::create(log_file)
            .with_context(|| format!("creating log file {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(file) = args.file {
        config.credentials_file = file;
    }
    init_logging(&config)?;
    log::debug!("Loaded config: {:?}", config);

    let policy = config.strength_policy()?;

    match args.command {
        Some(CliCommand::Check { password }) => {
            let password = match password {
                Some(p) => p,
                None => Password::new("🔑 Password:")
                    .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                    .prompt()?,
            };
            cli::handlers::handle_check(&policy, &password);
        }
        Some(CliCommand::Generate { length, no_digits, no_special }) => {
            let options = cli::handlers::generation_options(&config, length, no_digits, no_special)?;
            cli::handlers::handle_generate(&options, &policy)?;
        }
        Some(CliCommand::Login { email, password, remember }) => {
            let mut session = LoginSession::open(CredentialStore::new(&config.credentials_file))?;
            let password = match password {
                Some(p) => p,
                None => Password::new("🔑 Password:")
                    .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                    .prompt()?,
            };
            if !password.is_empty() {
                cli::handlers::handle_check(&policy, &password);
            }
            cli::handlers::handle_login(&mut session, &email, &password, remember)?;
        }
        Some(CliCommand::History) => {
            let session = LoginSession::open(CredentialStore::new(&config.credentials_file))?;
            cli::handlers::handle_history(&session);
        }
        None => {
            let mut session = LoginSession::open(CredentialStore::new(&config.credentials_file))?;
            cli::menu::run_cli_menu(&config, &policy, &mut session)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
