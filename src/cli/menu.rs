// src/cli/menu.rs
use anyhow::Result;
use inquire::{Confirm, InquireError, Password, Select, Text};

use securelogin::core::{Config, LoginSession, SessionError};
use securelogin::strength::StrengthPolicy;

use super::handlers;

const CHECK: &str = "🔍  Check password strength";
const LOGIN: &str = "🔓  Login";
const GENERATE: &str = "🔐  Generate strong password";
const HISTORY: &str = "📧  Show remembered emails";
const EXIT: &str = "❌  Exit";

fn prompt_password(message: &str) -> Result<String, InquireError> {
    Password::new(message)
        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
        .prompt()
}

pub fn run_cli_menu(config: &Config, policy: &StrengthPolicy, session: &mut LoginSession) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║         🔐 SECURE LOGIN PAGE         ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let options = vec![CHECK, LOGIN, GENERATE, HISTORY, EXIT];
        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable();

        let result = match selection {
            Ok(Some(CHECK)) => check(policy),
            Ok(Some(LOGIN)) => login(policy, session),
            Ok(Some(GENERATE)) => generate(config, policy),
            Ok(Some(HISTORY)) => {
                handlers::handle_history(session);
                Ok(())
            }
            Ok(_) => break,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match result {
            Ok(()) => {}
            Err(e) => match e.downcast_ref::<InquireError>() {
                Some(InquireError::OperationCanceled) => println!("Cancelled."),
                Some(InquireError::OperationInterrupted) => break,
                _ => {
                    log::error!("Menu action failed: {}", e);
                    eprintln!("❌ {}", e);
                }
            },
        }
        println!();
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn check(policy: &StrengthPolicy) -> Result<()> {
    let password = prompt_password("🔑 Password:")?;
    handlers::handle_check(policy, &password);
    Ok(())
}

fn login(policy: &StrengthPolicy, session: &mut LoginSession) -> Result<()> {
    let suggestions = session.history().join(", ");
    let mut email_prompt = Text::new("📧 Email:").with_placeholder("Enter your email...");
    if !suggestions.is_empty() {
        email_prompt = email_prompt.with_help_message(&suggestions);
    }
    let email = email_prompt.prompt()?;

    let password = match session.autofill(&email).map(String::from) {
        Some(saved) => {
            println!("✅ Existing user detected.");
            let use_saved = Confirm::new("Autofill the saved password?")
                .with_default(true)
                .prompt()?;
            if use_saved {
                saved
            } else {
                prompt_password("🔑 Password:")?
            }
        }
        None => prompt_password("🔑 Password:")?,
    };

    if !password.is_empty() {
        handlers::handle_check(policy, &password);
    }

    let remember = Confirm::new("💾 Remember me?").with_default(false).prompt()?;

    match handlers::handle_login(session, &email, &password, remember) {
        Ok(_) => Ok(()),
        Err(e) => match e.downcast_ref::<SessionError>() {
            Some(SessionError::Validation(msg)) => {
                println!("⚠️ {}", msg);
                Ok(())
            }
            _ => Err(e),
        },
    }
}

fn generate(config: &Config, policy: &StrengthPolicy) -> Result<()> {
    let default = config.default_password_length.to_string();
    let input = Text::new("Choose password length:")
        .with_default(&default)
        .with_help_message(&format!(
            "Between {} and {}",
            config.min_password_length, config.max_password_length
        ))
        .prompt()?;

    let length = match input.trim().parse::<usize>() {
        Ok(n) => n,
        Err(_) => {
            println!("⚠️ '{}' is not a number", input.trim());
            return Ok(());
        }
    };

    let options = handlers::generation_options(config, Some(length), false, false)?;
    handlers::handle_generate(&options, policy)?;
    Ok(())
}
