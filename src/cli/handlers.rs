// src/cli/handlers.rs
use anyhow::{bail, Result};
use console::style;

use securelogin::core::{Config, LoginSession};
use securelogin::generators::PasswordGenerator;
use securelogin::models::{LoginOutcome, PasswordGenerationOptions, StrengthReport, Verdict};
use securelogin::strength::StrengthPolicy;

// Handlers for CLI commands

pub fn print_report(report: &StrengthReport) {
    match report.verdict {
        Verdict::Strong => println!("{}", style(format!("✅ {}", report.message)).green()),
        Verdict::Moderate => println!("{}", style(format!("⚠️ {}", report.message)).yellow()),
        Verdict::Weak if report.deny_listed => {
            println!("{}", style(format!("❌ {}", report.message)).red())
        }
        Verdict::Weak => {
            println!("{}", style("❌ Weak Password - Improve it using these tips:").red());
            for tip in &report.tips {
                println!("   • {}", tip);
            }
        }
    }
}

pub fn handle_check(policy: &StrengthPolicy, password: &str) -> StrengthReport {
    let report = policy.evaluate(password);
    print_report(&report);
    report
}

pub fn generation_options(
    config: &Config,
    length: Option<usize>,
    no_digits: bool,
    no_special: bool,
) -> Result<PasswordGenerationOptions> {
    let length = length.unwrap_or(config.default_password_length);
    if !config.length_in_bounds(length) {
        bail!(
            "Password length must be between {} and {}",
            config.min_password_length,
            config.max_password_length
        );
    }
    Ok(PasswordGenerationOptions {
        length,
        use_digits: !no_digits,
        use_special: !no_special,
    })
}

pub fn handle_generate(options: &PasswordGenerationOptions, policy: &StrengthPolicy) -> Result<String> {
    let password = PasswordGenerator::new().generate_password(options)?;
    println!("\nSuggested Strong Password: {}", style(&password).bold());
    println!("Strength: {}", policy.evaluate(&password).verdict);
    Ok(password)
}

pub fn handle_login(
    session: &mut LoginSession,
    email: &str,
    password: &str,
    remember: bool,
) -> Result<LoginOutcome> {
    let outcome = session.login(email, password, remember)?;
    print_outcome(email, &outcome);
    Ok(outcome)
}

pub fn print_outcome(email: &str, outcome: &LoginOutcome) {
    if outcome.authenticated {
        println!("{}", style(format!("🎉 Welcome back, {}!", email)).green());
    } else {
        println!("{}", style("🛑 Incorrect email or password!").yellow());
    }
    if outcome.remembered {
        println!("🔒 Password saved to the credentials file (stored as plain text).");
    }
}

pub fn handle_history(session: &LoginSession) {
    if session.history().is_empty() {
        println!("No remembered emails yet.");
        return;
    }
    println!("📧 Remembered emails:");
    for email in session.history() {
        println!("   {}", email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_length_comes_from_config() {
        let options = generation_options(&Config::default(), None, false, false).unwrap();
        assert_eq!(options.length, 12);
        assert!(options.use_digits && options.use_special);
    }

    #[test]
    fn flags_disable_character_classes() {
        let options = generation_options(&Config::default(), Some(8), true, true).unwrap();
        assert_eq!(options.length, 8);
        assert!(!options.use_digits);
        assert!(!options.use_special);
    }

    #[test]
    fn out_of_bounds_length_is_rejected() {
        assert!(generation_options(&Config::default(), Some(7), false, false).is_err());
        assert!(generation_options(&Config::default(), Some(21), false, false).is_err());
    }

    #[test]
    fn generated_password_matches_options() {
        let options = generation_options(&Config::default(), Some(20), true, false).unwrap();
        let password = handle_generate(&options, &StrengthPolicy::default()).unwrap();
        assert_eq!(password.len(), 20);
        assert!(!password.chars().any(|c| c.is_ascii_digit()));
    }
}
