// src/models.rs
use serde::{Serialize, Deserialize};

/// Three-valued password strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Weak,
    Moderate,
    Strong,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Weak => write!(f, "Weak"),
            Verdict::Moderate => write!(f, "Moderate"),
            Verdict::Strong => write!(f, "Strong"),
        }
    }
}

/// Result of scoring a candidate password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub verdict: Verdict,
    pub score: usize,
    pub message: String,
    pub tips: Vec<String>,
    pub deny_listed: bool,
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub use_digits: bool,
    pub use_special: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            use_digits: true,
            use_special: true,
        }
    }
}

/// What happened on a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutcome {
    /// The email was known and the password matched the stored one.
    pub authenticated: bool,
    /// The pair was written to the credential file.
    pub remembered: bool,
    /// The email was new to the session history.
    pub new_identifier: bool,
}
