// src/strength.rs
//! Rule-based password strength scoring.
//!
//! A [`StrengthPolicy`] holds a deny-list of known-bad passwords and an
//! ordered list of [`Rule`]s. Each satisfied rule earns one point; the
//! verdict depends on how many rules were missed.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{StrengthReport, Verdict};

pub const COMMON_PASSWORD_MESSAGE: &str = "This password is too common. Choose a more unique one.";
pub const STRONG_MESSAGE: &str = "Strong Password!";
pub const MODERATE_MESSAGE: &str = "Moderate Password - Consider adding more security features.";

/// Passwords rejected regardless of composition.
pub const DEFAULT_DENY_LIST: &[&str] = &["password123", "abcdef", "assign03", "123", "admin", "maeyda"];

pub const MIN_LENGTH: usize = 8;
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

lazy_static! {
    static ref UPPERCASE: Regex = Regex::new(r"[A-Z]").expect("uppercase pattern");
    static ref LOWERCASE: Regex = Regex::new(r"[a-z]").expect("lowercase pattern");
    static ref DIGIT: Regex = Regex::new(r"[0-9]").expect("digit pattern");
    static ref SPECIAL: Regex = Regex::new(r"[!@#$%^&*]").expect("special pattern");
}

#[derive(Debug, Clone)]
pub enum Requirement {
    /// At least this many characters (Unicode scalar values).
    MinLength(usize),
    /// Every pattern must match somewhere in the candidate.
    AllOf(Vec<Regex>),
}

#[derive(Debug, Clone)]
pub struct Rule {
    requirement: Requirement,
    tip: String,
}

impl Rule {
    pub fn new(requirement: Requirement, tip: impl Into<String>) -> Self {
        Self { requirement, tip: tip.into() }
    }

    pub fn min_length(length: usize, tip: impl Into<String>) -> Self {
        Self::new(Requirement::MinLength(length), tip)
    }

    /// Build a rule from regex sources, all of which must match.
    pub fn patterns(patterns: &[&str], tip: impl Into<String>) -> Result<Self, regex::Error> {
        let compiled = patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(Requirement::AllOf(compiled), tip))
    }

    pub fn tip(&self) -> &str {
        &self.tip
    }

    pub fn is_satisfied(&self, candidate: &str) -> bool {
        match &self.requirement {
            Requirement::MinLength(n) => candidate.chars().count() >= *n,
            Requirement::AllOf(patterns) => patterns.iter().all(|re| re.is_match(candidate)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StrengthPolicy {
    deny_list: HashSet<String>,
    rules: Vec<Rule>,
}

impl Default for StrengthPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DENY_LIST.iter().map(|s| s.to_string()), default_rules())
    }
}

impl StrengthPolicy {
    pub fn new<I>(deny_list: I, rules: Vec<Rule>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            deny_list: deny_list.into_iter().collect(),
            rules,
        }
    }

    /// Add more known-bad passwords on top of the current deny-list.
    pub fn with_denied<I>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.deny_list.extend(extra);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_denied(&self, candidate: &str) -> bool {
        self.deny_list.contains(candidate)
    }

    pub fn evaluate(&self, candidate: &str) -> StrengthReport {
        if self.is_denied(candidate) {
            log::debug!("Candidate rejected by deny-list");
            return StrengthReport {
                verdict: Verdict::Weak,
                score: 0,
                message: COMMON_PASSWORD_MESSAGE.to_string(),
                tips: Vec::new(),
                deny_listed: true,
            };
        }

        let mut score = 0;
        let mut tips = Vec::new();
        for rule in &self.rules {
            if rule.is_satisfied(candidate) {
                score += 1;
            } else {
                tips.push(rule.tip.clone());
            }
        }

        let missed = self.rules.len() - score;
        let (verdict, message, tips) = match missed {
            0 => (Verdict::Strong, STRONG_MESSAGE.to_string(), Vec::new()),
            1 => (Verdict::Moderate, MODERATE_MESSAGE.to_string(), Vec::new()),
            _ => (Verdict::Weak, tips.join("\n"), tips),
        };

        StrengthReport {
            verdict,
            score,
            message,
            tips,
            deny_listed: false,
        }
    }
}

/// Length, mixed case, digit and special character, in that order.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::min_length(MIN_LENGTH, "Password should be at least 8 characters long."),
        Rule::new(
            Requirement::AllOf(vec![UPPERCASE.clone(), LOWERCASE.clone()]),
            "Include both uppercase and lowercase letters.",
        ),
        Rule::new(Requirement::AllOf(vec![DIGIT.clone()]), "Add at least one number (0-9)."),
        Rule::new(
            Requirement::AllOf(vec![SPECIAL.clone()]),
            format!("Include at least one special character ({}).", SPECIAL_CHARACTERS),
        ),
    ]
}

/// Parse a newline-separated deny-list. Blank lines and `#` comments are skipped.
pub fn parse_deny_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Score a password with the built-in policy, returning `(message, verdict)`.
pub fn check_password_strength(password: &str) -> (String, Verdict) {
    let report = StrengthPolicy::default().evaluate(password);
    (report.message, report.verdict)
}
