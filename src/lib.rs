// src/lib.rs
//! Password strength checks, password generation and a plaintext
//! credential file for a small login demo.
//!
//! Stored secrets are not encrypted or hashed.

pub mod core;
pub mod generators;
pub mod models;
pub mod store;
pub mod strength;

pub use crate::core::{Config, LoginSession};
pub use generators::PasswordGenerator;
pub use models::{LoginOutcome, PasswordGenerationOptions, StrengthReport, Verdict};
pub use store::{CredentialStore, Credentials, StoreError};
pub use strength::{check_password_strength, StrengthPolicy};
