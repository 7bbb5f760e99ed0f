// src/generators/mod.rs
mod password;

pub use password::{character_pool, GeneratorError, PasswordGenerator, LETTERS, DIGITS, PUNCTUATION};
