// src/generators/password.rs
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::models::PasswordGenerationOptions;

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid password length: {0} (must be at least 1)")]
    InvalidLength(usize),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

// Letters are always present, so the pool can never be empty.
pub fn character_pool(options: &PasswordGenerationOptions) -> Vec<u8> {
    let mut chars = Vec::with_capacity(LETTERS.len() + DIGITS.len() + PUNCTUATION.len());
    chars.extend_from_slice(LETTERS);
    if options.use_digits {
        chars.extend_from_slice(DIGITS);
    }
    if options.use_special {
        chars.extend_from_slice(PUNCTUATION);
    }
    chars
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        self.generate_with_rng(options, &mut rand::thread_rng())
    }

    /// Draws `options.length` characters uniformly, with replacement, from the pool.
    /// No character class is guaranteed to appear.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        options: &PasswordGenerationOptions,
        rng: &mut R,
    ) -> Result<String> {
        if options.length == 0 {
            return Err(GeneratorError::InvalidLength(options.length));
        }

        let pool = character_pool(options);
        let mut password = String::with_capacity(options.length);
        for _ in 0..options.length {
            if let Some(&b) = pool.choose(&mut *rng) {
                password.push(b as char);
            }
        }

        log::debug!(
            "Generated password of length {} (digits: {}, special: {})",
            options.length,
            options.use_digits,
            options.use_special
        );
        Ok(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn options(length: usize, use_digits: bool, use_special: bool) -> PasswordGenerationOptions {
        PasswordGenerationOptions { length, use_digits, use_special }
    }

    #[test]
    fn output_has_requested_length() {
        let generator = PasswordGenerator::new();
        for length in [1, 2, 8, 12, 20, 64, 500] {
            let password = generator.generate_password(&options(length, true, true)).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn every_character_comes_from_the_pool() {
        let generator = PasswordGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);
        for (digits, special) in [(true, true), (true, false), (false, true), (false, false)] {
            let opts = options(200, digits, special);
            let pool = character_pool(&opts);
            let password = generator.generate_with_rng(&opts, &mut rng).unwrap();
            assert!(password.bytes().all(|b| pool.contains(&b)), "{}", password);
        }
    }

    #[test]
    fn letters_only_when_both_classes_disabled() {
        let generator = PasswordGenerator::new();
        let password = generator.generate_password(&options(100, false, false)).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn pool_sizes() {
        assert_eq!(character_pool(&options(1, false, false)).len(), 52);
        assert_eq!(character_pool(&options(1, true, false)).len(), 62);
        assert_eq!(character_pool(&options(1, true, true)).len(), 94);
        assert_eq!(PUNCTUATION.len(), 32);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let generator = PasswordGenerator::new();
        let opts = PasswordGenerationOptions::default();
        let a = generator.generate_with_rng(&opts, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generator.generate_with_rng(&opts, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
    }

    #[test]
    fn zero_length_is_rejected() {
        let err = PasswordGenerator::new().generate_password(&options(0, true, true)).unwrap_err();
        assert_eq!(err, GeneratorError::InvalidLength(0));
    }
}
