// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::models::PasswordGenerationOptions;

// Character pools, fixed literal order
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

// Accepted length bounds. Out-of-range lengths are rejected, never clamped.
pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("password length must be between {MIN_LENGTH} and {MAX_LENGTH} characters, got {0}")]
    LengthOutOfRange(usize),

    #[error("at least one character set must be selected")]
    NoCharacterSets,
}

/// Generate a random password of exactly `options.length` characters,
/// containing at least one character from every enabled character set and
/// none from any disabled set. Drawn from the OS entropy source, so two
/// calls with identical options are independent.
pub fn generate_password(options: &PasswordGenerationOptions) -> Result<String, GeneratorError> {
    if options.length < MIN_LENGTH || options.length > MAX_LENGTH {
        return Err(GeneratorError::LengthOutOfRange(options.length));
    }

    // Enabled pools in fixed order: uppercase, lowercase, digits, symbols
    let mut pools: Vec<&[u8]> = Vec::with_capacity(4);
    if options.include_uppercase {
        pools.push(UPPERCASE);
    }
    if options.include_lowercase {
        pools.push(LOWERCASE);
    }
    if options.include_numbers {
        pools.push(DIGITS);
    }
    if options.include_symbols {
        pools.push(SYMBOLS);
    }

    if pools.is_empty() {
        return Err(GeneratorError::NoCharacterSets);
    }

    // OsRng is a CSPRNG; a seeded generator would make output predictable
    let mut rng = OsRng;

    // One character from each enabled pool, so every set is represented.
    // MIN_LENGTH >= the number of pools, so this never overshoots.
    let mut password: Vec<u8> = Vec::with_capacity(options.length);
    for pool in &pools {
        password.push(pool[rng.gen_range(0..pool.len())]);
    }

    // Fill the remaining positions from the combined alphabet
    let all_chars: Vec<u8> = pools.concat();
    while password.len() < options.length {
        password.push(all_chars[rng.gen_range(0..all_chars.len())]);
    }

    // Fisher-Yates shuffle so the per-set characters don't sit at the front
    password.shuffle(&mut rng);

    Ok(password.iter().map(|&b| b as char).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(
        length: usize,
        upper: bool,
        lower: bool,
        numbers: bool,
        symbols: bool,
    ) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
        }
    }

    #[test]
    fn exact_length() {
        for length in [4, 12, 33, 64] {
            let password = generate_password(&options(length, true, true, true, true)).unwrap();
            assert_eq!(password.len(), length);
        }
    }

    #[test]
    fn every_enabled_set_is_represented() {
        for _ in 0..50 {
            let password = generate_password(&options(4, true, true, true, true)).unwrap();
            assert!(password.bytes().any(|b| UPPERCASE.contains(&b)));
            assert!(password.bytes().any(|b| LOWERCASE.contains(&b)));
            assert!(password.bytes().any(|b| DIGITS.contains(&b)));
            assert!(password.bytes().any(|b| SYMBOLS.contains(&b)));
        }
    }

    #[test]
    fn disabled_sets_never_appear() {
        for _ in 0..50 {
            let password = generate_password(&options(16, false, true, false, false)).unwrap();
            assert!(password.bytes().all(|b| LOWERCASE.contains(&b)));
        }

        let password = generate_password(&options(16, true, false, true, false)).unwrap();
        assert!(password
            .bytes()
            .all(|b| UPPERCASE.contains(&b) || DIGITS.contains(&b)));
    }

    #[test]
    fn length_equal_to_pool_count_gives_one_char_per_pool() {
        let password = generate_password(&options(4, true, true, true, true)).unwrap();
        assert_eq!(password.bytes().filter(|b| UPPERCASE.contains(b)).count(), 1);
        assert_eq!(password.bytes().filter(|b| LOWERCASE.contains(b)).count(), 1);
        assert_eq!(password.bytes().filter(|b| DIGITS.contains(b)).count(), 1);
        assert_eq!(password.bytes().filter(|b| SYMBOLS.contains(b)).count(), 1);
    }

    #[test]
    fn single_set_at_minimum_length_succeeds() {
        let password = generate_password(&options(4, true, false, false, false)).unwrap();
        assert_eq!(password.len(), 4);
        assert!(password.bytes().all(|b| UPPERCASE.contains(&b)));
    }

    #[test]
    fn length_below_minimum_is_rejected() {
        let err = generate_password(&options(3, true, true, true, true)).unwrap_err();
        assert_eq!(err, GeneratorError::LengthOutOfRange(3));
    }

    #[test]
    fn length_above_maximum_is_rejected() {
        let err = generate_password(&options(65, true, true, true, true)).unwrap_err();
        assert_eq!(err, GeneratorError::LengthOutOfRange(65));
    }

    #[test]
    fn no_character_sets_is_rejected() {
        let err = generate_password(&options(8, false, false, false, false)).unwrap_err();
        assert_eq!(err, GeneratorError::NoCharacterSets);
    }

    #[test]
    fn successive_calls_differ() {
        // 32 characters over a 88-symbol alphabet; a collision here would
        // point at a broken entropy source
        let opts = options(32, true, true, true, true);
        let first = generate_password(&opts).unwrap();
        let second = generate_password(&opts).unwrap();
        assert_ne!(first, second);
    }
}
