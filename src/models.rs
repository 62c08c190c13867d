// src/models.rs
use serde::{Serialize, Deserialize};

use crate::generators::PasswordStrength;

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

// JSON envelope printed by `generate --json`
#[derive(Debug, Serialize)]
pub struct GenerationOutput {
    pub password: String,
    pub strength: PasswordStrength,
    pub score: u8,
}

// JSON envelope printed by `rate --json`
#[derive(Debug, Serialize)]
pub struct StrengthOutput {
    pub strength: PasswordStrength,
    pub score: u8,
}
