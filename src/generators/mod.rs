// src/generators/mod.rs
pub mod password;
pub mod strength;

pub use password::{generate_password, GeneratorError, MIN_LENGTH, MAX_LENGTH};
pub use strength::{analyze_password_strength, password_score, PasswordStrength};
