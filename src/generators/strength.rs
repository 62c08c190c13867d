// src/generators/strength.rs
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl std::fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasswordStrength::VeryWeak => write!(f, "Very Weak"),
            PasswordStrength::Weak => write!(f, "Weak"),
            PasswordStrength::Medium => write!(f, "Medium"),
            PasswordStrength::Strong => write!(f, "Strong"),
            PasswordStrength::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

// Score a password: one point each for length >= 8, length >= 12, and the
// presence of uppercase, lowercase, digit, and symbol characters
pub fn password_score(password: &str) -> u8 {
    let length = password.chars().count();

    let mut score = 0;
    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 1;
    }

    score
}

/// Classify a password into a strength label from its score. Total over all
/// inputs; the empty string rates Very Weak.
pub fn analyze_password_strength(password: &str) -> PasswordStrength {
    let length = password.chars().count();
    let score = password_score(password);

    if length < 4 || score < 2 {
        PasswordStrength::VeryWeak
    } else if score < 4 {
        PasswordStrength::Weak
    } else if score < 5 {
        PasswordStrength::Medium
    } else if score < 7 {
        PasswordStrength::Strong
    } else {
        PasswordStrength::VeryStrong
    }
}
