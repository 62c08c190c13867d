// src/cli/handlers.rs
use crate::generators::{analyze_password_strength, generate_password, password_score};
use crate::models::{GenerationOutput, PasswordGenerationOptions, StrengthOutput};

// Handlers for CLI commands
pub fn handle_generate(
    options: &PasswordGenerationOptions,
    count: usize,
    json: bool,
) -> anyhow::Result<()> {
    log::debug!("Generating {} password(s) with options: {:?}", count, options);

    for _ in 0..count {
        let password = generate_password(options)?;

        if json {
            let output = GenerationOutput {
                strength: analyze_password_strength(&password),
                score: password_score(&password),
                password,
            };
            println!("{}", serde_json::to_string(&output)?);
        } else {
            println!("{}", password);
        }
    }

    Ok(())
}

pub fn handle_rate(password: &str, json: bool) -> anyhow::Result<()> {
    let strength = analyze_password_strength(password);

    if json {
        let output = StrengthOutput {
            strength,
            score: password_score(password),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", strength);
    }

    Ok(())
}
