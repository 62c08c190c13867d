// src/cli/menu.rs
use console::style;
use inquire::{Confirm, Select, Text};

use crate::core::config::Config;
use crate::generators::{analyze_password_strength, generate_password, PasswordStrength};
use crate::models::PasswordGenerationOptions;

fn print_strength(password: &str) {
    let strength = analyze_password_strength(password);
    let label = strength.to_string();

    let styled = match strength {
        PasswordStrength::VeryWeak | PasswordStrength::Weak => style(label).red(),
        PasswordStrength::Medium => style(label).yellow(),
        PasswordStrength::Strong | PasswordStrength::VeryStrong => style(label).green(),
    };

    println!("Strength: {}", styled);
}

// Interactive front end. Typed lengths are clamped to 1-64 the way the
// original input field behaved; the generator itself still rejects
// anything below 4.
pub fn run_menu(config: &Config) -> anyhow::Result<()> {
    loop {
        let options = vec![
            "🔐  Generate secure password",
            "📊  Rate a password",
            "🚪  Exit",
        ];

        let choice = Select::new("What would you like to do?", options).prompt()?;

        match choice {
            "🔐  Generate secure password" => {
                let default_length = config.default_password_length.to_string();
                let length: usize = Text::new("Password length:")
                    .with_default(&default_length)
                    .prompt()
                    .and_then(|s| {
                        s.parse()
                            .map_err(|_| inquire::InquireError::Custom("Invalid number".into()))
                    })?;
                let length = length.clamp(1, 64);

                let include_uppercase = Confirm::new("Include uppercase letters?")
                    .with_default(true)
                    .prompt()?;

                let include_lowercase = Confirm::new("Include lowercase letters?")
                    .with_default(true)
                    .prompt()?;

                let include_numbers = Confirm::new("Include numbers?")
                    .with_default(true)
                    .prompt()?;

                let include_symbols = Confirm::new("Include symbols?")
                    .with_default(true)
                    .prompt()?;

                let options = PasswordGenerationOptions {
                    length,
                    include_uppercase,
                    include_lowercase,
                    include_numbers,
                    include_symbols,
                };

                match generate_password(&options) {
                    Ok(generated) => {
                        println!("\nGenerated Password: {}", generated);
                        print_strength(&generated);
                    }
                    Err(e) => {
                        eprintln!("❌ Failed to generate password: {}", e);
                    }
                }

                // Wait for user to press enter
                let _ = Text::new("Press enter to continue...").prompt();
            }
            "📊  Rate a password" => {
                let password = Text::new("Password to rate:").prompt()?;
                print_strength(&password);

                let _ = Text::new("Press enter to continue...").prompt();
            }
            "🚪  Exit" => {
                println!("Goodbye!");
                break;
            }
            _ => unreachable!(),
        }
    }

    Ok(())
}
