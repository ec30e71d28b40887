//! Full configuration validation.
//!
//! Validates the endpoint address, addressing style, timeout ranges, and
//! chat/logging fields, collecting all errors into one report.

use crate::schema::SherpaConfig;
use sherpa_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SherpaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Endpoint address
    if !config.agent.base_url.starts_with("http://")
        && !config.agent.base_url.starts_with("https://")
    {
        errors.push(format!(
            "agent.base_url must start with http:// or https:// (got '{}')",
            config.agent.base_url
        ));
    }

    // Addressing style and its required field
    match config.agent.addressing.as_str() {
        "name" => {
            if config.agent.name.trim().is_empty() {
                errors.push("agent.name must not be empty when addressing = \"name\"".into());
            }
        }
        "id" => {
            if uuid::Uuid::parse_str(&config.agent.id).is_err() {
                errors.push(format!(
                    "agent.id must be a valid UUID when addressing = \"id\" (got '{}')",
                    config.agent.id
                ));
            }
        }
        other => {
            errors.push(format!(
                "agent.addressing must be \"name\" or \"id\" (got '{other}')"
            ));
        }
    }

    // Timeout ranges
    validate_range(
        &mut errors,
        "agent.connect_timeout_secs",
        config.agent.connect_timeout_secs,
        1,
        300,
    );
    validate_range(
        &mut errors,
        "agent.request_timeout_secs",
        config.agent.request_timeout_secs,
        1,
        600,
    );

    // Chat
    if config.chat.greeting.trim().is_empty() {
        errors.push("chat.greeting must not be empty".into());
    }
    if config.chat.display_name.trim().is_empty() {
        errors.push("chat.display_name must not be empty".into());
    }

    // Logging
    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
    if !LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(format!(
            "logging.level must be one of {LEVELS:?} (got '{}')",
            config.logging.level
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, field: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{field} must be between {min} and {max} (got {value})"));
    }
}
