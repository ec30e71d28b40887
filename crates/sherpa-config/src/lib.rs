//! Sherpa configuration system.
//!
//! Provides TOML-based configuration for the agent endpoint, chat session,
//! and logging. All config sections use sensible defaults so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sherpa_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("agent endpoint: {}", config.agent.base_url);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{
    AgentConfig, ChatConfig, LoggingConfig, SherpaConfig, CONFIG_SCHEMA_VERSION, DEFAULT_GREETING,
};
pub use toml_loader::{create_default_config, default_config_path, load_from_path};

use sherpa_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<SherpaConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
