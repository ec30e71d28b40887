//! TOML config file loading and creation.

use crate::schema::SherpaConfig;
use crate::validation;
use sherpa_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<SherpaConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config: SherpaConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    // Validate and warn on errors, but still return the parsed config
    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(SherpaConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/sherpa/config.toml`
/// On Linux: `~/.config/sherpa/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<SherpaConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(SherpaConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("sherpa").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = default_config_toml();

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Generate the default TOML config content with comments.
fn default_config_toml() -> String {
    r##"# Sherpa Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[agent]
base_url = "http://localhost:3001"
# addressing = "name"         # name, id
name = "CryptoSherpa"
# id = ""                     # agent UUID, required when addressing = "id"
# connect_timeout_secs = 10   # 1-300
# request_timeout_secs = 120  # 1-600

[chat]
# greeting = "Hello! I'm your crypto assistant. How can I help you today?"
# display_name = "User"
# room = ""                   # optional room id sent with each message

[logging]
# level = "info"              # trace, debug, info, warn, error
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_nonexistent_returns_file_not_found() {
        let result = load_from_path(Path::new("/tmp/nonexistent_sherpa_config.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_valid_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[agent]
base_url = "https://agents.example.com"
name = "Sage"

[chat]
display_name = "Trader"
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.agent.base_url, "https://agents.example.com");
        assert_eq!(config.agent.name, "Sage");
        assert_eq!(config.chat.display_name, "Trader");
        // Defaults preserved
        assert_eq!(config.agent.connect_timeout_secs, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn load_invalid_toml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let result = load_from_path(&path);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_config_with_invalid_values_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[agent]
base_url = "gopher://old.example.com"
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        // Should fall back to default since validation fails
        assert_eq!(config.agent.base_url, "http://localhost:3001");
    }

    #[test]
    fn create_and_load_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sherpa").join("config.toml");

        create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.agent.name, "CryptoSherpa");
        assert_eq!(config.agent.base_url, "http://localhost:3001");
    }

    #[test]
    fn default_config_toml_is_valid() {
        let content = default_config_toml();
        let config: SherpaConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.agent.name, "CryptoSherpa");
    }

    #[test]
    fn default_config_path_is_reasonable() {
        // This may not work in all CI environments, but should work locally
        if let Ok(path) = default_config_path() {
            let path_str = path.to_string_lossy();
            assert!(path_str.contains("sherpa"));
            assert!(path_str.ends_with("config.toml"));
        }
    }
}
