use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity io error: {0}")]
    Io(String),

    #[error("identity parse error: {0}")]
    Parse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SherpaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("agent error: {0}")]
    Agent(String),

    #[error("{0}")]
    Other(String),
}
