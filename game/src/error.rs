use backend::BackendError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("reading settings failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing settings failed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Everything that can stop the game from starting.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Game initialization failure: {0}")]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
