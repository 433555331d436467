use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersonaError {
    #[error("Unknown target archetype: {0}")]
    UnknownTarget(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Custom(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PersonaError>;
