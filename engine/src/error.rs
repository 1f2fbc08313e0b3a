use std::fmt;

pub type FixtureResult<T = (), E = FixtureError> = Result<T, E>;

#[derive(Debug)]
pub enum FixtureError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidConfig(ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MaxTypesOutOfRange(u8),
    ZeroMaxAmount,
    DuplicateToken(String),
}

impl From<std::io::Error> for FixtureError {
    fn from(value: std::io::Error) -> Self {
        FixtureError::Io(value)
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(value: serde_json::Error) -> Self {
        FixtureError::Json(value)
    }
}

impl From<ConfigError> for FixtureError {
    fn from(value: ConfigError) -> Self {
        FixtureError::InvalidConfig(value)
    }
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Io(e) => write!(f, "io error: {e}"),
            FixtureError::Json(e) => write!(f, "json error: {e}"),
            FixtureError::InvalidConfig(e) => {
                write!(f, "invalid config: {e}")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MaxTypesOutOfRange(max_types) => write!(
                f,
                "max reward token types must be 1 or 2, got {max_types}"
            ),
            ConfigError::ZeroMaxAmount => {
                write!(f, "max reward amount must be at least 1")
            }
            ConfigError::DuplicateToken(address) => {
                write!(f, "both pools use token {address}")
            }
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Io(e) => Some(e),
            FixtureError::Json(e) => Some(e),
            FixtureError::InvalidConfig(e) => Some(e),
        }
    }
}

impl std::error::Error for ConfigError {}
