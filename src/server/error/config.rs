use thiserror::Error;

/// Startup configuration failures.
///
/// These are only produced while reading the environment, the binary prints them and exits
/// before the router is built. Should one ever reach a handler, [`Error`](super::Error) turns
/// it into a generic 500.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl ConfigError {
    /// Name of the environment variable at fault
    pub fn var(&self) -> &str {
        match self {
            Self::MissingEnvVar(var) | Self::InvalidEnvValue { var, .. } => var,
        }
    }
}
