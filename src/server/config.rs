use std::str::FromStr;

use crate::server::{
    error::config::ConfigError,
    model::favorite::{FavoriteMatching, FavoritePolicy, TargetDeletePolicy},
};

static DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub favorite_policy: FavoritePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source, `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DB_CONNECTION_STRING")
            .ok_or_else(|| ConfigError::MissingEnvVar("DB_CONNECTION_STRING".to_string()))?;

        Ok(Self {
            database_url,
            port: parse_or_default(&lookup, "PORT", DEFAULT_PORT)?,
            favorite_policy: FavoritePolicy {
                matching: parse_or_default(
                    &lookup,
                    "FAVORITES_MATCHING",
                    FavoriteMatching::default(),
                )?,
                on_target_delete: parse_or_default(
                    &lookup,
                    "FAVORITES_ON_TARGET_DELETE",
                    TargetDeletePolicy::default(),
                )?,
            },
        })
    }
}

fn parse_or_default<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: ToString,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}
