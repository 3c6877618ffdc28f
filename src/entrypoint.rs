//! This module provides a standardized initialization process for the binary.
//! This is used to provide consistent behaviour with e.g. tracing configurations

use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// The current environment the application is running in
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, strum::Display, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// The handler is running on localhost
    Local,
}

/// An error which can occur when constructing an [Environment]
#[derive(Debug, Error)]
pub enum EnvironmentErr {
    /// A std::env::var error while reading the ENVIRONMENT var
    #[error("ENVIRONMENT could not be read: {0}")]
    VarErr(#[from] std::env::VarError),
    /// the input string value was not recognized as a valid env
    #[error("unrecognized environment value: {0}")]
    InvalidValue(#[from] strum::ParseError),
}

impl Environment {
    /// Attempt to construct a new [Environment] from the environment variables
    pub fn new_from_env() -> Result<Self, EnvironmentErr> {
        let value = std::env::var("ENVIRONMENT")?;
        Ok(Self::from_str(&value)?)
    }

    /// attempt to create a new [Environment] falling back to production if we fail to construct
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

/// unit struct which defines the behaviour for instantiation
#[derive(Debug)]
pub struct Entrypoint {
    env: Environment,
}

impl Default for Entrypoint {
    fn default() -> Self {
        Entrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// sentinel struct which guarantees that we called [Entrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl Entrypoint {
    /// create a new instance of [Self] from an input [Environment]
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint(())
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;
    use std::str::FromStr;

    #[test]
    fn test_environment_from_str() {
        assert!(matches!(
            Environment::from_str("production"),
            Ok(Environment::Production)
        ));
        assert!(matches!(
            Environment::from_str("develop"),
            Ok(Environment::Develop)
        ));
        assert!(matches!(Environment::from_str("local"), Ok(Environment::Local)));
        assert!(Environment::from_str("staging").is_err());
    }
}
