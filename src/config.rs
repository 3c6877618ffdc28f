pub use crate::entrypoint::Environment;

/// Logical name of the table that receives processed records, used when the
/// deployment does not override it.
const DEFAULT_PROCESSED_DATA_TABLE: &str = "processed-data";

/// The configuration parameters for the application.
///
/// These are pulled from environment variables, which is how the deployment
/// framework populates the lambda (credentials, table name, region).
#[derive(Debug, Clone)]
pub struct Config {
    /// The DynamoDB table that receives processed records
    pub processed_data_table: String,

    /// The environment we are in
    pub environment: Environment,
}

impl Config {
    pub fn new(processed_data_table: &str, environment: Environment) -> Self {
        Config {
            processed_data_table: processed_data_table.to_string(),
            environment,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let processed_data_table = std::env::var("PROCESSED_DATA_TABLE")
            .unwrap_or_else(|_| DEFAULT_PROCESSED_DATA_TABLE.to_string());
        let environment = Environment::new_or_prod();
        Ok(Config::new(processed_data_table.as_str(), environment))
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn test_table_defaults_to_processed_data() {
        let config = Config::from_env().unwrap();
        assert_eq!(config.processed_data_table, "processed-data");
    }
}
