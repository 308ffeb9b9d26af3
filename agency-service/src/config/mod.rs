use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct AgencyConfig {
    pub common: core_config::Config,
    pub database: DatabaseConfig,
}

/// Connection settings for the document store.
///
/// Both values are optional: a missing value leaves the service running with
/// an unconfigured database instead of failing startup.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: non_empty_env("DATABASE_URL"),
            name: non_empty_env("DATABASE_NAME"),
        }
    }

    pub fn url_is_set(&self) -> bool {
        self.url.is_some()
    }
}

impl AgencyConfig {
    pub fn load() -> Result<Self, AppError> {
        // Loads .env and APP__-prefixed settings
        let common_config = core_config::Config::load()?;

        Ok(AgencyConfig {
            common: common_config,
            database: DatabaseConfig::from_env(),
        })
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_count_as_missing() {
        env::set_var("AGENCY_TEST_BLANK", "   ");
        assert_eq!(non_empty_env("AGENCY_TEST_BLANK"), None);

        env::set_var("AGENCY_TEST_SET", " mongodb://localhost ");
        assert_eq!(
            non_empty_env("AGENCY_TEST_SET").as_deref(),
            Some("mongodb://localhost")
        );

        assert_eq!(non_empty_env("AGENCY_TEST_UNSET_KEY"), None);
    }

    #[test]
    fn default_database_config_is_unconfigured() {
        let config = DatabaseConfig::default();
        assert!(!config.url_is_set());
        assert!(config.name.is_none());
    }
}
