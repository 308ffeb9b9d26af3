use crate::config::DatabaseConfig;
use crate::services::DatabaseStatus;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct InquiryReceipt {
    pub status: String,
    pub id: String,
}

impl InquiryReceipt {
    pub fn received(id: String) -> Self {
        Self {
            status: "received".to_string(),
            id,
        }
    }
}

/// Body of `GET /test`.
///
/// A failed probe only carries `backend` and `database`; the configuration
/// fields are reported when the probe itself did not error.
#[derive(Debug, Serialize)]
pub struct DatabaseReport {
    pub backend: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<String>>,
}

impl DatabaseReport {
    pub fn new(status: DatabaseStatus, config: &DatabaseConfig) -> Self {
        let (database, connection_status, collections) = match status {
            DatabaseStatus::Connected(collections) => ("configured", "connected", collections),
            DatabaseStatus::Unconfigured => ("not-configured", "not connected", Vec::new()),
            DatabaseStatus::Error(message) => {
                return Self {
                    backend: "ok".to_string(),
                    database: format!("error: {}", message),
                    database_url: None,
                    database_name: None,
                    connection_status: None,
                    collections: None,
                };
            }
        };

        Self {
            backend: "ok".to_string(),
            database: database.to_string(),
            database_url: Some(url_state(config).to_string()),
            database_name: Some(
                config
                    .name
                    .clone()
                    .unwrap_or_else(|| "missing".to_string()),
            ),
            connection_status: Some(connection_status.to_string()),
            collections: Some(collections),
        }
    }
}

fn url_state(config: &DatabaseConfig) -> &'static str {
    if config.url_is_set() {
        "set"
    } else {
        "missing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn configured() -> DatabaseConfig {
        DatabaseConfig {
            url: Some("mongodb://localhost:27017".to_string()),
            name: Some("agency".to_string()),
        }
    }

    #[test]
    fn connected_report_lists_collections() {
        let report = DatabaseReport::new(
            DatabaseStatus::Connected(vec!["inquiry".to_string()]),
            &configured(),
        );

        assert_eq!(
            serde_json::to_value(report).unwrap(),
            json!({
                "backend": "ok",
                "database": "configured",
                "database_url": "set",
                "database_name": "agency",
                "connection_status": "connected",
                "collections": ["inquiry"],
            })
        );
    }

    #[test]
    fn unconfigured_report_flags_missing_settings() {
        let report = DatabaseReport::new(DatabaseStatus::Unconfigured, &DatabaseConfig::default());

        assert_eq!(
            serde_json::to_value(report).unwrap(),
            json!({
                "backend": "ok",
                "database": "not-configured",
                "database_url": "missing",
                "database_name": "missing",
                "connection_status": "not connected",
                "collections": [],
            })
        );
    }

    #[test]
    fn error_report_only_carries_message() {
        let report = DatabaseReport::new(
            DatabaseStatus::Error("connection refused".to_string()),
            &configured(),
        );

        assert_eq!(
            serde_json::to_value(report).unwrap(),
            json!({ "backend": "ok", "database": "error: connection refused" })
        );
    }
}
