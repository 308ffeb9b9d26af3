use crate::dtos::DatabaseReport;
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Database diagnostics.
///
/// Always answers 200: probe failures are reported in the `database` field
/// rather than as an HTTP error, so this does not distinguish "service up"
/// from "database reachable".
pub async fn test_database(State(state): State<AppState>) -> Json<DatabaseReport> {
    let status = state.db.status().await;
    Json(DatabaseReport::new(status, &state.config.database))
}
