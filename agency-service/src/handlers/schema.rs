use crate::models::{render_schemas, schema_registry};
use axum::Json;
use serde_json::{Map, Value};
use service_core::error::AppError;

pub async fn get_schema() -> Result<Json<Map<String, Value>>, AppError> {
    Ok(Json(render_schemas(schema_registry())?))
}
