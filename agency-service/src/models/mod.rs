pub mod inquiry;
pub mod service_offering;

pub use inquiry::{Inquiry, INQUIRY_COLLECTION};
pub use service_offering::{service_catalog, ServiceOffering};

use serde_json::{Map, Value};
use service_core::error::AppError;
use utoipa::openapi::{schema::Schema, RefOr};
use utoipa::ToSchema;

/// Models exposed through `GET /schema`. New models must be added here.
pub fn schema_registry() -> Vec<(&'static str, RefOr<Schema>)> {
    vec![
        <Inquiry as ToSchema>::schema(),
        <ServiceOffering as ToSchema>::schema(),
    ]
}

/// Render the registry as a map of model name to JSON Schema.
pub fn render_schemas(
    registry: Vec<(&str, RefOr<Schema>)>,
) -> Result<Map<String, Value>, AppError> {
    let mut rendered = Map::new();

    for (name, schema) in registry {
        let value = serde_json::to_value(&schema).map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Failed to render schema {}: {}", name, e))
        })?;

        if rendered.insert(name.to_string(), value).is_some() {
            return Err(AppError::InternalError(anyhow::anyhow!(
                "Duplicate schema name: {}",
                name
            )));
        }
    }

    Ok(rendered)
}
