use crate::models::{service_catalog, ServiceOffering};
use axum::Json;

pub async fn list_services() -> Json<Vec<ServiceOffering>> {
    Json(service_catalog())
}
