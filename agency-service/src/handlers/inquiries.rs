use crate::dtos::InquiryReceipt;
use crate::models::{Inquiry, INQUIRY_COLLECTION};
use crate::services::record_inquiry;
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{extract::State, Json};
use service_core::error::AppError;

pub async fn create_inquiry(
    State(state): State<AppState>,
    ValidatedJson(inquiry): ValidatedJson<Inquiry>,
) -> Result<Json<InquiryReceipt>, AppError> {
    match state.db.create_document(INQUIRY_COLLECTION, &inquiry).await {
        Ok(id) => {
            record_inquiry("received");
            tracing::info!(id = %id, service = %inquiry.service, "Inquiry received");
            Ok(Json(InquiryReceipt::received(id)))
        }
        Err(e) => {
            record_inquiry("failed");
            Err(e)
        }
    }
}
