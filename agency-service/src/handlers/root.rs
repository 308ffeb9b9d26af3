use crate::dtos::StatusMessage;
use axum::Json;

pub const STATUS_MESSAGE: &str = "Liteweb Agency API is running";

pub async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: STATUS_MESSAGE.to_string(),
    })
}
