use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeedbackService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_feedback(
    service: &FeedbackService,
    feedback_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_admin(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    match storage.delete_feedback(feedback_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Feedback deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FeedbackNotFound,
            "Feedback not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Feedback deletion failed: {e}"),
            )),
        ),
    }
}
