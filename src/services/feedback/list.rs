use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeedbackService;
use crate::middlewares::RequireJWT;
use crate::models::feedback::responses::FeedbackListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_feedback(
    service: &FeedbackService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(user_id) => user_id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized access, please login",
            )));
        }
    };

    match storage.list_feedback_for_user(user_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FeedbackListResponse { items },
            "Feedback retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list feedback: {e}"),
            )),
        ),
    }
}
