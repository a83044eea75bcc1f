use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeedbackService;
use crate::middlewares::RequireJWT;
use crate::models::feedback::requests::CreateFeedbackRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_feedback(
    service: &FeedbackService,
    feedback_data: CreateFeedbackRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let author_id = match RequireJWT::extract_user_id(request) {
        Some(user_id) => user_id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized access, please login",
            )));
        }
    };

    if feedback_data.title.trim().is_empty() || feedback_data.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Title and content must not be empty",
        )));
    }

    // 接收者必须存在
    if let Some(response) =
        crate::services::ensure_exists(
            storage.get_user_by_id(feedback_data.recipient_id).await,
            ErrorCode::UserNotFound,
            "Recipient user not found",
        )
    {
        return Ok(response);
    }

    match storage.create_feedback(author_id, feedback_data).await {
        Ok(feedback) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(feedback, "反馈提交成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Feedback creation failed: {e}"),
            )),
        ),
    }
}
