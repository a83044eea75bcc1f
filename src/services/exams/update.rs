use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::exams::requests::UpdateExamRequest;
use crate::models::exams::responses::ExamResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_exam(
    service: &ExamService,
    exam_id: i64,
    update_data: UpdateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_staff(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    let existing = match storage.get_exam_by_id(exam_id).await {
        Ok(Some(exam)) => exam,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamNotFound,
                "Exam not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Exam update failed: {e}"),
                )),
            );
        }
    };

    // 更新后的时间窗口仍须有效
    let start_at = update_data.start_at.unwrap_or(existing.start_at);
    let due_at = update_data.due_at.unwrap_or(existing.due_at);
    if due_at <= start_at {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "due_at must be after start_at",
        )));
    }

    match storage.update_exam(exam_id, update_data).await {
        Ok(Some(exam)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(ExamResponse { exam }, "考试更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "Exam not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Exam update failed: {e}"),
            )),
        ),
    }
}
