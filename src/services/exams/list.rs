use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::exams::responses::ExamListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_exams_by_course(
    service: &ExamService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(response) =
        crate::services::ensure_exists(
            storage.get_course_by_id(course_id).await,
            ErrorCode::CourseNotFound,
            "Course not found",
        )
    {
        return Ok(response);
    }

    match storage.list_exams_by_course(course_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ExamListResponse { items },
            "Exam list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list exams: {e}"),
            )),
        ),
    }
}
