use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::exams::requests::CreateExamRequest;
use crate::models::exams::responses::ExamResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_exam(
    service: &ExamService,
    exam_data: CreateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_staff(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    if exam_data.due_at <= exam_data.start_at {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "due_at must be after start_at",
        )));
    }

    if let Some(response) =
        crate::services::ensure_exists(
            storage.get_course_by_id(exam_data.course_id).await,
            ErrorCode::CourseNotFound,
            "Course not found",
        )
    {
        return Ok(response);
    }

    match storage.create_exam(exam_data).await {
        Ok(exam) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(ExamResponse { exam }, "考试创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Exam creation failed: {e}"),
            )),
        ),
    }
}
