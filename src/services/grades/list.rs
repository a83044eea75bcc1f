use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::grades::requests::GradeListParams;
use crate::models::grades::responses::{GradeListResponse, GradeResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_grades(
    service: &GradeService,
    params: GradeListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生过滤优先，带出课程信息
    if let Some(student_id) = params.student_id {
        return match storage.list_grades_by_student(student_id).await {
            Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                GradeListResponse { items },
                "Grades retrieved successfully",
            ))),
            Err(e) => Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list grades: {e}"),
                )),
            ),
        };
    }

    if let Some(enrollment_id) = params.enrollment_id {
        return match storage.list_grades_by_enrollment(enrollment_id).await {
            Ok(grades) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                grades
                    .into_iter()
                    .map(GradeResponse::from)
                    .collect::<Vec<_>>(),
                "Grades retrieved successfully",
            ))),
            Err(e) => Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list grades: {e}"),
                )),
            ),
        };
    }

    Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        "student_id or enrollment_id query parameter is required",
    )))
}
