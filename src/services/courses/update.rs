use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::courses::requests::UpdateCourseRequest;
use crate::models::courses::responses::CourseResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_course(
    service: &CourseService,
    course_id: i64,
    update_data: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_staff(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    // 改课程代码时保持唯一
    if let Some(ref code) = update_data.code
        && let Ok(Some(existing)) = storage.get_course_by_code(code).await
        && existing.id != course_id
    {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::CourseCodeAlreadyExists,
            "Course code already exists",
        )));
    }

    if let Some(department_id) = update_data.department_id
        && let Some(response) =
            crate::services::ensure_exists(
                storage.get_department_by_id(department_id).await,
                ErrorCode::DepartmentNotFound,
                "Department not found",
            )
    {
        return Ok(response);
    }

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(CourseResponse { course }, "课程更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Course update failed: {e}"),
            )),
        ),
    }
}
