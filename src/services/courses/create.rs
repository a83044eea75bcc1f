use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::courses::responses::CourseResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_staff(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    // 开课院系必须存在
    match storage.get_department_by_id(course_data.department_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::DepartmentNotFound,
                "Department not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create course: {e}"),
                )),
            );
        }
    }

    // 课程代码唯一
    if let Ok(Some(_)) = storage.get_course_by_code(&course_data.code).await {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::CourseCodeAlreadyExists,
            "Course code already exists",
        )));
    }

    match storage.create_course(course_data).await {
        Ok(course) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(CourseResponse { course }, "课程创建成功"))),
        Err(e) => {
            error!("Course creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Course creation failed: {e}"),
                )),
            )
        }
    }
}
