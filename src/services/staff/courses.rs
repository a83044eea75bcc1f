use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn assign_course(
    service: &StaffService,
    staff_id: i64,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(response) =
        crate::services::ensure_exists(
            storage.get_staff_by_id(staff_id).await,
            ErrorCode::StaffNotFound,
            "Staff not found",
        )
    {
        return Ok(response);
    }

    if let Some(response) =
        crate::services::ensure_exists(
            storage.get_course_by_id(course_id).await,
            ErrorCode::CourseNotFound,
            "Course not found",
        )
    {
        return Ok(response);
    }

    match storage.assign_course_to_staff(staff_id, course_id).await {
        // 已经指派过视作冲突
        Ok(false) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::Conflict,
            "Course already assigned to this staff member",
        ))),
        Ok(true) => {
            Ok(HttpResponse::Created().json(ApiResponse::success_empty("授课指派成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Course assignment failed: {e}"),
            )),
        ),
    }
}

pub async fn list_courses(
    service: &StaffService,
    staff_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(response) =
        crate::services::ensure_exists(
            storage.get_staff_by_id(staff_id).await,
            ErrorCode::StaffNotFound,
            "Staff not found",
        )
    {
        return Ok(response);
    }

    match storage.list_courses_by_staff(staff_id).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            courses,
            "Assigned courses retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list assigned courses: {e}"),
            )),
        ),
    }
}
