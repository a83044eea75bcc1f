use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveTime;

use super::CourseService;
use crate::models::courses::requests::CreateScheduleRequest;
use crate::models::courses::responses::ScheduleListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_schedule(
    service: &CourseService,
    course_id: i64,
    schedule_data: CreateScheduleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_staff(request) {
        return Ok(response);
    }

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

    // 时间字段固定 HH:MM
    let start = NaiveTime::parse_from_str(&schedule_data.start_time, "%H:%M");
    let end = NaiveTime::parse_from_str(&schedule_data.end_time, "%H:%M");
    match (start, end) {
        (Ok(start), Ok(end)) if start < end => {}
        _ => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Schedule times must be HH:MM with start before end",
            )));
        }
    }

    match storage.create_schedule(course_id, schedule_data).await {
        Ok(schedule) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(schedule, "课表条目创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Schedule creation failed: {e}"),
            )),
        ),
    }
}

pub async fn list_schedules(
    service: &CourseService,
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

    match storage.list_schedules_by_course(course_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ScheduleListResponse { items },
            "Schedules retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list schedules: {e}"),
            )),
        ),
    }
}

pub async fn delete_schedule(
    service: &CourseService,
    schedule_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_staff(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    match storage.delete_schedule(schedule_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Schedule deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScheduleNotFound,
            "Schedule not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Schedule deletion failed: {e}"),
            )),
        ),
    }
}
