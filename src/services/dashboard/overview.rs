use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use super::DashboardService;
use crate::middlewares::RequireJWT;
use crate::models::AppStartTime;
use crate::models::dashboard::responses::{AdminDashboard, StaffDashboard, StudentDashboard};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

const RECENT_ANNOUNCEMENTS: u64 = 5;

pub async fn overview(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (role, user_id) = match (
        RequireJWT::extract_user_role(request),
        RequireJWT::extract_user_id(request),
    ) {
        (Some(role), Some(user_id)) => (role, user_id),
        _ => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized access, please login",
            )));
        }
    };

    match role {
        UserRole::Admin => admin_overview(&storage, request).await,
        UserRole::Student => student_overview(&storage, user_id).await,
        UserRole::Teacher | UserRole::Staff => staff_overview(&storage, user_id).await,
    }
}

async fn admin_overview(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let counts = tokio::try_join!(
        storage.count_students(),
        storage.count_staff(),
        storage.count_courses(),
        storage.count_departments(),
        storage.list_recent_announcements(RECENT_ANNOUNCEMENTS),
    );

    let (total_students, total_staff, total_courses, total_departments, recent_announcements) =
        match counts {
            Ok(values) => values,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to build dashboard: {e}"),
                    )),
                );
            }
        };

    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| (chrono::Utc::now() - start.start_datetime).num_seconds())
        .unwrap_or_default();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AdminDashboard {
            total_students,
            total_staff,
            total_courses,
            total_departments,
            recent_announcements,
            uptime_seconds,
        },
        "Dashboard retrieved successfully",
    )))
}

async fn student_overview(storage: &Arc<dyn Storage>, user_id: i64) -> ActixResult<HttpResponse> {
    let student = match storage.get_student_by_user_id(user_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student record not found for current user",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to build dashboard: {e}"),
                )),
            );
        }
    };

    let parts = tokio::try_join!(
        storage.list_enrollments_by_student(student.id),
        storage.list_upcoming_exams_for_student(student.id, chrono::Utc::now().timestamp()),
        storage.count_unread_notifications(user_id),
        storage.list_recent_announcements(RECENT_ANNOUNCEMENTS),
    );

    match parts {
        Ok((enrollments, upcoming_exams, unread_notifications, recent_announcements)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StudentDashboard {
                    enrollments,
                    upcoming_exams,
                    unread_notifications,
                    recent_announcements,
                },
                "Dashboard retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to build dashboard: {e}"),
            )),
        ),
    }
}

async fn staff_overview(storage: &Arc<dyn Storage>, user_id: i64) -> ActixResult<HttpResponse> {
    // 没挂教职工档案的账号按零门课处理
    let course_count = match storage.get_staff_by_user_id(user_id).await {
        Ok(Some(staff)) => match storage.list_courses_by_staff(staff.id).await {
            Ok(courses) => courses.len() as u64,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to build dashboard: {e}"),
                    )),
                );
            }
        },
        Ok(None) => 0,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to build dashboard: {e}"),
                )),
            );
        }
    };

    let parts = tokio::try_join!(
        storage.count_unread_notifications(user_id),
        storage.list_recent_announcements(RECENT_ANNOUNCEMENTS),
    );

    match parts {
        Ok((unread_notifications, recent_announcements)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StaffDashboard {
                    course_count,
                    unread_notifications,
                    recent_announcements,
                },
                "Dashboard retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to build dashboard: {e}"),
            )),
        ),
    }
}
