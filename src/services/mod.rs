use actix_web::{HttpRequest, HttpResponse};

use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub mod announcements;
pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod exams;
pub mod feedback;
pub mod grades;
pub mod notifications;
pub mod org;
pub mod reports;
pub mod staff;
pub mod students;
pub mod users;

pub use announcements::AnnouncementService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use dashboard::DashboardService;
pub use exams::ExamService;
pub use feedback::FeedbackService;
pub use grades::GradeService;
pub use notifications::NotificationService;
pub use org::OrgService;
pub use reports::ReportService;
pub use staff::StaffService;
pub use students::StudentService;
pub use users::UserService;

// 同一路径读写权限不同时，写操作在服务层做角色兜底
pub(crate) fn ensure_role(request: &HttpRequest, allowed: &[&UserRole]) -> Option<HttpResponse> {
    match RequireJWT::extract_user_role(request) {
        Some(role) if allowed.contains(&&role) => None,
        Some(_) => Some(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Insufficient permissions",
        ))),
        None => Some(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))),
    }
}

pub(crate) fn ensure_staff(request: &HttpRequest) -> Option<HttpResponse> {
    ensure_role(request, UserRole::staff_roles())
}

pub(crate) fn ensure_admin(request: &HttpRequest) -> Option<HttpResponse> {
    ensure_role(request, UserRole::admin_roles())
}

// 关联资源的存在性校验；查不到返回 404，查询本身失败返回 500 而不是 404
pub(crate) fn ensure_exists<T>(
    lookup: crate::errors::Result<Option<T>>,
    code: ErrorCode,
    message: &str,
) -> Option<HttpResponse> {
    match lookup {
        Ok(Some(_)) => None,
        Ok(None) => Some(HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))),
        Err(e) => Some(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Storage lookup failed: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SMSystemError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_existence_check_passes_when_found() {
        assert!(ensure_exists(Ok(Some(1)), ErrorCode::UserNotFound, "User not found").is_none());
    }

    #[test]
    fn test_existence_check_missing_is_404() {
        let response =
            ensure_exists::<i64>(Ok(None), ErrorCode::UserNotFound, "User not found").unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_existence_check_storage_error_is_500() {
        let response = ensure_exists::<i64>(
            Err(SMSystemError::database_operation("connection reset")),
            ErrorCode::UserNotFound,
            "User not found",
        )
        .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
