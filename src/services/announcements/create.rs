use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::middlewares::RequireJWT;
use crate::models::announcements::requests::CreateAnnouncementRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_announcement(
    service: &AnnouncementService,
    announcement_data: CreateAnnouncementRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_staff(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    let author_id = match RequireJWT::extract_user_id(request) {
        Some(user_id) => user_id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized access, please login",
            )));
        }
    };

    if announcement_data.title.trim().is_empty() || announcement_data.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Title and content must not be empty",
        )));
    }

    // 定向公告的目标院系必须存在
    if let Some(target_id) = announcement_data.target_id
        && let Some(response) =
            crate::services::ensure_exists(
                storage.get_department_by_id(target_id).await,
                ErrorCode::DepartmentNotFound,
                "Target department not found",
            )
    {
        return Ok(response);
    }

    match storage
        .create_announcement(author_id, announcement_data)
        .await
    {
        Ok(announcement) => {
            tracing::info!("Announcement {} published by user {}", announcement.id, author_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(announcement, "公告发布成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Announcement creation failed: {e}"),
            )),
        ),
    }
}
