use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::models::announcements::requests::AnnouncementListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_announcements(
    service: &AnnouncementService,
    params: AnnouncementListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let page = params.pagination.page;
    let size = params.pagination.size;

    match storage
        .list_announcements(page, size, params.target_id)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Announcements retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list announcements: {e}"),
            )),
        ),
    }
}
