use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::OrgService;
use crate::models::org::requests::CreateHallRequest;
use crate::models::org::responses::HallListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_halls(service: &OrgService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_halls().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            HallListResponse { items },
            "Halls retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list halls: {e}"),
            )),
        ),
    }
}

pub async fn create_hall(
    service: &OrgService,
    hall_data: CreateHallRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_admin(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    if hall_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Hall name must not be empty",
        )));
    }

    match storage.create_hall(hall_data).await {
        Ok(hall) => Ok(HttpResponse::Created().json(ApiResponse::success(hall, "宿舍创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Hall creation failed: {e}"),
            )),
        ),
    }
}

pub async fn delete_hall(
    service: &OrgService,
    hall_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_admin(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    match storage.delete_hall(hall_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Hall deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::HallNotFound,
            "Hall not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Hall deletion failed: {e}"),
            )),
        ),
    }
}
