use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffService;
use crate::models::staff::requests::{StaffListParams, StaffListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_staff(
    service: &StaffService,
    params: StaffListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = StaffListQuery {
        page: params.pagination.page,
        size: params.pagination.size,
        department_id: params.department_id,
        search: params.search,
    };

    match storage.list_staff_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Staff list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list staff: {e}"),
            )),
        ),
    }
}
