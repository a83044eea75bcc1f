use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StaffService;
use crate::models::staff::requests::CreateStaffRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_staff(
    service: &StaffService,
    staff_data: CreateStaffRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 对应账号必须存在
    match storage.get_user_by_id(staff_data.user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create staff: {e}"),
                )),
            );
        }
    }

    // 一个账号只能挂一份教职工档案
    if let Ok(Some(_)) = storage.get_staff_by_user_id(staff_data.user_id).await {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::Conflict,
            "Staff record already exists for this user",
        )));
    }

    match storage.create_staff(staff_data).await {
        Ok(staff) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(staff, "教职工档案创建成功")))
        }
        Err(e) => {
            let msg = format!("Staff creation failed: {e}");
            error!("{}", msg);
            // 工号唯一约束交给数据库兜底
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::StaffNumberAlreadyExists,
                    "Staff number already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
