use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::middlewares::RequireJWT;
use crate::models::notifications::requests::UpdateNotificationRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

// 收件人本人或管理员可以查看和删除
fn is_recipient_or_admin(request: &HttpRequest, recipient_id: i64) -> bool {
    match (
        RequireJWT::extract_user_id(request),
        RequireJWT::extract_user_role(request),
    ) {
        (Some(user_id), Some(role)) => user_id == recipient_id || role == UserRole::Admin,
        _ => false,
    }
}

pub async fn get_notification(
    service: &NotificationService,
    notification_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_notification_by_id(notification_id).await {
        Ok(Some(notification)) => {
            if !is_recipient_or_admin(request, notification.user_id) {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "Cannot view another user's notification",
                )));
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                notification,
                "Notification retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get notification: {e}"),
            )),
        ),
    }
}

pub async fn update_notification(
    service: &NotificationService,
    notification_id: i64,
    update_data: UpdateNotificationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_admin(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    match storage
        .update_notification(notification_id, update_data)
        .await
    {
        Ok(Some(notification)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(notification, "通知更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Notification update failed: {e}"),
            )),
        ),
    }
}

pub async fn delete_notification(
    service: &NotificationService,
    notification_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let notification = match storage.get_notification_by_id(notification_id).await {
        Ok(Some(notification)) => notification,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotificationNotFound,
                "Notification not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get notification: {e}"),
                )),
            );
        }
    };

    if !is_recipient_or_admin(request, notification.user_id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Cannot delete another user's notification",
        )));
    }

    match storage.delete_notification(notification_id).await {
        Ok(true) => Ok(
            HttpResponse::Ok().json(ApiResponse::success_empty("Notification deleted successfully"))
        ),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Notification deletion failed: {e}"),
            )),
        ),
    }
}
