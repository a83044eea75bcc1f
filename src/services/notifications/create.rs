use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_notification(
    service: &NotificationService,
    notification_data: CreateNotificationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_admin(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    // 接收者必须存在
    if let Some(response) =
        crate::services::ensure_exists(
            storage.get_user_by_id(notification_data.user_id).await,
            ErrorCode::UserNotFound,
            "Recipient user not found",
        )
    {
        return Ok(response);
    }

    match storage.create_notification(notification_data).await {
        Ok(notification) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(notification, "通知发送成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Notification creation failed: {e}"),
            )),
        ),
    }
}
