pub mod count;
pub mod create;
pub mod list;
pub mod manage;
pub mod read;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notifications::requests::{
    CreateNotificationRequest, NotificationListParams, UpdateNotificationRequest,
};
use crate::storage::Storage;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 当前用户的通知列表
    pub async fn list_notifications(
        &self,
        params: NotificationListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_notifications(self, params, request).await
    }

    // 未读数
    pub async fn unread_count(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        count::unread_count(self, request).await
    }

    // 标记单条已读
    pub async fn mark_read(
        &self,
        notification_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        read::mark_read(self, notification_id, request).await
    }

    // 全部标记已读
    pub async fn mark_all_read(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        read::mark_all_read(self, request).await
    }

    // 管理端定向发通知
    pub async fn create_notification(
        &self,
        notification_data: CreateNotificationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_notification(self, notification_data, request).await
    }

    // 查看单条通知
    pub async fn get_notification(
        &self,
        notification_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::get_notification(self, notification_id, request).await
    }

    // 修改通知内容
    pub async fn update_notification(
        &self,
        notification_id: i64,
        update_data: UpdateNotificationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_notification(self, notification_id, update_data, request).await
    }

    // 删除通知
    pub async fn delete_notification(
        &self,
        notification_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_notification(self, notification_id, request).await
    }
}
