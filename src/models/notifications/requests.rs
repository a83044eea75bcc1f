use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 通知列表查询参数
#[derive(Debug, Deserialize)]
pub struct NotificationListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    /// 只看未读
    pub unread_only: Option<bool>,
}

// 发送通知请求
#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    pub user_id: i64,
    pub title: String,
    pub message: Option<String>,
}

// 通知内容修改请求
#[derive(Debug, Deserialize)]
pub struct UpdateNotificationRequest {
    pub title: Option<String>,
    pub message: Option<String>,
}
