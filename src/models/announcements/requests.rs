use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 公告列表查询参数
#[derive(Debug, Deserialize)]
pub struct AnnouncementListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub target_id: Option<i64>,
}

// 发布公告请求
#[derive(Debug, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub content: String,
    pub target_id: Option<i64>,
}
