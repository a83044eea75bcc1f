use super::entities::Feedback;
use serde::Serialize;

// 反馈列表响应
#[derive(Debug, Serialize)]
pub struct FeedbackListResponse {
    pub items: Vec<Feedback>,
}
