use serde::Deserialize;

// 发送反馈请求
#[derive(Debug, Deserialize)]
pub struct CreateFeedbackRequest {
    pub recipient_id: i64,
    pub title: String,
    pub content: String,
}
