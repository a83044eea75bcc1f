use serde::{Deserialize, Serialize};

// 反馈留言，点对点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub author_id: i64,
    pub recipient_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
