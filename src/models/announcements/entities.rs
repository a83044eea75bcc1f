use serde::{Deserialize, Serialize};

// 公告，target_id 为空表示全员可见，否则面向某个院系
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    pub author_id: i64,
    pub target_id: Option<i64>,
    pub title: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
