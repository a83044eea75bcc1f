use serde::{Deserialize, Serialize};

// 生成后的报表快照，data 为 JSON 内容
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub report_type: String,
    pub data: Option<serde_json::Value>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
