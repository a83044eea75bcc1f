use serde::{Deserialize, Serialize};

// 教职工档案，账号信息在 users 表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: i64,
    pub user_id: i64,
    pub staff_number: String,
    pub date_employed: chrono::DateTime<chrono::Utc>,
}
