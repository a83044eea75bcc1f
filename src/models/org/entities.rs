use serde::{Deserialize, Serialize};

// 院系
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    /// 系主任的教职工档案 id
    pub head_id: Option<i64>,
}

// 专业（培养计划）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub department_id: Option<i64>,
    pub duration_semesters: i32,
}

// 学生宿舍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hall {
    pub id: i64,
    pub name: String,
}
