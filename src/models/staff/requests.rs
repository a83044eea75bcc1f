use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 教职工列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct StaffListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub department_id: Option<i64>,
    pub search: Option<String>,
}

// 教职工档案创建请求
#[derive(Debug, Deserialize)]
pub struct CreateStaffRequest {
    pub user_id: i64,
    pub staff_number: String,
    /// YYYY-MM-DD
    pub date_employed: chrono::NaiveDate,
}

// 教职工列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct StaffListQuery {
    pub page: i64,
    pub size: i64,
    pub department_id: Option<i64>,
    pub search: Option<String>,
}
