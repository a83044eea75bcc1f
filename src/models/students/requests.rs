use super::entities::{SchoolYear, StudentStatus};
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 学生列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<StudentStatus>,
    pub year: Option<SchoolYear>,
    pub program_id: Option<i64>,
    pub hall_id: Option<i64>,
    pub search: Option<String>,
}

// 学生档案创建请求，user_id 指向已注册的用户
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub user_id: i64,
    pub index_number: String,
    /// YYYY-MM-DD
    pub date_admitted: chrono::NaiveDate,
    pub year: SchoolYear,
    pub program_id: Option<i64>,
    pub hall_id: Option<i64>,
}

// 学生档案更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub status: Option<StudentStatus>,
    pub year: Option<SchoolYear>,
    pub program_id: Option<i64>,
    pub hall_id: Option<i64>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct StudentListQuery {
    pub page: i64,
    pub size: i64,
    pub status: Option<StudentStatus>,
    pub year: Option<SchoolYear>,
    pub program_id: Option<i64>,
    pub hall_id: Option<i64>,
    pub search: Option<String>,
}
