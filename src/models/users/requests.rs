use super::entities::{Sex, UserRole, UserStatus};
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 用户查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct UserListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub department_id: Option<i64>,
    pub search: Option<String>,
}

// 用户创建请求
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    /// YYYY-MM-DD
    pub date_of_birth: chrono::NaiveDate,
    pub sex: Sex,
    pub address: String,
    pub image_url: Option<String>,
    pub department_id: Option<i64>,
}

// 用户更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub sex: Option<Sex>,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub department_id: Option<i64>,
}

// 用户列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub page: i64,
    pub size: i64,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub department_id: Option<i64>,
    pub search: Option<String>,
}
