use super::entities::Student;
use crate::models::common::PaginationInfo;
use crate::models::users::entities::User;
use serde::Serialize;

// 学生档案响应，附带账号信息
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub student: Student,
    pub user: User,
}

// 学生列表响应
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub items: Vec<StudentResponse>,
    pub pagination: PaginationInfo,
}
