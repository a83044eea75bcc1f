use super::entities::StaffMember;
use crate::models::common::PaginationInfo;
use crate::models::users::entities::User;
use serde::Serialize;

// 教职工档案响应，附带账号信息
#[derive(Debug, Serialize)]
pub struct StaffResponse {
    pub staff: StaffMember,
    pub user: User,
}

// 教职工列表响应
#[derive(Debug, Serialize)]
pub struct StaffListResponse {
    pub items: Vec<StaffResponse>,
    pub pagination: PaginationInfo,
}
