use super::entities::{Course, Schedule};
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 课程响应
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub course: Course,
}

// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub items: Vec<Course>,
    pub pagination: PaginationInfo,
}

// 课表响应
#[derive(Debug, Serialize)]
pub struct ScheduleListResponse {
    pub items: Vec<Schedule>,
}
