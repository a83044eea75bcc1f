use super::entities::Semester;
use crate::models::common::PaginationQuery;
use crate::models::students::entities::SchoolYear;
use serde::Deserialize;

// 课程列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct CourseListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub department_id: Option<i64>,
    pub year: Option<SchoolYear>,
    pub semester: Option<Semester>,
    pub search: Option<String>,
}

// 课程创建请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub code: String,
    pub department_id: i64,
    pub credits: i32,
    pub year: SchoolYear,
    pub semester: Semester,
}

// 课程更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub department_id: Option<i64>,
    pub credits: Option<i32>,
    pub year: Option<SchoolYear>,
    pub semester: Option<Semester>,
}

// 课表条目创建请求
#[derive(Debug, Deserialize)]
pub struct CreateScheduleRequest {
    pub day: String,
    /// HH:MM
    pub start_time: String,
    /// HH:MM
    pub end_time: String,
    pub location: String,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct CourseListQuery {
    pub page: i64,
    pub size: i64,
    pub department_id: Option<i64>,
    pub year: Option<SchoolYear>,
    pub semester: Option<Semester>,
    pub search: Option<String>,
}
