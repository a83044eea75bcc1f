use super::entities::Enrollment;
use crate::models::courses::entities::Course;
use serde::Serialize;

// 批量选课结果
#[derive(Debug, Serialize)]
pub struct EnrollResponse {
    pub enrolled: Vec<Enrollment>,
    /// 因已选过而被跳过的课程 id
    pub skipped: Vec<i64>,
}

// 单条选课记录，附带课程信息
#[derive(Debug, Serialize)]
pub struct EnrollmentWithCourse {
    pub enrollment: Enrollment,
    pub course: Course,
}

// 学生的选课列表
#[derive(Debug, Serialize)]
pub struct EnrollmentListResponse {
    pub items: Vec<EnrollmentWithCourse>,
}
