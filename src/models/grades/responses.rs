use super::entities::Grade;
use crate::models::courses::entities::Course;
use serde::Serialize;

// 成绩响应，total 为计算字段
#[derive(Debug, Serialize)]
pub struct GradeResponse {
    #[serde(flatten)]
    pub grade: Grade,
    pub total: f64,
}

impl From<Grade> for GradeResponse {
    fn from(grade: Grade) -> Self {
        let total = grade.total();
        Self { grade, total }
    }
}

// 学生成绩单条目，附带课程信息
#[derive(Debug, Serialize)]
pub struct GradeWithCourse {
    #[serde(flatten)]
    pub grade: Grade,
    pub total: f64,
    pub course: Course,
}

// 学生成绩单
#[derive(Debug, Serialize)]
pub struct GradeListResponse {
    pub items: Vec<GradeWithCourse>,
}
