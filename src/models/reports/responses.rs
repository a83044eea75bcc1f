use crate::models::grades::responses::GradeWithCourse;
use crate::models::students::entities::Student;
use crate::models::users::entities::User;
use serde::Serialize;

// 学生学业报告
#[derive(Debug, Serialize)]
pub struct StudentAcademicReport {
    pub student: Student,
    pub user: User,
    pub grades: Vec<GradeWithCourse>,
    /// 各学期总分的平均值
    pub average_total: Option<f64>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
