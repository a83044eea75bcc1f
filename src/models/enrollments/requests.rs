use serde::Deserialize;

// 批量选课请求，已选过的课程直接跳过
#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub course_ids: Vec<i64>,
    /// YYYY-MM-DD，缺省为当天
    pub enrollment_date: Option<chrono::NaiveDate>,
}
