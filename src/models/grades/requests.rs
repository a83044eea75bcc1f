use serde::Deserialize;

// 录入成绩请求
#[derive(Debug, Deserialize)]
pub struct CreateGradeRequest {
    pub enrollment_id: i64,
    pub year: i32,
    pub semester: i32,
    pub quiz: f64,
    pub assignment: f64,
    pub midsem: f64,
    pub exam: f64,
    pub letter_grade: Option<String>,
}

// 成绩列表查询参数，按学生或选课记录过滤
#[derive(Debug, Deserialize)]
pub struct GradeListParams {
    pub student_id: Option<i64>,
    pub enrollment_id: Option<i64>,
}

// 成绩更新请求，分项可单独修改
#[derive(Debug, Deserialize)]
pub struct UpdateGradeRequest {
    pub quiz: Option<f64>,
    pub assignment: Option<f64>,
    pub midsem: Option<f64>,
    pub exam: Option<f64>,
    pub letter_grade: Option<String>,
}
