use serde::{Deserialize, Serialize};

// 选课记录，(student_id, course_id) 唯一
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub enrollment_date: chrono::NaiveDate,
}
