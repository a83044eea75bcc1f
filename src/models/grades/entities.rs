use serde::{Deserialize, Serialize};

// 成绩记录，按选课记录维度存储
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub enrollment_id: i64,
    /// 学年，如 2026
    pub year: i32,
    /// 第1或第2学期
    pub semester: i32,
    pub quiz: f64,
    pub assignment: f64,
    pub midsem: f64,
    pub exam: f64,
    pub letter_grade: Option<String>,
}

impl Grade {
    // 总分为各分项之和
    pub fn total(&self) -> f64 {
        self.quiz + self.assignment + self.midsem + self.exam
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_components() {
        let grade = Grade {
            id: 1,
            enrollment_id: 1,
            year: 2026,
            semester: 1,
            quiz: 8.5,
            assignment: 9.0,
            midsem: 18.0,
            exam: 52.5,
            letter_grade: None,
        };
        assert!((grade.total() - 88.0).abs() < f64::EPSILON);
    }
}
