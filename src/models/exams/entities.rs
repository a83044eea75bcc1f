use serde::{Deserialize, Serialize};

// 测验类型
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ExamType {
    Quiz,
    Midsem,
    Final,
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExamType::Quiz => write!(f, "quiz"),
            ExamType::Midsem => write!(f, "midsem"),
            ExamType::Final => write!(f, "final"),
        }
    }
}

impl std::str::FromStr for ExamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quiz" => Ok(ExamType::Quiz),
            "midsem" => Ok(ExamType::Midsem),
            "final" => Ok(ExamType::Final),
            _ => Err(format!("Invalid exam type: {s}")),
        }
    }
}

// 题目类型，目前只有单选
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Mcq,
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionType::Mcq => write!(f, "mcq"),
        }
    }
}

impl std::str::FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mcq" => Ok(QuestionType::Mcq),
            _ => Err(format!("Invalid question type: {s}")),
        }
    }
}

// 在线测验
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    pub course_id: i64,
    pub exam_name: String,
    pub exam_type: ExamType,
    pub start_at: i64, // 开放作答时间（秒级时间戳）
    pub due_at: i64,   // 截止时间（秒级时间戳）
}

// 测验题目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub exam_id: i64,
    pub question_type: QuestionType,
    pub question_text: String,
}

// 候选答案
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub answer_text: String,
    pub is_correct: bool,
}

// 学生作答记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentResponse {
    pub id: i64,
    pub student_id: i64,
    pub question_id: i64,
    pub selected_answer_id: i64,
    pub responded_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exam_type_round_trips_through_str() {
        for raw in ["quiz", "midsem", "final"] {
            let t: ExamType = raw.parse().unwrap();
            assert_eq!(t.to_string(), raw);
        }
    }
}
