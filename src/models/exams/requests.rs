use super::entities::{ExamType, QuestionType};
use serde::Deserialize;

// 创建测验请求
#[derive(Debug, Deserialize)]
pub struct CreateExamRequest {
    pub course_id: i64,
    pub exam_name: String,
    pub exam_type: ExamType,
    /// epoch 秒
    pub start_at: i64,
    /// epoch 秒
    pub due_at: i64,
}

// 测验更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateExamRequest {
    pub exam_name: Option<String>,
    pub exam_type: Option<ExamType>,
    pub start_at: Option<i64>,
    pub due_at: Option<i64>,
}

// 添加题目请求，answers 同时建出候选答案
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default = "default_question_type")]
    pub question_type: QuestionType,
    pub question_text: String,
    pub answers: Vec<CreateAnswerRequest>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAnswerRequest {
    pub answer_text: String,
    #[serde(default)]
    pub is_correct: bool,
}

// 题干修改请求
#[derive(Debug, Deserialize)]
pub struct UpdateQuestionRequest {
    pub question_text: Option<String>,
}

// 学生提交单题作答
#[derive(Debug, Deserialize)]
pub struct SubmitResponseRequest {
    pub question_id: i64,
    pub selected_answer_id: i64,
}

fn default_question_type() -> QuestionType {
    QuestionType::Mcq
}
