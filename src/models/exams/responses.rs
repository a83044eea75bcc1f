use super::entities::{Answer, Exam, Question, StudentResponse};
use serde::Serialize;

// 测验响应
#[derive(Debug, Serialize)]
pub struct ExamResponse {
    pub exam: Exam,
}

// 测验列表响应
#[derive(Debug, Serialize)]
pub struct ExamListResponse {
    pub items: Vec<Exam>,
}

// 题目及其候选答案
#[derive(Debug, Serialize)]
pub struct QuestionWithAnswers {
    pub question: Question,
    pub answers: Vec<Answer>,
}

// 测验题目列表
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub items: Vec<QuestionWithAnswers>,
}

// 学生作答列表
#[derive(Debug, Serialize)]
pub struct ResponseListResponse {
    pub items: Vec<StudentResponse>,
}
