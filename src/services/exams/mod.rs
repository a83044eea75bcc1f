pub mod answers;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod questions;
pub mod responses;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::exams::requests::{
    CreateAnswerRequest, CreateExamRequest, CreateQuestionRequest, SubmitResponseRequest,
    UpdateExamRequest, UpdateQuestionRequest,
};
use crate::storage::Storage;

pub struct ExamService {
    storage: Option<Arc<dyn Storage>>,
}

impl ExamService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建考试
    pub async fn create_exam(
        &self,
        exam_data: CreateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_exam(self, exam_data, request).await
    }

    // 获取考试
    pub async fn get_exam(&self, exam_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_exam(self, exam_id, request).await
    }

    // 某课程的考试列表
    pub async fn list_exams_by_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_exams_by_course(self, course_id, request).await
    }

    // 更新考试
    pub async fn update_exam(
        &self,
        exam_id: i64,
        update_data: UpdateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_exam(self, exam_id, update_data, request).await
    }

    // 删除考试
    pub async fn delete_exam(
        &self,
        exam_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_exam(self, exam_id, request).await
    }

    // 添加题目（连同候选答案）
    pub async fn create_question(
        &self,
        exam_id: i64,
        question_data: CreateQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::create_question(self, exam_id, question_data, request).await
    }

    // 考试的题目列表
    pub async fn list_questions(
        &self,
        exam_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::list_questions(self, exam_id, request).await
    }

    // 修改题干
    pub async fn update_question(
        &self,
        question_id: i64,
        update_data: UpdateQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::update_question(self, question_id, update_data, request).await
    }

    // 删除题目
    pub async fn delete_question(
        &self,
        question_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::delete_question(self, question_id, request).await
    }

    // 追加候选答案
    pub async fn create_answer(
        &self,
        question_id: i64,
        answer_data: CreateAnswerRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        answers::create_answer(self, question_id, answer_data, request).await
    }

    // 题目的候选答案列表
    pub async fn list_answers(
        &self,
        question_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        answers::list_answers(self, question_id, request).await
    }

    // 删除候选答案
    pub async fn delete_answer(
        &self,
        answer_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        answers::delete_answer(self, answer_id, request).await
    }

    // 学生作答
    pub async fn submit_response(
        &self,
        exam_id: i64,
        response_data: SubmitResponseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        responses::submit_response(self, exam_id, response_data, request).await
    }

    // 当前学生在该考试的作答记录
    pub async fn list_responses(
        &self,
        exam_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        responses::list_responses(self, exam_id, request).await
    }
}
