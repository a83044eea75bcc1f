use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::exams::requests::{CreateQuestionRequest, UpdateQuestionRequest};
use crate::models::exams::responses::QuestionListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_question(
    service: &ExamService,
    exam_id: i64,
    question_data: CreateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_staff(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    // 单选题至少两个选项且恰好一个正确答案
    if question_data.answers.len() < 2 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "A question needs at least two answer options",
        )));
    }
    let correct_count = question_data
        .answers
        .iter()
        .filter(|answer| answer.is_correct)
        .count();
    if correct_count != 1 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Exactly one answer option must be marked correct",
        )));
    }

    if let Some(response) =
        crate::services::ensure_exists(
            storage.get_exam_by_id(exam_id).await,
            ErrorCode::ExamNotFound,
            "Exam not found",
        )
    {
        return Ok(response);
    }

    match storage.create_question(exam_id, question_data).await {
        Ok(question) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(question, "题目创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Question creation failed: {e}"),
            )),
        ),
    }
}

pub async fn list_questions(
    service: &ExamService,
    exam_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(response) =
        crate::services::ensure_exists(
            storage.get_exam_by_id(exam_id).await,
            ErrorCode::ExamNotFound,
            "Exam not found",
        )
    {
        return Ok(response);
    }

    match storage.list_questions_by_exam(exam_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuestionListResponse { items },
            "Questions retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list questions: {e}"),
            )),
        ),
    }
}

pub async fn update_question(
    service: &ExamService,
    question_id: i64,
    update_data: UpdateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_staff(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    match storage.update_question(question_id, update_data).await {
        Ok(Some(question)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(question, "题目更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "Question not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Question update failed: {e}"),
            )),
        ),
    }
}

pub async fn delete_question(
    service: &ExamService,
    question_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_staff(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    match storage.delete_question(question_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Question deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "Question not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Question deletion failed: {e}"),
            )),
        ),
    }
}
