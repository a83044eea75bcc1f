use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::exams::requests::CreateAnswerRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_answer(
    service: &ExamService,
    question_id: i64,
    answer_data: CreateAnswerRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_staff(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    if answer_data.answer_text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Answer text cannot be empty",
        )));
    }

    if let Some(response) =
        crate::services::ensure_exists(
            storage.get_question_by_id(question_id).await,
            ErrorCode::QuestionNotFound,
            "Question not found",
        )
    {
        return Ok(response);
    }

    match storage.create_answer(question_id, answer_data).await {
        Ok(answer) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(answer, "候选答案添加成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Answer creation failed: {e}"),
            )),
        ),
    }
}

pub async fn list_answers(
    service: &ExamService,
    question_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(response) =
        crate::services::ensure_exists(
            storage.get_question_by_id(question_id).await,
            ErrorCode::QuestionNotFound,
            "Question not found",
        )
    {
        return Ok(response);
    }

    match storage.list_answers_by_question(question_id).await {
        Ok(answers) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            answers,
            "Answers retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list answers: {e}"),
            )),
        ),
    }
}

pub async fn delete_answer(
    service: &ExamService,
    answer_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_staff(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    match storage.delete_answer(answer_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Answer deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AnswerNotFound,
            "Answer not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Answer deletion failed: {e}"),
            )),
        ),
    }
}
