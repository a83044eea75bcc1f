use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::ExamService;
use crate::middlewares::RequireJWT;
use crate::models::exams::requests::SubmitResponseRequest;
use crate::models::exams::responses::ResponseListResponse;
use crate::models::students::entities::Student;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

// 作答接口只对挂有学生档案的账号开放
async fn current_student(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
) -> Result<Student, HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(user_id) => user_id,
        None => {
            return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized access, please login",
            )));
        }
    };

    match storage.get_student_by_user_id(user_id).await {
        Ok(Some(student)) => Ok(student),
        Ok(None) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Only students can take exams",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load student record: {e}"),
            )),
        ),
    }
}

pub async fn submit_response(
    service: &ExamService,
    exam_id: i64,
    response_data: SubmitResponseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match current_student(&storage, request).await {
        Ok(student) => student,
        Err(response) => return Ok(response),
    };

    // 考试存在且处于作答时间窗口内
    let exam = match storage.get_exam_by_id(exam_id).await {
        Ok(Some(exam)) => exam,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamNotFound,
                "Exam not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to submit response: {e}"),
                )),
            );
        }
    };

    let now = chrono::Utc::now().timestamp();
    if now < exam.start_at || now > exam.due_at {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Exam is not open for responses",
        )));
    }

    // 题目必须属于该考试
    match storage.get_question_by_id(response_data.question_id).await {
        Ok(Some(question)) if question.exam_id == exam.id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuestionNotFound,
                "Question not found in this exam",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to submit response: {e}"),
                )),
            );
        }
    }

    // 所选答案必须是该题目的选项
    match storage.get_answer_by_id(response_data.selected_answer_id).await {
        Ok(Some(answer)) if answer.question_id == response_data.question_id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AnswerNotFound,
                "Answer option not found for this question",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to submit response: {e}"),
                )),
            );
        }
    }

    match storage
        .submit_response(
            student.id,
            response_data.question_id,
            response_data.selected_answer_id,
        )
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "作答已记录"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to submit response: {e}"),
            )),
        ),
    }
}

pub async fn list_responses(
    service: &ExamService,
    exam_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match current_student(&storage, request).await {
        Ok(student) => student,
        Err(response) => return Ok(response),
    };

    if let Some(response) =
        crate::services::ensure_exists(
            storage.get_exam_by_id(exam_id).await,
            ErrorCode::ExamNotFound,
            "Exam not found",
        )
    {
        return Ok(response);
    }

    match storage
        .list_responses_by_student_for_exam(student.id, exam_id)
        .await
    {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ResponseListResponse { items },
            "Responses retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list responses: {e}"),
            )),
        ),
    }
}
