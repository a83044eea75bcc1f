use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::exams::requests::{
    CreateAnswerRequest, CreateExamRequest, CreateQuestionRequest, SubmitResponseRequest,
    UpdateExamRequest, UpdateQuestionRequest,
};
use crate::services::ExamService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ExamService 实例
static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

// HTTP处理程序
pub async fn create_exam(
    req: HttpRequest,
    exam_data: web::Json<CreateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.create_exam(exam_data.into_inner(), &req).await
}

pub async fn get_exam(req: HttpRequest, exam_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.get_exam(exam_id.0, &req).await
}

pub async fn update_exam(
    req: HttpRequest,
    exam_id: SafeIDI64,
    update_data: web::Json<UpdateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .update_exam(exam_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_exam(req: HttpRequest, exam_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_exam(exam_id.0, &req).await
}

pub async fn create_question(
    req: HttpRequest,
    exam_id: SafeIDI64,
    question_data: web::Json<CreateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .create_question(exam_id.0, question_data.into_inner(), &req)
        .await
}

pub async fn list_questions(req: HttpRequest, exam_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_questions(exam_id.0, &req).await
}

pub async fn update_question(
    req: HttpRequest,
    question_id: SafeIDI64,
    update_data: web::Json<UpdateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .update_question(question_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_question(req: HttpRequest, question_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_question(question_id.0, &req).await
}

pub async fn create_answer(
    req: HttpRequest,
    question_id: SafeIDI64,
    answer_data: web::Json<CreateAnswerRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .create_answer(question_id.0, answer_data.into_inner(), &req)
        .await
}

pub async fn list_answers(req: HttpRequest, question_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_answers(question_id.0, &req).await
}

pub async fn delete_answer(req: HttpRequest, answer_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_answer(answer_id.0, &req).await
}

pub async fn submit_response(
    req: HttpRequest,
    exam_id: SafeIDI64,
    response_data: web::Json<SubmitResponseRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .submit_response(exam_id.0, response_data.into_inner(), &req)
        .await
}

pub async fn list_responses(req: HttpRequest, exam_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_responses(exam_id.0, &req).await
}

// 配置路由；出题和改题的角色校验在服务层
pub fn configure_exam_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/exams")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_exam))
            .route("/{id}/questions", web::get().to(list_questions))
            .route("/{id}/questions", web::post().to(create_question))
            .route("/{id}/responses", web::get().to(list_responses))
            .route("/{id}/responses", web::post().to(submit_response))
            .route("/{id}", web::get().to(get_exam))
            .route("/{id}", web::put().to(update_exam))
            .route("/{id}", web::delete().to(delete_exam)),
    );

    cfg.service(
        web::scope("/api/v1/questions")
            .wrap(middlewares::RequireJWT)
            .route("/{id}/answers", web::get().to(list_answers))
            .route("/{id}/answers", web::post().to(create_answer))
            .route("/{id}", web::put().to(update_question))
            .route("/{id}", web::delete().to(delete_question)),
    );

    cfg.service(
        web::scope("/api/v1/answers")
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::delete().to(delete_answer)),
    );
}
