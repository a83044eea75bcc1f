use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::feedback::requests::CreateFeedbackRequest;
use crate::services::FeedbackService;
use crate::utils::SafeIDI64;

// 懒加载的全局 FeedbackService 实例
static FEEDBACK_SERVICE: Lazy<FeedbackService> = Lazy::new(FeedbackService::new_lazy);

// HTTP处理程序
pub async fn create_feedback(
    req: HttpRequest,
    feedback_data: web::Json<CreateFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .create_feedback(feedback_data.into_inner(), &req)
        .await
}

pub async fn list_feedback(req: HttpRequest) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE.list_feedback(&req).await
}

pub async fn delete_feedback(
    req: HttpRequest,
    feedback_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE.delete_feedback(feedback_id.0, &req).await
}

// 配置路由；删除反馈的管理员校验在服务层
pub fn configure_feedback_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/feedback")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_feedback))
            .route("", web::post().to(create_feedback))
            .route("/{id}", web::delete().to(delete_feedback)),
    );
}
