use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::ReportService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ReportService 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// HTTP处理程序
pub async fn generate_student_report(
    req: HttpRequest,
    student_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .generate_student_report(student_id.0, &req)
        .await
}

pub async fn get_report(req: HttpRequest, report_id: SafeIDI64) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.get_report(report_id.0, &req).await
}

pub async fn list_recent_reports(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.list_recent_reports(&req).await
}

// 配置路由
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_recent_reports))
                    .route("/students/{id}", web::post().to(generate_student_report))
                    .route("/{id}", web::get().to(get_report)),
            ),
    );
}
