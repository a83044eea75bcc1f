use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::staff::requests::{CreateStaffRequest, StaffListParams};
use crate::models::users::entities::UserRole;
use crate::services::StaffService;
use crate::utils::{SafeCourseIdI64, SafeIDI64};

// 懒加载的全局 StaffService 实例
static STAFF_SERVICE: Lazy<StaffService> = Lazy::new(StaffService::new_lazy);

// HTTP处理程序
pub async fn list_staff(
    req: HttpRequest,
    query: web::Query<StaffListParams>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.list_staff(query.into_inner(), &req).await
}

pub async fn create_staff(
    req: HttpRequest,
    staff_data: web::Json<CreateStaffRequest>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.create_staff(staff_data.into_inner(), &req).await
}

pub async fn get_staff(req: HttpRequest, staff_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.get_staff(staff_id.0, &req).await
}

pub async fn delete_staff(req: HttpRequest, staff_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.delete_staff(staff_id.0, &req).await
}

pub async fn assign_course(
    req: HttpRequest,
    staff_id: SafeIDI64,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE
        .assign_course(staff_id.0, course_id.0, &req)
        .await
}

pub async fn list_courses(req: HttpRequest, staff_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.list_courses(staff_id.0, &req).await
}

// 配置路由
pub fn configure_staff_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/staff")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_staff))
                    .route("", web::post().to(create_staff))
                    .route("/{id}/courses", web::get().to(list_courses))
                    .route("/{id}/courses/{course_id}", web::post().to(assign_course))
                    .route("/{id}", web::get().to(get_staff))
                    .route("/{id}", web::delete().to(delete_staff)),
            ),
    );
}
