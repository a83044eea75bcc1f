use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::org::requests::{
    CreateDepartmentRequest, CreateHallRequest, CreateProgramRequest, UpdateDepartmentRequest,
    UpdateProgramRequest,
};
use crate::services::OrgService;
use crate::utils::{SafeCourseIdI64, SafeIDI64};

// 懒加载的全局 OrgService 实例
static ORG_SERVICE: Lazy<OrgService> = Lazy::new(OrgService::new_lazy);

// HTTP处理程序 —— 院系
pub async fn list_departments(req: HttpRequest) -> ActixResult<HttpResponse> {
    ORG_SERVICE.list_departments(&req).await
}

pub async fn create_department(
    req: HttpRequest,
    dept_data: web::Json<CreateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    ORG_SERVICE
        .create_department(dept_data.into_inner(), &req)
        .await
}

pub async fn get_department(req: HttpRequest, dept_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ORG_SERVICE.get_department(dept_id.0, &req).await
}

pub async fn update_department(
    req: HttpRequest,
    dept_id: SafeIDI64,
    update_data: web::Json<UpdateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    ORG_SERVICE
        .update_department(dept_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_department(req: HttpRequest, dept_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ORG_SERVICE.delete_department(dept_id.0, &req).await
}

// 专业
pub async fn list_programs(req: HttpRequest) -> ActixResult<HttpResponse> {
    ORG_SERVICE.list_programs(&req).await
}

pub async fn create_program(
    req: HttpRequest,
    program_data: web::Json<CreateProgramRequest>,
) -> ActixResult<HttpResponse> {
    ORG_SERVICE
        .create_program(program_data.into_inner(), &req)
        .await
}

pub async fn get_program(req: HttpRequest, program_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ORG_SERVICE.get_program(program_id.0, &req).await
}

pub async fn update_program(
    req: HttpRequest,
    program_id: SafeIDI64,
    update_data: web::Json<UpdateProgramRequest>,
) -> ActixResult<HttpResponse> {
    ORG_SERVICE
        .update_program(program_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_program(req: HttpRequest, program_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ORG_SERVICE.delete_program(program_id.0, &req).await
}

pub async fn attach_course(
    req: HttpRequest,
    program_id: SafeIDI64,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    ORG_SERVICE
        .attach_course(program_id.0, course_id.0, &req)
        .await
}

pub async fn list_program_courses(
    req: HttpRequest,
    program_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ORG_SERVICE.list_program_courses(program_id.0, &req).await
}

// 宿舍
pub async fn list_halls(req: HttpRequest) -> ActixResult<HttpResponse> {
    ORG_SERVICE.list_halls(&req).await
}

pub async fn create_hall(
    req: HttpRequest,
    hall_data: web::Json<CreateHallRequest>,
) -> ActixResult<HttpResponse> {
    ORG_SERVICE.create_hall(hall_data.into_inner(), &req).await
}

pub async fn delete_hall(req: HttpRequest, hall_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ORG_SERVICE.delete_hall(hall_id.0, &req).await
}

// 配置路由；写操作的角色校验在服务层
pub fn configure_org_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/departments")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_departments))
            .route("", web::post().to(create_department))
            .route("/{id}", web::get().to(get_department))
            .route("/{id}", web::put().to(update_department))
            .route("/{id}", web::delete().to(delete_department)),
    );

    cfg.service(
        web::scope("/api/v1/programs")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_programs))
            .route("", web::post().to(create_program))
            .route("/{id}/courses", web::get().to(list_program_courses))
            .route("/{id}/courses/{course_id}", web::post().to(attach_course))
            .route("/{id}", web::get().to(get_program))
            .route("/{id}", web::put().to(update_program))
            .route("/{id}", web::delete().to(delete_program)),
    );

    cfg.service(
        web::scope("/api/v1/halls")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_halls))
            .route("", web::post().to(create_hall))
            .route("/{id}", web::delete().to(delete_hall)),
    );
}
