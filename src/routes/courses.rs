use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::{
    CourseListParams, CreateCourseRequest, CreateScheduleRequest, UpdateCourseRequest,
};
use crate::services::{CourseService, ExamService};
use crate::utils::SafeIDI64;

// 懒加载的全局服务实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);
static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

// HTTP处理程序
pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(query.into_inner(), &req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn get_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(course_id.0, &req).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeIDI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(course_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(course_id.0, &req).await
}

pub async fn create_schedule(
    req: HttpRequest,
    course_id: SafeIDI64,
    schedule_data: web::Json<CreateScheduleRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_schedule(course_id.0, schedule_data.into_inner(), &req)
        .await
}

pub async fn list_schedules(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_schedules(course_id.0, &req).await
}

pub async fn delete_schedule(
    req: HttpRequest,
    schedule_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_schedule(schedule_id.0, &req).await
}

pub async fn list_exams(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_exams_by_course(course_id.0, &req).await
}

// 配置路由；写操作的角色校验在服务层
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/{id}/schedules", web::get().to(list_schedules))
            .route("/{id}/schedules", web::post().to(create_schedule))
            .route("/{id}/exams", web::get().to(list_exams))
            .route("/{id}", web::get().to(get_course))
            .route("/{id}", web::put().to(update_course))
            .route("/{id}", web::delete().to(delete_course)),
    );

    cfg.service(
        web::scope("/api/v1/schedules")
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::delete().to(delete_schedule)),
    );
}
