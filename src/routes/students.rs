use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enrollments::requests::EnrollRequest;
use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::{GradeService, StudentService};
use crate::utils::{SafeEnrollmentIdI64, SafeIDI64};

// 懒加载的全局服务实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// HTTP处理程序
pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(query.into_inner(), &req).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(student_data.into_inner(), &req)
        .await
}

pub async fn get_student(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(student_id.0, &req).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeIDI64,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(student_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_student(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(student_id.0, &req).await
}

pub async fn enroll(
    req: HttpRequest,
    student_id: SafeIDI64,
    enroll_data: web::Json<EnrollRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .enroll(student_id.0, enroll_data.into_inner(), &req)
        .await
}

pub async fn list_enrollments(
    req: HttpRequest,
    student_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_enrollments(student_id.0, &req).await
}

pub async fn drop_enrollment(
    req: HttpRequest,
    student_id: SafeIDI64,
    enrollment_id: SafeEnrollmentIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .drop_enrollment(student_id.0, enrollment_id.0, &req)
        .await
}

pub async fn transcript(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.transcript(student_id.0, &req).await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireJWT)
            // 选课和成绩单走服务层的本人/教职工校验
            .route("/{id}/enrollments", web::post().to(enroll))
            .route("/{id}/enrollments", web::get().to(list_enrollments))
            .route(
                "/{id}/enrollments/{enrollment_id}",
                web::delete().to(drop_enrollment),
            )
            .route("/{id}/grades", web::get().to(transcript))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_students))
                    .route("", web::post().to(create_student))
                    .route("/{id}", web::get().to(get_student))
                    .route("/{id}", web::put().to(update_student))
                    .route("/{id}", web::delete().to(delete_student)),
            ),
    );
}
