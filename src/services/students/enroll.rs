use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::requests::EnrollRequest;
use crate::models::enrollments::responses::EnrollmentListResponse;
use crate::models::students::entities::Student;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

// 学生只能操作自己的选课，教职工和管理员不受限
async fn authorize_student_access(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    student_id: i64,
) -> Result<Student, HttpResponse> {
    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load student: {e}"),
                )),
            );
        }
    };

    match (
        RequireJWT::extract_user_role(request),
        RequireJWT::extract_user_id(request),
    ) {
        (Some(UserRole::Student), Some(current_user_id)) => {
            if student.user_id != current_user_id {
                return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "Cannot operate on another student's enrollments",
                )));
            }
        }
        (Some(_), Some(_)) => {}
        _ => {
            return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized access, please login",
            )));
        }
    }

    Ok(student)
}

pub async fn enroll(
    service: &StudentService,
    student_id: i64,
    enroll_data: EnrollRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match authorize_student_access(&storage, request, student_id).await {
        Ok(student) => student,
        Err(response) => return Ok(response),
    };

    if enroll_data.course_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "course_ids must not be empty",
        )));
    }

    // 所有目标课程必须存在
    for course_id in &enroll_data.course_ids {
        match storage.get_course_by_id(*course_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::CourseNotFound,
                    format!("Course {course_id} not found"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::EnrollmentFailed,
                        format!("Enrollment failed: {e}"),
                    )),
                );
            }
        }
    }

    let enrollment_date = enroll_data
        .enrollment_date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    match storage
        .enroll_student(student.id, enroll_data.course_ids, enrollment_date)
        .await
    {
        Ok(response) => {
            tracing::info!(
                "Student {} enrolled in {} course(s), {} skipped",
                student.id,
                response.enrolled.len(),
                response.skipped.len()
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(response, "选课成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentFailed,
                format!("Enrollment failed: {e}"),
            )),
        ),
    }
}

pub async fn list_enrollments(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match authorize_student_access(&storage, request, student_id).await {
        Ok(student) => student,
        Err(response) => return Ok(response),
    };

    match storage.list_enrollments_by_student(student.id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EnrollmentListResponse { items },
            "Enrollments retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list enrollments: {e}"),
            )),
        ),
    }
}

pub async fn drop_enrollment(
    service: &StudentService,
    student_id: i64,
    enrollment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match authorize_student_access(&storage, request, student_id).await {
        Ok(student) => student,
        Err(response) => return Ok(response),
    };

    // 选课记录必须属于该学生
    match storage.get_enrollment_by_id(enrollment_id).await {
        Ok(Some(enrollment)) if enrollment.student_id == student.id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentNotFound,
                "Enrollment not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to drop enrollment: {e}"),
                )),
            );
        }
    }

    match storage.delete_enrollment(enrollment_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Enrollment dropped successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "Enrollment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to drop enrollment: {e}"),
            )),
        ),
    }
}
