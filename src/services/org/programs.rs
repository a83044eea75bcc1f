use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::OrgService;
use crate::models::org::requests::{CreateProgramRequest, UpdateProgramRequest};
use crate::models::org::responses::ProgramListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_programs(
    service: &OrgService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_programs().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProgramListResponse { items },
            "Programs retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list programs: {e}"),
            )),
        ),
    }
}

pub async fn create_program(
    service: &OrgService,
    program_data: CreateProgramRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_admin(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    if program_data.duration_semesters <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "duration_semesters must be positive",
        )));
    }

    if let Some(department_id) = program_data.department_id
        && let Some(response) =
            crate::services::ensure_exists(
                storage.get_department_by_id(department_id).await,
                ErrorCode::DepartmentNotFound,
                "Department not found",
            )
    {
        return Ok(response);
    }

    match storage.create_program(program_data).await {
        Ok(program) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(program, "专业创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Program creation failed: {e}"),
            )),
        ),
    }
}

pub async fn get_program(
    service: &OrgService,
    program_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_program_by_id(program_id).await {
        Ok(Some(program)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            program,
            "Program retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProgramNotFound,
            "Program not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get program: {e}"),
            )),
        ),
    }
}

pub async fn update_program(
    service: &OrgService,
    program_id: i64,
    update_data: UpdateProgramRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_admin(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    if let Some(duration) = update_data.duration_semesters
        && duration <= 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "duration_semesters must be positive",
        )));
    }

    if let Some(department_id) = update_data.department_id
        && let Some(response) =
            crate::services::ensure_exists(
                storage.get_department_by_id(department_id).await,
                ErrorCode::DepartmentNotFound,
                "Department not found",
            )
    {
        return Ok(response);
    }

    match storage.update_program(program_id, update_data).await {
        Ok(Some(program)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(program, "专业更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProgramNotFound,
            "Program not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Program update failed: {e}"),
            )),
        ),
    }
}

pub async fn delete_program(
    service: &OrgService,
    program_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_admin(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    match storage.delete_program(program_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Program deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProgramNotFound,
            "Program not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Program deletion failed: {e}"),
            )),
        ),
    }
}

pub async fn attach_course(
    service: &OrgService,
    program_id: i64,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_admin(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    if let Some(response) =
        crate::services::ensure_exists(
            storage.get_program_by_id(program_id).await,
            ErrorCode::ProgramNotFound,
            "Program not found",
        )
    {
        return Ok(response);
    }

    if let Some(response) =
        crate::services::ensure_exists(
            storage.get_course_by_id(course_id).await,
            ErrorCode::CourseNotFound,
            "Course not found",
        )
    {
        return Ok(response);
    }

    match storage.attach_course_to_program(program_id, course_id).await {
        Ok(false) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::Conflict,
            "Course already attached to this program",
        ))),
        Ok(true) => {
            Ok(HttpResponse::Created().json(ApiResponse::success_empty("课程纳入培养计划成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to attach course to program: {e}"),
            )),
        ),
    }
}

pub async fn list_program_courses(
    service: &OrgService,
    program_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(response) =
        crate::services::ensure_exists(
            storage.get_program_by_id(program_id).await,
            ErrorCode::ProgramNotFound,
            "Program not found",
        )
    {
        return Ok(response);
    }

    match storage.list_courses_by_program(program_id).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            courses,
            "Program courses retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list program courses: {e}"),
            )),
        ),
    }
}
