use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::OrgService;
use crate::models::org::requests::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::models::org::responses::DepartmentListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_departments(
    service: &OrgService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_departments().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DepartmentListResponse { items },
            "Departments retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list departments: {e}"),
            )),
        ),
    }
}

pub async fn create_department(
    service: &OrgService,
    dept_data: CreateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_admin(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    // 系主任必须是已有账号
    if let Some(head_id) = dept_data.head_id
        && let Some(response) =
            crate::services::ensure_exists(
                storage.get_user_by_id(head_id).await,
                ErrorCode::UserNotFound,
                "Head user not found",
            )
    {
        return Ok(response);
    }

    match storage.create_department(dept_data).await {
        Ok(department) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(department, "院系创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Department creation failed: {e}"),
            )),
        ),
    }
}

pub async fn get_department(
    service: &OrgService,
    dept_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_department_by_id(dept_id).await {
        Ok(Some(department)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            department,
            "Department retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DepartmentNotFound,
            "Department not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get department: {e}"),
            )),
        ),
    }
}

pub async fn update_department(
    service: &OrgService,
    dept_id: i64,
    update_data: UpdateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_admin(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    if let Some(head_id) = update_data.head_id
        && let Some(response) =
            crate::services::ensure_exists(
                storage.get_user_by_id(head_id).await,
                ErrorCode::UserNotFound,
                "Head user not found",
            )
    {
        return Ok(response);
    }

    match storage.update_department(dept_id, update_data).await {
        Ok(Some(department)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(department, "院系更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DepartmentNotFound,
            "Department not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Department update failed: {e}"),
            )),
        ),
    }
}

pub async fn delete_department(
    service: &OrgService,
    dept_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(response) = crate::services::ensure_admin(request) {
        return Ok(response);
    }

    let storage = service.get_storage(request);

    match storage.delete_department(dept_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Department deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DepartmentNotFound,
            "Department not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Department deletion failed: {e}"),
            )),
        ),
    }
}
