use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_index_number;

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 验证学号格式
    if let Err(msg) = validate_index_number(&student_data.index_number) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::IndexNumberInvalid, msg)));
    }

    // 2. 对应账号必须存在
    match storage.get_user_by_id(student_data.user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create student: {e}"),
                )),
            );
        }
    }

    // 3. 一个账号只能挂一份学生档案
    if let Ok(Some(_)) = storage.get_student_by_user_id(student_data.user_id).await {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::StudentAlreadyExists,
            "Student record already exists for this user",
        )));
    }

    // 4. 学号唯一
    if let Ok(Some(_)) = storage
        .get_student_by_index_number(&student_data.index_number)
        .await
    {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::IndexNumberAlreadyExists,
            "Index number already exists",
        )));
    }

    match storage.create_student(student_data).await {
        Ok(student) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(student, "学生档案创建成功")))
        }
        Err(e) => {
            error!("Student creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Student creation failed: {e}"),
                )),
            )
        }
    }
}
