use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 调整专业时目标专业必须存在
    if let Some(program_id) = update_data.program_id
        && let Some(response) =
            crate::services::ensure_exists(
                storage.get_program_by_id(program_id).await,
                ErrorCode::ProgramNotFound,
                "Program not found",
            )
    {
        return Ok(response);
    }

    if let Some(hall_id) = update_data.hall_id
        && let Some(response) =
            crate::services::ensure_exists(
                storage.get_hall_by_id(hall_id).await,
                ErrorCode::HallNotFound,
                "Hall not found",
            )
    {
        return Ok(response);
    }

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(student, "学生档案更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Student update failed: {e}"),
            )),
        ),
    }
}
