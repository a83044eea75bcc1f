use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::grades::requests::CreateGradeRequest;
use crate::models::grades::responses::GradeResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_score;

pub async fn create_grade(
    service: &GradeService,
    grade_data: CreateGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 各分项成绩范围校验
    for score in [
        grade_data.quiz,
        grade_data.assignment,
        grade_data.midsem,
        grade_data.exam,
    ] {
        if let Err(msg) = validate_score(score) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ScoreInvalid, msg)));
        }
    }

    // 2. 选课记录必须存在
    match storage.get_enrollment_by_id(grade_data.enrollment_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentNotFound,
                "Enrollment not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Grade creation failed: {e}"),
                )),
            );
        }
    }

    // 3. 同一选课同一学期只能有一条成绩
    if let Ok(Some(_)) = storage
        .get_grade_by_enrollment(grade_data.enrollment_id, grade_data.year, grade_data.semester)
        .await
    {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::GradeAlreadyExists,
            "Grade already recorded for this enrollment and semester",
        )));
    }

    match storage.create_grade(grade_data).await {
        Ok(grade) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(GradeResponse::from(grade), "成绩录入成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Grade creation failed: {e}"),
            )),
        ),
    }
}
