use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::grades::requests::UpdateGradeRequest;
use crate::models::grades::responses::GradeResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_score;

pub async fn update_grade(
    service: &GradeService,
    grade_id: i64,
    update_data: UpdateGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    for score in [
        update_data.quiz,
        update_data.assignment,
        update_data.midsem,
        update_data.exam,
    ]
    .into_iter()
    .flatten()
    {
        if let Err(msg) = validate_score(score) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ScoreInvalid, msg)));
        }
    }

    match storage.update_grade(grade_id, update_data).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(GradeResponse::from(grade), "成绩更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "Grade not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Grade update failed: {e}"),
            )),
        ),
    }
}
