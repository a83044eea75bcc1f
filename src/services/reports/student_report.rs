use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::models::reports::responses::StudentAcademicReport;
use crate::models::{ApiResponse, ErrorCode};

const STUDENT_ACADEMIC: &str = "student_academic";

pub async fn generate_student_report(
    service: &ReportService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Report generation failed: {e}"),
                )),
            );
        }
    };

    let user = match storage.get_user_by_id(student.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User record for student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Report generation failed: {e}"),
                )),
            );
        }
    };

    let grades = match storage.list_grades_by_student(student.id).await {
        Ok(grades) => grades,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Report generation failed: {e}"),
                )),
            );
        }
    };

    // 无成绩时平均分留空
    let average_total = if grades.is_empty() {
        None
    } else {
        Some(grades.iter().map(|grade| grade.total).sum::<f64>() / grades.len() as f64)
    };

    let report = StudentAcademicReport {
        student,
        user,
        grades,
        average_total,
        generated_at: chrono::Utc::now(),
    };

    // 归档失败不影响报表返回
    match serde_json::to_value(&report) {
        Ok(snapshot) => {
            if let Err(e) = storage.save_report(STUDENT_ACADEMIC, snapshot).await {
                error!("Failed to archive report: {}", e);
            }
        }
        Err(e) => error!("Failed to serialize report snapshot: {}", e),
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(report, "报表生成成功")))
}

pub async fn get_report(
    service: &ReportService,
    report_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_report_by_id(report_id).await {
        Ok(Some(report)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            report,
            "Report retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReportNotFound,
            "Report not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get report: {e}"),
            )),
        ),
    }
}

pub async fn list_recent_reports(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_recent_reports(20).await {
        Ok(reports) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            reports,
            "Recent reports retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list reports: {e}"),
            )),
        ),
    }
}
