pub mod student_report;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 生成学生学业报表并归档
    pub async fn generate_student_report(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student_report::generate_student_report(self, student_id, request).await
    }

    // 查询归档报表
    pub async fn get_report(
        &self,
        report_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student_report::get_report(self, report_id, request).await
    }

    // 最近生成的报表
    pub async fn list_recent_reports(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        student_report::list_recent_reports(self, request).await
    }
}
