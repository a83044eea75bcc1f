pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::feedback::requests::CreateFeedbackRequest;
use crate::storage::Storage;

pub struct FeedbackService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeedbackService {
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

    // 提交反馈
    pub async fn create_feedback(
        &self,
        feedback_data: CreateFeedbackRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_feedback(self, feedback_data, request).await
    }

    // 当前用户收到的反馈
    pub async fn list_feedback(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_feedback(self, request).await
    }

    // 删除反馈
    pub async fn delete_feedback(
        &self,
        feedback_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_feedback(self, feedback_id, request).await
    }
}
