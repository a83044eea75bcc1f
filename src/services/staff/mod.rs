pub mod courses;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::staff::requests::{CreateStaffRequest, StaffListParams};
use crate::storage::Storage;

pub struct StaffService {
    storage: Option<Arc<dyn Storage>>,
}

impl StaffService {
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

    // 教职工列表
    pub async fn list_staff(
        &self,
        params: StaffListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_staff(self, params, request).await
    }

    // 建立教职工档案
    pub async fn create_staff(
        &self,
        staff_data: CreateStaffRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_staff(self, staff_data, request).await
    }

    // 获取教职工档案
    pub async fn get_staff(
        &self,
        staff_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_staff(self, staff_id, request).await
    }

    // 删除教职工档案
    pub async fn delete_staff(
        &self,
        staff_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_staff(self, staff_id, request).await
    }

    // 指定授课
    pub async fn assign_course(
        &self,
        staff_id: i64,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::assign_course(self, staff_id, course_id, request).await
    }

    // 授课列表
    pub async fn list_courses(
        &self,
        staff_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::list_courses(self, staff_id, request).await
    }
}
