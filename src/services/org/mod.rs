pub mod departments;
pub mod halls;
pub mod programs;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::org::requests::{
    CreateDepartmentRequest, CreateHallRequest, CreateProgramRequest, UpdateDepartmentRequest,
    UpdateProgramRequest,
};
use crate::storage::Storage;

pub struct OrgService {
    storage: Option<Arc<dyn Storage>>,
}

impl OrgService {
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

    // 院系
    pub async fn list_departments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        departments::list_departments(self, request).await
    }

    pub async fn create_department(
        &self,
        dept_data: CreateDepartmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        departments::create_department(self, dept_data, request).await
    }

    pub async fn get_department(
        &self,
        dept_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        departments::get_department(self, dept_id, request).await
    }

    pub async fn update_department(
        &self,
        dept_id: i64,
        update_data: UpdateDepartmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        departments::update_department(self, dept_id, update_data, request).await
    }

    pub async fn delete_department(
        &self,
        dept_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        departments::delete_department(self, dept_id, request).await
    }

    // 专业
    pub async fn list_programs(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        programs::list_programs(self, request).await
    }

    pub async fn create_program(
        &self,
        program_data: CreateProgramRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        programs::create_program(self, program_data, request).await
    }

    pub async fn get_program(
        &self,
        program_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        programs::get_program(self, program_id, request).await
    }

    pub async fn update_program(
        &self,
        program_id: i64,
        update_data: UpdateProgramRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        programs::update_program(self, program_id, update_data, request).await
    }

    pub async fn delete_program(
        &self,
        program_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        programs::delete_program(self, program_id, request).await
    }

    // 课程纳入培养计划
    pub async fn attach_course(
        &self,
        program_id: i64,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        programs::attach_course(self, program_id, course_id, request).await
    }

    // 培养计划内课程列表
    pub async fn list_program_courses(
        &self,
        program_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        programs::list_program_courses(self, program_id, request).await
    }

    // 宿舍
    pub async fn list_halls(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        halls::list_halls(self, request).await
    }

    pub async fn create_hall(
        &self,
        hall_data: CreateHallRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        halls::create_hall(self, hall_data, request).await
    }

    pub async fn delete_hall(
        &self,
        hall_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        halls::delete_hall(self, hall_id, request).await
    }
}
