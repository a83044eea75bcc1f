//! 院系、专业、宿舍的存储实现，数据量小，列表不分页

use super::SeaOrmStorage;
use crate::entity::{departments, halls, programs};
use crate::errors::{Result, SMSystemError};
use crate::models::org::{
    entities::{Department, Hall, Program},
    requests::{
        CreateDepartmentRequest, CreateHallRequest, CreateProgramRequest, UpdateDepartmentRequest,
        UpdateProgramRequest,
    },
};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_department_impl(&self, req: CreateDepartmentRequest) -> Result<Department> {
        let model = departments::ActiveModel {
            name: Set(req.name),
            head_id: Set(req.head_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建院系失败: {e}")))?;

        Ok(result.into_department())
    }

    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let result = departments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询院系失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    pub async fn list_departments_impl(&self) -> Result<Vec<Department>> {
        let rows = departments::Entity::find()
            .order_by_asc(departments::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询院系列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_department()).collect())
    }

    pub async fn update_department_impl(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        let existing = self.get_department_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = departments::ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(head_id) = update.head_id {
            model.head_id = Set(Some(head_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新院系失败: {e}")))?;

        self.get_department_by_id_impl(id).await
    }

    pub async fn delete_department_impl(&self, id: i64) -> Result<bool> {
        let result = departments::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除院系失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_departments_impl(&self) -> Result<u64> {
        departments::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("统计院系数量失败: {e}")))
    }

    pub async fn create_program_impl(&self, req: CreateProgramRequest) -> Result<Program> {
        let model = programs::ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            department_id: Set(req.department_id),
            duration_semesters: Set(req.duration_semesters),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建专业失败: {e}")))?;

        Ok(result.into_program())
    }

    pub async fn get_program_by_id_impl(&self, id: i64) -> Result<Option<Program>> {
        let result = programs::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询专业失败: {e}")))?;

        Ok(result.map(|m| m.into_program()))
    }

    pub async fn list_programs_impl(&self) -> Result<Vec<Program>> {
        let rows = programs::Entity::find()
            .order_by_asc(programs::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询专业列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_program()).collect())
    }

    pub async fn update_program_impl(
        &self,
        id: i64,
        update: UpdateProgramRequest,
    ) -> Result<Option<Program>> {
        let existing = self.get_program_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = programs::ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(department_id) = update.department_id {
            model.department_id = Set(Some(department_id));
        }

        if let Some(duration) = update.duration_semesters {
            model.duration_semesters = Set(duration);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新专业失败: {e}")))?;

        self.get_program_by_id_impl(id).await
    }

    pub async fn delete_program_impl(&self, id: i64) -> Result<bool> {
        let result = programs::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除专业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn create_hall_impl(&self, req: CreateHallRequest) -> Result<Hall> {
        let model = halls::ActiveModel {
            name: Set(req.name),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建宿舍失败: {e}")))?;

        Ok(result.into_hall())
    }

    pub async fn get_hall_by_id_impl(&self, id: i64) -> Result<Option<Hall>> {
        let result = halls::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询宿舍失败: {e}")))?;

        Ok(result.map(|m| m.into_hall()))
    }

    pub async fn list_halls_impl(&self) -> Result<Vec<Hall>> {
        let rows = halls::Entity::find()
            .order_by_asc(halls::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询宿舍列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_hall()).collect())
    }

    pub async fn delete_hall_impl(&self, id: i64) -> Result<bool> {
        let result = halls::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除宿舍失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
