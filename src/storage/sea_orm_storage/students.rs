use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::entity::users;
use crate::errors::{Result, SMSystemError};
use crate::models::{
    PaginationInfo,
    students::{
        entities::{Student, StudentStatus},
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::{StudentListResponse, StudentResponse},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 建立学生档案
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let date_admitted = req.date_admitted.and_time(chrono::NaiveTime::MIN).and_utc();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            index_number: Set(req.index_number),
            date_admitted: Set(date_admitted.timestamp()),
            status: Set(StudentStatus::Enrolled.to_string()),
            year: Set(req.year.to_string()),
            program_id: Set(req.program_id),
            hall_id: Set(req.hall_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建学生档案失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过档案 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过账号 ID 获取学生
    pub async fn get_student_by_user_id_impl(&self, user_id: i64) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过学号获取学生
    pub async fn get_student_by_index_number_impl(
        &self,
        index_number: &str,
    ) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::IndexNumber.eq(index_number))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生，连带账号信息
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Students::find().find_also_related(users::Entity);

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::IndexNumber.contains(&escaped))
                    .add(users::Column::FirstName.contains(&escaped))
                    .add(users::Column::LastName.contains(&escaped))
                    .add(users::Column::Username.contains(&escaped)),
            );
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        if let Some(ref year) = query.year {
            select = select.filter(Column::Year.eq(year.to_string()));
        }

        if let Some(program_id) = query.program_id {
            select = select.filter(Column::ProgramId.eq(program_id));
        }

        if let Some(hall_id) = query.hall_id {
            select = select.filter(Column::HallId.eq(hall_id));
        }

        select = select.order_by_asc(Column::IndexNumber);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生列表失败: {e}")))?;

        let items = rows
            .into_iter()
            .filter_map(|(student, user)| {
                // 外键约束下账号必然存在，留 filter_map 兜底脏数据
                user.map(|u| StudentResponse {
                    student: student.into_student(),
                    user: u.into_user(),
                })
            })
            .collect();

        Ok(StudentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生档案
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        if let Some(year) = update.year {
            model.year = Set(year.to_string());
        }

        if let Some(program_id) = update.program_id {
            model.program_id = Set(Some(program_id));
        }

        if let Some(hall_id) = update.hall_id {
            model.hall_id = Set(Some(hall_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新学生档案失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生档案
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除学生档案失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 学生总数
    pub async fn count_students_impl(&self) -> Result<u64> {
        Students::find()
            .count(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("统计学生数量失败: {e}")))
    }
}
