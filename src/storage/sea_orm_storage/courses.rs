use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::{program_courses, schedules, staff_courses};
use crate::errors::{Result, SMSystemError};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::{Course, Schedule},
        requests::{
            CourseListQuery, CreateCourseRequest, CreateScheduleRequest, UpdateCourseRequest,
        },
        responses::CourseListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let model = ActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            department_id: Set(req.department_id),
            credits: Set(req.credits),
            year: Set(req.year.to_string()),
            semester: Set(req.semester.to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 通过课程代码获取课程
    pub async fn get_course_by_code_impl(&self, code: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Courses::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Code.contains(&escaped)),
            );
        }

        if let Some(department_id) = query.department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        if let Some(ref year) = query.year {
            select = select.filter(Column::Year.eq(year.to_string()));
        }

        if let Some(ref semester) = query.semester {
            select = select.filter(Column::Semester.eq(semester.to_string()));
        }

        select = select.order_by_asc(Column::Code);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = self.get_course_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(code) = update.code {
            model.code = Set(code);
        }

        if let Some(department_id) = update.department_id {
            model.department_id = Set(department_id);
        }

        if let Some(credits) = update.credits {
            model.credits = Set(credits);
        }

        if let Some(year) = update.year {
            model.year = Set(year.to_string());
        }

        if let Some(semester) = update.semester {
            model.semester = Set(semester.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(id).await
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 课程总数
    pub async fn count_courses_impl(&self) -> Result<u64> {
        Courses::find()
            .count(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("统计课程数量失败: {e}")))
    }

    /// 指定教职工授课，重复指定返回 false
    pub async fn assign_course_to_staff_impl(&self, staff_id: i64, course_id: i64) -> Result<bool> {
        let existing = staff_courses::Entity::find_by_id((staff_id, course_id))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询授课关系失败: {e}")))?;

        if existing.is_some() {
            return Ok(false);
        }

        let model = staff_courses::ActiveModel {
            staff_id: Set(staff_id),
            course_id: Set(course_id),
        };

        // 复合主键插入不取回 last_insert_id
        staff_courses::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("指定授课失败: {e}")))?;

        Ok(true)
    }

    /// 某教职工的授课列表
    pub async fn list_courses_by_staff_impl(&self, staff_id: i64) -> Result<Vec<Course>> {
        let links = staff_courses::Entity::find()
            .filter(staff_courses::Column::StaffId.eq(staff_id))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询授课关系失败: {e}")))?;

        let course_ids: Vec<i64> = links.into_iter().map(|l| l.course_id).collect();
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let courses = Courses::find()
            .filter(Column::Id.is_in(course_ids))
            .order_by_asc(Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询授课课程失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 课程纳入专业培养计划，重复纳入返回 false
    pub async fn attach_course_to_program_impl(
        &self,
        program_id: i64,
        course_id: i64,
    ) -> Result<bool> {
        let existing = program_courses::Entity::find_by_id((program_id, course_id))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询专业课程关系失败: {e}")))?;

        if existing.is_some() {
            return Ok(false);
        }

        let model = program_courses::ActiveModel {
            program_id: Set(program_id),
            course_id: Set(course_id),
        };

        program_courses::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("纳入培养计划失败: {e}")))?;

        Ok(true)
    }

    /// 某专业的课程列表
    pub async fn list_courses_by_program_impl(&self, program_id: i64) -> Result<Vec<Course>> {
        let links = program_courses::Entity::find()
            .filter(program_courses::Column::ProgramId.eq(program_id))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询专业课程关系失败: {e}")))?;

        let course_ids: Vec<i64> = links.into_iter().map(|l| l.course_id).collect();
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let courses = Courses::find()
            .filter(Column::Id.is_in(course_ids))
            .order_by_asc(Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询专业课程失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 添加课表条目
    pub async fn create_schedule_impl(
        &self,
        course_id: i64,
        req: CreateScheduleRequest,
    ) -> Result<Schedule> {
        let model = schedules::ActiveModel {
            course_id: Set(course_id),
            day: Set(req.day),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            location: Set(req.location),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("添加课表失败: {e}")))?;

        Ok(result.into_schedule())
    }

    /// 某课程的课表
    pub async fn list_schedules_by_course_impl(&self, course_id: i64) -> Result<Vec<Schedule>> {
        let rows = schedules::Entity::find()
            .filter(schedules::Column::CourseId.eq(course_id))
            .order_by_asc(schedules::Column::Day)
            .order_by_asc(schedules::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询课表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_schedule()).collect())
    }

    /// 删除课表条目
    pub async fn delete_schedule_impl(&self, id: i64) -> Result<bool> {
        let result = schedules::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除课表失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
