use super::SeaOrmStorage;
use crate::entity::staff::{ActiveModel, Column, Entity as Staff};
use crate::entity::users;
use crate::errors::{Result, SMSystemError};
use crate::models::{
    PaginationInfo,
    staff::{
        entities::StaffMember,
        requests::{CreateStaffRequest, StaffListQuery},
        responses::{StaffListResponse, StaffResponse},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 建立教职工档案
    pub async fn create_staff_impl(&self, req: CreateStaffRequest) -> Result<StaffMember> {
        let date_employed = req.date_employed.and_time(chrono::NaiveTime::MIN).and_utc();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            staff_number: Set(req.staff_number),
            date_employed: Set(date_employed.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建教职工档案失败: {e}")))?;

        Ok(result.into_staff())
    }

    /// 通过档案 ID 获取教职工
    pub async fn get_staff_by_id_impl(&self, id: i64) -> Result<Option<StaffMember>> {
        let result = Staff::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询教职工失败: {e}")))?;

        Ok(result.map(|m| m.into_staff()))
    }

    /// 通过账号 ID 获取教职工
    pub async fn get_staff_by_user_id_impl(&self, user_id: i64) -> Result<Option<StaffMember>> {
        let result = Staff::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询教职工失败: {e}")))?;

        Ok(result.map(|m| m.into_staff()))
    }

    /// 分页列出教职工，连带账号信息
    pub async fn list_staff_with_pagination_impl(
        &self,
        query: StaffListQuery,
    ) -> Result<StaffListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Staff::find().find_also_related(users::Entity);

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::StaffNumber.contains(&escaped))
                    .add(users::Column::FirstName.contains(&escaped))
                    .add(users::Column::LastName.contains(&escaped))
                    .add(users::Column::Username.contains(&escaped)),
            );
        }

        if let Some(department_id) = query.department_id {
            select = select.filter(users::Column::DepartmentId.eq(department_id));
        }

        select = select.order_by_asc(Column::StaffNumber);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询教职工总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询教职工页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询教职工列表失败: {e}")))?;

        let items = rows
            .into_iter()
            .filter_map(|(staff, user)| {
                user.map(|u| StaffResponse {
                    staff: staff.into_staff(),
                    user: u.into_user(),
                })
            })
            .collect();

        Ok(StaffListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 删除教职工档案
    pub async fn delete_staff_impl(&self, id: i64) -> Result<bool> {
        let result = Staff::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除教职工档案失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 教职工总数
    pub async fn count_staff_impl(&self) -> Result<u64> {
        Staff::find()
            .count(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("统计教职工数量失败: {e}")))
    }
}
