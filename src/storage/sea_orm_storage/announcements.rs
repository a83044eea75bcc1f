use super::SeaOrmStorage;
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::{Result, SMSystemError};
use crate::models::{
    PaginationInfo,
    announcements::{
        entities::Announcement, requests::CreateAnnouncementRequest,
        responses::AnnouncementListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 发布公告
    pub async fn create_announcement_impl(
        &self,
        author_id: i64,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            author_id: Set(author_id),
            target_id: Set(req.target_id),
            title: Set(req.title),
            content: Set(req.content),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("发布公告失败: {e}")))?;

        Ok(result.into_announcement())
    }

    /// 公告列表。指定 target_id 时返回该院系公告和全员公告。
    pub async fn list_announcements_impl(
        &self,
        page: i64,
        size: i64,
        target_id: Option<i64>,
    ) -> Result<AnnouncementListResponse> {
        let page = page.max(1) as u64;
        let size = size.clamp(1, 100) as u64;

        let mut select = Announcements::find();

        if let Some(target_id) = target_id {
            select = select.filter(
                Condition::any()
                    .add(Column::TargetId.eq(target_id))
                    .add(Column::TargetId.is_null()),
            );
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询公告总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询公告页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询公告列表失败: {e}")))?;

        Ok(AnnouncementListResponse {
            items: rows.into_iter().map(|m| m.into_announcement()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 最近公告，dashboard 用
    pub async fn list_recent_announcements_impl(&self, limit: u64) -> Result<Vec<Announcement>> {
        let rows = Announcements::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询最近公告失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_announcement()).collect())
    }

    /// 删除公告
    pub async fn delete_announcement_impl(&self, id: i64) -> Result<bool> {
        let result = Announcements::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除公告失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
