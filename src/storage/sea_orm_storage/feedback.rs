use super::SeaOrmStorage;
use crate::entity::feedbacks::{ActiveModel, Column, Entity as Feedbacks};
use crate::errors::{Result, SMSystemError};
use crate::models::feedback::{entities::Feedback, requests::CreateFeedbackRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 发送反馈
    pub async fn create_feedback_impl(
        &self,
        author_id: i64,
        req: CreateFeedbackRequest,
    ) -> Result<Feedback> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            author_id: Set(author_id),
            recipient_id: Set(req.recipient_id),
            title: Set(req.title),
            content: Set(req.content),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("发送反馈失败: {e}")))?;

        Ok(result.into_feedback())
    }

    /// 某用户发出和收到的反馈
    pub async fn list_feedback_for_user_impl(&self, user_id: i64) -> Result<Vec<Feedback>> {
        // 发出的和收到的都算
        let rows = Feedbacks::find()
            .filter(
                Condition::any()
                    .add(Column::RecipientId.eq(user_id))
                    .add(Column::AuthorId.eq(user_id)),
            )
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询反馈列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_feedback()).collect())
    }

    /// 删除反馈
    pub async fn delete_feedback_impl(&self, id: i64) -> Result<bool> {
        let result = Feedbacks::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除反馈失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
