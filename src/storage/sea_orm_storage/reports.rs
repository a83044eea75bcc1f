use super::SeaOrmStorage;
use crate::entity::reports::{ActiveModel, Column, Entity as Reports};
use crate::errors::{Result, SMSystemError};
use crate::models::reports::entities::Report;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, QuerySelect, Set};

impl SeaOrmStorage {
    /// 保存报表快照
    pub async fn save_report_impl(
        &self,
        report_type: &str,
        data: serde_json::Value,
    ) -> Result<Report> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            report_type: Set(report_type.to_string()),
            data: Set(Some(data)),
            generated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("保存报表失败: {e}")))?;

        Ok(result.into_report())
    }

    /// 通过 ID 获取报表
    pub async fn get_report_by_id_impl(&self, id: i64) -> Result<Option<Report>> {
        let result = Reports::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询报表失败: {e}")))?;

        Ok(result.map(|m| m.into_report()))
    }

    /// 最近生成的报表
    pub async fn list_recent_reports_impl(&self, limit: u64) -> Result<Vec<Report>> {
        let rows = Reports::find()
            .order_by_desc(Column::GeneratedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询报表列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_report()).collect())
    }
}
