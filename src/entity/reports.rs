//! 报表实体，data 列保存 JSON 格式的报表内容

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub report_type: String,
    pub data: Option<Json>,
    pub generated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_report(self) -> crate::models::reports::entities::Report {
        use chrono::{DateTime, Utc};

        crate::models::reports::entities::Report {
            id: self.id,
            report_type: self.report_type,
            data: self.data,
            generated_at: DateTime::<Utc>::from_timestamp(self.generated_at, 0).unwrap_or_default(),
        }
    }
}
