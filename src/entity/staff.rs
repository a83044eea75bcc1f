//! 教职工档案实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub staff_number: String,
    pub date_employed: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(has_many = "super::staff_courses::Entity")]
    StaffCourses,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::staff_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StaffCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_staff(self) -> crate::models::staff::entities::StaffMember {
        use crate::models::staff::entities::StaffMember;
        use chrono::{DateTime, Utc};

        StaffMember {
            id: self.id,
            user_id: self.user_id,
            staff_number: self.staff_number,
            date_employed: DateTime::<Utc>::from_timestamp(self.date_employed, 0)
                .unwrap_or_default(),
        }
    }
}
