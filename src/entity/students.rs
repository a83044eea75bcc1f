//! 学生档案实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub index_number: String,
    pub date_admitted: i64,
    pub status: String,
    pub year: String,
    pub program_id: Option<i64>,
    pub hall_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::programs::Entity",
        from = "Column::ProgramId",
        to = "super::programs::Column::Id"
    )]
    Programs,
    #[sea_orm(
        belongs_to = "super::halls::Entity",
        from = "Column::HallId",
        to = "super::halls::Column::Id"
    )]
    Halls,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::responses::Entity")]
    Responses,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::programs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Programs.def()
    }
}

impl Related<super::halls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Halls.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::responses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Responses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::{SchoolYear, Student, StudentStatus};
        use chrono::{DateTime, Utc};

        Student {
            id: self.id,
            user_id: self.user_id,
            index_number: self.index_number,
            date_admitted: DateTime::<Utc>::from_timestamp(self.date_admitted, 0)
                .unwrap_or_default(),
            status: self
                .status
                .parse::<StudentStatus>()
                .unwrap_or(StudentStatus::Enrolled),
            year: self
                .year
                .parse::<SchoolYear>()
                .unwrap_or(SchoolYear::Freshman),
            program_id: self.program_id,
            hall_id: self.hall_id,
        }
    }
}
