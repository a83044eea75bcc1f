//! 学生作答记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "responses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub question_id: i64,
    pub selected_answer_id: i64,
    pub responded_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Students,
    #[sea_orm(
        belongs_to = "super::questions::Entity",
        from = "Column::QuestionId",
        to = "super::questions::Column::Id"
    )]
    Questions,
    #[sea_orm(
        belongs_to = "super::answers::Entity",
        from = "Column::SelectedAnswerId",
        to = "super::answers::Column::Id"
    )]
    Answers,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl Related<super::answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_response(self) -> crate::models::exams::entities::StudentResponse {
        use chrono::{DateTime, Utc};

        crate::models::exams::entities::StudentResponse {
            id: self.id,
            student_id: self.student_id,
            question_id: self.question_id,
            selected_answer_id: self.selected_answer_id,
            responded_at: DateTime::<Utc>::from_timestamp(self.responded_at, 0).unwrap_or_default(),
        }
    }
}
