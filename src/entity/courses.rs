//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub code: String,
    pub department_id: i64,
    pub credits: i32,
    pub year: String,
    pub semester: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Departments,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::exams::Entity")]
    Exams,
    #[sea_orm(has_many = "super::schedules::Entity")]
    Schedules,
    #[sea_orm(has_many = "super::staff_courses::Entity")]
    StaffCourses,
    #[sea_orm(has_many = "super::program_courses::Entity")]
    ProgramCourses,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Departments.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::exams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exams.def()
    }
}

impl Related<super::schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl Related<super::staff_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StaffCourses.def()
    }
}

impl Related<super::program_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgramCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use crate::models::courses::entities::Course;
        use crate::models::students::entities::SchoolYear;
        use crate::models::courses::entities::Semester;

        Course {
            id: self.id,
            name: self.name,
            code: self.code,
            department_id: self.department_id,
            credits: self.credits,
            year: self
                .year
                .parse::<SchoolYear>()
                .unwrap_or(SchoolYear::Freshman),
            semester: self.semester.parse::<Semester>().unwrap_or(Semester::One),
        }
    }
}
