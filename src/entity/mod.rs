//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod announcements;
pub mod answers;
pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod exams;
pub mod feedbacks;
pub mod grades;
pub mod halls;
pub mod notifications;
pub mod program_courses;
pub mod programs;
pub mod questions;
pub mod reports;
pub mod responses;
pub mod schedules;
pub mod staff;
pub mod staff_courses;
pub mod students;
pub mod users;
