//! 业务模型层，按资源分目录，每个目录内有 entities / requests / responses

pub mod announcements;
pub mod auth;
pub mod common;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod exams;
pub mod feedback;
pub mod grades;
pub mod notifications;
pub mod org;
pub mod reports;
pub mod staff;
pub mod students;
pub mod users;

pub use common::{ApiResponse, ErrorCode, PaginatedResponse, PaginationInfo, PaginationQuery};

// 进程启动时间，dashboard 接口用它计算运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
