use super::entities::{Department, Hall, Program};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DepartmentListResponse {
    pub items: Vec<Department>,
}

#[derive(Debug, Serialize)]
pub struct ProgramListResponse {
    pub items: Vec<Program>,
}

#[derive(Debug, Serialize)]
pub struct HallListResponse {
    pub items: Vec<Hall>,
}
