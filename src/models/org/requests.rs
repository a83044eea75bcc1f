use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub head_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDepartmentRequest {
    pub name: Option<String>,
    pub head_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProgramRequest {
    pub name: String,
    pub description: Option<String>,
    pub department_id: Option<i64>,
    pub duration_semesters: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProgramRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub department_id: Option<i64>,
    pub duration_semesters: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct CreateHallRequest {
    pub name: String,
}
