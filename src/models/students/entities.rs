use serde::{Deserialize, Serialize};

// 学籍状态
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum StudentStatus {
    Enrolled,  // 在读
    Deferred,  // 休学
    Graduated, // 毕业
    Withdrawn, // 退学
}

impl std::fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudentStatus::Enrolled => write!(f, "enrolled"),
            StudentStatus::Deferred => write!(f, "deferred"),
            StudentStatus::Graduated => write!(f, "graduated"),
            StudentStatus::Withdrawn => write!(f, "withdrawn"),
        }
    }
}

impl std::str::FromStr for StudentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enrolled" => Ok(StudentStatus::Enrolled),
            "deferred" => Ok(StudentStatus::Deferred),
            "graduated" => Ok(StudentStatus::Graduated),
            "withdrawn" => Ok(StudentStatus::Withdrawn),
            _ => Err(format!("Invalid student status: {s}")),
        }
    }
}

// 学年级别，课程也用它标记面向的年级
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SchoolYear {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

impl std::fmt::Display for SchoolYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchoolYear::Freshman => write!(f, "freshman"),
            SchoolYear::Sophomore => write!(f, "sophomore"),
            SchoolYear::Junior => write!(f, "junior"),
            SchoolYear::Senior => write!(f, "senior"),
        }
    }
}

impl std::str::FromStr for SchoolYear {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "freshman" => Ok(SchoolYear::Freshman),
            "sophomore" => Ok(SchoolYear::Sophomore),
            "junior" => Ok(SchoolYear::Junior),
            "senior" => Ok(SchoolYear::Senior),
            _ => Err(format!("Invalid school year: {s}")),
        }
    }
}

// 学生档案，账号信息在 users 表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub index_number: String,
    pub date_admitted: chrono::DateTime<chrono::Utc>,
    pub status: StudentStatus,
    pub year: SchoolYear,
    pub program_id: Option<i64>,
    pub hall_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for raw in ["enrolled", "deferred", "graduated", "withdrawn"] {
            let status: StudentStatus = raw.parse().unwrap();
            assert_eq!(status.to_string(), raw);
        }
    }

    #[test]
    fn school_year_rejects_unknown_values() {
        assert!("fifth".parse::<SchoolYear>().is_err());
    }
}
