use crate::models::students::entities::SchoolYear;
use serde::{Deserialize, Serialize};

// 学期
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Semester {
    One,
    Two,
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Semester::One => write!(f, "one"),
            Semester::Two => write!(f, "two"),
        }
    }
}

impl std::str::FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one" => Ok(Semester::One),
            "two" => Ok(Semester::Two),
            _ => Err(format!("Invalid semester: {s}")),
        }
    }
}

// 课程
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub department_id: i64,
    pub credits: i32,
    /// 面向的年级
    pub year: SchoolYear,
    pub semester: Semester,
}

// 课程的每周时间安排
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,
    pub course_id: i64,
    /// monday ~ sunday
    pub day: String,
    /// HH:MM
    pub start_time: String,
    /// HH:MM
    pub end_time: String,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semester_round_trips_through_str() {
        for raw in ["one", "two"] {
            let sem: Semester = raw.parse().unwrap();
            assert_eq!(sem.to_string(), raw);
        }
        assert!("three".parse::<Semester>().is_err());
    }
}
