use serde::{Deserialize, Serialize};

/// One course offering from the syllabus catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusRecord {
    pub year: i32,
    pub season: String,
    pub day: String,
    pub period: String,
    pub teacher: String,
    pub name: String,
    /// Unique within one result set, used as the list key
    pub lecture_id: String,
    pub credits: f64,
    pub url: String,
    #[serde(rename = "type")]
    pub course_type: String,
    pub faculty: String,
}

impl SyllabusRecord {
    /// Instructor and offering faculty, e.g. `Smith (CS)`
    pub fn description(&self) -> String {
        format!("{} ({})", self.teacher, self.faculty)
    }

    pub fn schedule_line(&self) -> String {
        format!(
            "年度: {}, {}, 曜日: {}, 時限: {}, 単位: {}",
            self.year, self.season, self.day, self.period, self.credits
        )
    }

    pub fn category_line(&self) -> String {
        format!("科目区分: {}", self.course_type)
    }
}
