use crate::syllabus::client::Endpoint;
use serde::{Deserialize, Serialize};

/// The two filter checkboxes. They are independent: both, neither, or either
/// may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub by_name: bool,
    pub by_teacher: bool,
}

impl SearchFilters {
    pub fn mode(&self) -> SearchMode {
        SearchMode::from_filters(*self)
    }
}

/// Which search the filters select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    ByName,
    ByTeacher,
    /// Neither box checked
    Default,
}

impl SearchMode {
    /// Name beats teacher when both are checked
    pub fn from_filters(filters: SearchFilters) -> Self {
        if filters.by_name {
            SearchMode::ByName
        } else if filters.by_teacher {
            SearchMode::ByTeacher
        } else {
            SearchMode::Default
        }
    }

    pub fn endpoint(self) -> Endpoint {
        match self {
            SearchMode::ByName | SearchMode::Default => Endpoint::Course,
            SearchMode::ByTeacher => Endpoint::Teacher,
        }
    }
}
