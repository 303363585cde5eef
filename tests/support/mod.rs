pub mod mock_syllabus_service;

pub use mock_syllabus_service::{MockSyllabusService, RecordedRequest};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// One service record as JSON, in the shape the real service sends
pub fn record_json(id: usize, name: &str, teacher: &str) -> serde_json::Value {
    serde_json::json!({
        "year": 2024,
        "season": "Spring",
        "day": "Mon",
        "period": "2",
        "teacher": teacher,
        "name": name,
        "lectureId": format!("L{}", id),
        "credits": 3,
        "url": format!("https://x/L{}", id),
        "type": "Lecture",
        "faculty": "CS",
    })
}
