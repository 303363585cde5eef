mod support;

use axum::http::StatusCode;
use support::{record_json, tracing_init, MockSyllabusService, RecordedRequest};
use syllabus_search::search::{Completion, SearchState};
use syllabus_search::syllabus::client::Endpoint;
use syllabus_search::syllabus::{SearchError, SyllabusApi, SyllabusClient, SyllabusRecord};

fn client_for(service: &MockSyllabusService) -> SyllabusClient {
    SyllabusClient::new(&service.base_url).expect("valid mock base URL")
}

/// Run one submission through the same begin/complete pair the page uses
async fn submit(state: &mut SearchState, client: &SyllabusClient) -> Option<Completion> {
    let request = state.begin_search()?;
    let outcome = request.send(client).await;
    Some(state.complete_search(request.ticket, outcome))
}

fn requested(endpoint: &str, name: &str) -> RecordedRequest {
    RecordedRequest {
        endpoint: endpoint.to_string(),
        name: Some(name.to_string()),
    }
}

#[tokio::test]
async fn test_course_search_by_name() {
    tracing_init();
    let service =
        MockSyllabusService::returning(serde_json::json!([record_json(1, "Algorithms", "Smith")]))
            .await;
    let client = client_for(&service);

    let mut state = SearchState::default();
    state.set_query("Algorithms".to_string());
    state.toggle_name_filter(true);

    assert_eq!(
        submit(&mut state, &client).await,
        Some(Completion::Applied { count: 1 })
    );
    assert_eq!(service.requests(), vec![requested("course", "Algorithms")]);

    let expected = SyllabusRecord {
        year: 2024,
        season: "Spring".to_string(),
        day: "Mon".to_string(),
        period: "2".to_string(),
        teacher: "Smith".to_string(),
        name: "Algorithms".to_string(),
        lecture_id: "L1".to_string(),
        credits: 3.0,
        url: "https://x/L1".to_string(),
        course_type: "Lecture".to_string(),
        faculty: "CS".to_string(),
    };
    assert_eq!(state.results(), &[expected]);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_teacher_search() {
    tracing_init();
    let service = MockSyllabusService::returning(serde_json::json!([])).await;
    let client = client_for(&service);

    let mut state = SearchState::default();
    state.set_query("Smith".to_string());
    state.toggle_teacher_filter(true);
    submit(&mut state, &client).await;

    assert_eq!(service.requests(), vec![requested("teacher", "Smith")]);
}

#[tokio::test]
async fn test_no_filter_searches_courses() {
    tracing_init();
    let service = MockSyllabusService::returning(serde_json::json!([])).await;
    let client = client_for(&service);

    let mut state = SearchState::default();
    state.set_query("Databases".to_string());
    submit(&mut state, &client).await;

    assert_eq!(service.requests(), vec![requested("course", "Databases")]);
}

#[tokio::test]
async fn test_both_filters_search_courses() {
    tracing_init();
    let service = MockSyllabusService::returning(serde_json::json!([])).await;
    let client = client_for(&service);

    let mut state = SearchState::default();
    state.set_query("Smith".to_string());
    state.toggle_name_filter(true);
    state.toggle_teacher_filter(true);
    submit(&mut state, &client).await;

    assert_eq!(service.requests(), vec![requested("course", "Smith")]);
}

#[tokio::test]
async fn test_empty_query_sends_nothing() {
    tracing_init();
    let service = MockSyllabusService::returning(serde_json::json!([])).await;
    let client = client_for(&service);

    let mut state = SearchState::default();
    state.toggle_teacher_filter(true);
    let before = state.clone();

    assert_eq!(submit(&mut state, &client).await, None);
    assert!(service.requests().is_empty());
    assert_eq!(state, before);
}

#[tokio::test]
async fn test_query_is_percent_encoded() {
    tracing_init();
    let service = MockSyllabusService::returning(serde_json::json!([])).await;
    let client = client_for(&service);

    client.search(Endpoint::Course, "データ 構造").await.unwrap();
    client.search(Endpoint::Teacher, "O'Neil & Co?").await.unwrap();

    assert_eq!(
        service.requests(),
        vec![
            requested("course", "データ 構造"),
            requested("teacher", "O'Neil & Co?"),
        ]
    );
}

#[tokio::test]
async fn test_results_keep_service_order_and_page_by_ten() {
    tracing_init();
    let body: Vec<serde_json::Value> = (1..=25)
        .map(|i| record_json(i, &format!("Course {}", i), "Smith"))
        .collect();
    let service = MockSyllabusService::returning(serde_json::Value::Array(body)).await;
    let client = client_for(&service);

    let mut state = SearchState::default();
    state.set_query("Course".to_string());
    submit(&mut state, &client).await;

    let ids: Vec<&str> = state
        .results()
        .iter()
        .map(|r| r.lecture_id.as_str())
        .collect();
    let expected: Vec<String> = (1..=25).map(|i| format!("L{}", i)).collect();
    assert_eq!(ids, expected);

    assert_eq!(state.page_count(), 3);
    let first_page: Vec<&str> = state
        .visible_results()
        .iter()
        .map(|r| r.lecture_id.as_str())
        .collect();
    assert_eq!(first_page, expected[..10]);

    state.change_page(3);
    assert_eq!(state.visible_results().len(), 5);
    assert_eq!(service.requests().len(), 1);
}

#[tokio::test]
async fn test_server_error_leaves_results_unchanged() {
    tracing_init();
    let service = MockSyllabusService::start(|_, name| {
        if name == "boom" {
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
        } else {
            (
                StatusCode::OK,
                serde_json::json!([record_json(1, "Algorithms", "Smith")]).to_string(),
            )
        }
    })
    .await;
    let client = client_for(&service);

    let mut state = SearchState::default();
    state.set_query("Algorithms".to_string());
    submit(&mut state, &client).await;
    let before = state.results().to_vec();

    state.set_query("boom".to_string());
    assert_eq!(
        submit(&mut state, &client).await,
        Some(Completion::Failed)
    );
    assert_eq!(state.results(), before.as_slice());
    assert!(!state.is_loading());

    match client.search(Endpoint::Course, "boom").await {
        Err(SearchError::Status(status)) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR.as_u16())
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_error() {
    tracing_init();
    let service =
        MockSyllabusService::start(|_, _| (StatusCode::OK, "<html>oops</html>".to_string())).await;
    let client = client_for(&service);

    match client.search(Endpoint::Course, "Algorithms").await {
        Err(SearchError::Decode(_)) => {}
        other => panic!("expected decode error, got {:?}", other),
    }

    let mut state = SearchState::default();
    state.set_query("Algorithms".to_string());
    assert_eq!(
        submit(&mut state, &client).await,
        Some(Completion::Failed)
    );
    assert!(state.results().is_empty());
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_unreachable_service_is_a_request_error() {
    tracing_init();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SyllabusClient::new(&format!("http://{}", addr)).unwrap();

    match client.search(Endpoint::Teacher, "Smith").await {
        Err(SearchError::Request(_)) => {}
        other => panic!("expected request error, got {:?}", other),
    }
}
