use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::assessment::lifecycle::LifecycleEventKind;
use crate::assessment::router::{assessment_router, results_handler, AnswerSubmission};

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("encode body")))
        .expect("request")
}

#[tokio::test]
async fn questions_route_lists_catalog_and_records_start() {
    let (engine, sink) = standard_engine();
    let router = assessment_router(engine);

    let response = router
        .oneshot(
            Request::get("/api/v1/assessment/questions")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["question_count"], 40);
    assert_eq!(payload["questions"].as_array().map(Vec::len), Some(40));
    assert!(payload["questions"][0]["options"]["D"].is_string());
    assert_eq!(sink.kinds(), vec![LifecycleEventKind::TestStarted]);
    assert_eq!(payload["session_id"], json!(sink.events()[0].session_id.0));
}

#[tokio::test]
async fn profiles_route_lists_table_entries() {
    let (engine, _sink) = standard_engine();
    let router = assessment_router(engine);

    let response = router
        .oneshot(
            Request::get("/api/v1/assessment/profiles")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let profiles = payload["profiles"].as_array().expect("profile list");
    assert!(profiles
        .iter()
        .any(|entry| entry["key"] == "IDC" && entry["name"] == "Persuasive Strategist"));
    assert!(profiles
        .iter()
        .any(|entry| entry["key"] == "C" && entry["arity"] == 1));
}

#[tokio::test]
async fn progress_route_reports_outstanding_questions() {
    let (engine, _sink) = standard_engine();
    let router = assessment_router(engine);

    let body = json!({
        "answers": {
            "0": { "D": 4, "I": 3, "S": 2, "C": 1 },
            "1": { "D": 4, "I": 3 }
        }
    });
    let response = router
        .oneshot(post_json("/api/v1/assessment/progress", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["answered"], 1);
    assert_eq!(payload["total"], 40);
    assert_eq!(payload["complete"], false);
    assert_eq!(payload["outstanding"][0], 1);
    assert_eq!(payload["outstanding"].as_array().map(Vec::len), Some(39));
}

#[tokio::test]
async fn results_route_returns_report_for_complete_answers() {
    let (engine, sink) = standard_engine();
    let router = assessment_router(engine);

    let body = json!({ "answers": uniform_answers([3, 4, 1, 2]) });
    let response = router
        .oneshot(post_json("/api/v1/assessment/results", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["profile_name"], "Persuasive Strategist");
    assert_eq!(payload["matched_key"], "IDC");
    assert_eq!(payload["ranking"], json!(["I", "D", "C", "S"]));
    assert_eq!(payload["chart"][0]["value"], 120);
    assert_eq!(payload["chart"][1]["color"], "#f97316");
    assert_eq!(sink.kinds(), vec![LifecycleEventKind::TestCompleted]);
}

#[tokio::test]
async fn results_handler_returns_unprocessable_for_incomplete_answers() {
    let (engine, sink) = standard_engine();
    let mut answers = uniform_answers([4, 3, 2, 1]);
    answers.remove(7);

    let response = results_handler(
        State(engine),
        axum::Json(AnswerSubmission {
            session_id: None,
            answers,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "question 8 is not fully answered");
    assert_eq!(payload["outstanding"], json!([7]));
    assert!(sink.events().is_empty());
}

#[tokio::test]
async fn results_route_rejects_duplicate_ranks() {
    let (engine, _sink) = standard_engine();
    let router = assessment_router(engine);

    let mut body = json!({ "answers": uniform_answers([4, 3, 2, 1]) });
    body["answers"]["5"] = json!({ "D": 4, "I": 4, "S": 2, "C": 1 });
    let response = router
        .oneshot(post_json("/api/v1/assessment/results", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["error"],
        "question 6 assigns rank 4 to more than one category"
    );
    assert_eq!(payload["outstanding"], json!([5]));
}

#[tokio::test]
async fn results_route_rejects_out_of_range_ranks_at_the_extractor() {
    let (engine, sink) = standard_engine();
    let router = assessment_router(engine);

    let body = json!({ "answers": { "0": { "D": 0, "I": 3, "S": 2, "C": 1 } } });
    let response = router
        .oneshot(post_json("/api/v1/assessment/results", body))
        .await
        .expect("route executes");

    assert!(response.status().is_client_error());
    assert!(sink.events().is_empty());
}

#[tokio::test]
async fn results_reuse_the_session_id_issued_with_the_questions() {
    let (engine, sink) = standard_engine();
    let router = assessment_router(engine);

    let questions = router
        .clone()
        .oneshot(
            Request::get("/api/v1/assessment/questions")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");
    let session_id = read_json_body(questions).await["session_id"].clone();
    assert!(session_id.is_string());

    let body = json!({
        "session_id": session_id,
        "answers": uniform_answers([4, 3, 2, 1]),
    });
    let response = router
        .oneshot(post_json("/api/v1/assessment/results", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["session_id"], session_id);

    let events = sink.events();
    assert_eq!(
        sink.kinds(),
        vec![
            LifecycleEventKind::TestStarted,
            LifecycleEventKind::TestCompleted
        ]
    );
    assert_eq!(events[0].session_id, events[1].session_id);
    assert_eq!(json!(events[1].session_id.0), session_id);
}
