//! Grading API tests.

mod common;

use axum::http::StatusCode;
use common::fixtures;
use common::TestContext;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn fill_blank() -> Value {
    json!({ "type": "fill-blank", "prompt": "Het pigment heet ___", "answer": "chlorofyl" })
}

/// Test fuzzy grading of a fill-in-the-blank answer.
#[tokio::test]
async fn test_grade_fill_blank_fuzzy() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/grade")
        .json(&fixtures::grade_request(
            fill_blank(),
            json!({ "type": "fill-blank", "text": "Clorofyl" }),
        ))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["is_correct"], true);
    assert_eq!(body["score"], 1.0);
}

/// Test the exact matching mode override.
#[tokio::test]
async fn test_grade_fill_blank_exact() {
    let server = TestContext::new().server();
    let mut request = fixtures::grade_request(
        fill_blank(),
        json!({ "type": "fill-blank", "text": "Clorofyl" }),
    );
    request["matching_mode"] = json!("exact");

    let response = server.post("/api/grade").json(&request).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["is_correct"], false);
}

/// Test a choice answer.
#[tokio::test]
async fn test_grade_choice() {
    let server = TestContext::new().server();
    let question = json!({
        "type": "choice",
        "prompt": "Welk gas?",
        "options": ["Zuurstof", "Koolstofdioxide"],
        "correct": 1
    });

    let response = server
        .post("/api/grade")
        .json(&fixtures::grade_request(question, json!({ "type": "choice", "selected": 0 })))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["is_correct"], false);
    assert_eq!(body["score"], 0.0);
}

/// Test open answers report matched keywords and no verdict.
#[tokio::test]
async fn test_grade_open() {
    let server = TestContext::new().server();
    let question = json!({
        "type": "open",
        "prompt": "Leg uit",
        "keywords": ["zuurstof", "energie"]
    });

    let response = server
        .post("/api/grade")
        .json(&fixtures::grade_request(
            question,
            json!({ "type": "open", "text": "Planten maken zuurstof." }),
        ))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["is_correct"], Value::Null);
    assert_eq!(body["score"], 0.5);
    assert_eq!(body["matched_keywords"], json!(["zuurstof"]));
}

/// Test a question/answer kind mismatch is a bad request.
#[tokio::test]
async fn test_grade_kind_mismatch() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/grade")
        .json(&fixtures::grade_request(
            fill_blank(),
            json!({ "type": "true-false", "value": true }),
        ))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "bad_request");
}

/// Test grading a question taken straight from a parsed topic.
#[tokio::test]
async fn test_grade_parsed_question() {
    let server = TestContext::new().server();

    let topic: Value = server
        .get("/api/subjects/aardrijkskunde/topics/rivieren")
        .await
        .json();
    let question = topic["content"]["questions"][1].clone();
    assert_eq!(question["type"], "matching");

    let response = server
        .post("/api/grade")
        .json(&fixtures::grade_request(
            question,
            json!({
                "type": "matching",
                "pairs": [
                    { "term": "Rijn", "definition": "Zwitserland" },
                    { "term": "Maas", "definition": "Frankrijk" }
                ]
            }),
        ))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["is_correct"], true);
}
