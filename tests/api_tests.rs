use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;

use service_advisor::dataset::{Dataset, Interaction};
use service_advisor::error::{AppError, AppResult};
use service_advisor::models::{RankedItem, UserId};
use service_advisor::routes::{create_router, AppState};
use service_advisor::services::ScoringEngine;

/// Engine stub answering a fixed script instead of a trained model
struct ScriptedEngine {
    items: Vec<RankedItem>,
    fail_with: Option<String>,
}

impl ScriptedEngine {
    fn ranking(items: Vec<RankedItem>) -> Self {
        Self {
            items,
            fail_with: None,
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            items: Vec::new(),
            fail_with: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl ScoringEngine for ScriptedEngine {
    async fn rank(&self, _user: &UserId, num_results: usize) -> AppResult<Vec<RankedItem>> {
        if let Some(message) = &self.fail_with {
            return Err(AppError::ScoringEngine(message.clone()));
        }
        Ok(self.items.iter().take(num_results).cloned().collect())
    }
}

fn test_dataset() -> Dataset {
    Dataset::from_interactions(vec![
        Interaction {
            user_id: UserId::new("42"),
            service: "S3".to_string(),
            interaction_type: "view".to_string(),
            rating: 4.0,
        },
        Interaction {
            user_id: UserId::new("42"),
            service: "EC2".to_string(),
            interaction_type: "deploy".to_string(),
            rating: 5.0,
        },
        Interaction {
            user_id: UserId::new("7"),
            service: "Lambda".to_string(),
            interaction_type: "invoke".to_string(),
            rating: 3.0,
        },
    ])
}

fn create_test_server(engine: ScriptedEngine) -> TestServer {
    // Catalog ids follow sorted service names: EC2 -> 0, Lambda -> 1, S3 -> 2.
    let state = AppState::new(test_dataset(), Arc::new(engine), 10);
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(ScriptedEngine::ranking(Vec::new()));
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_console_page_inlines_user_selector() {
    let server = create_test_server(ScriptedEngine::ranking(Vec::new()));

    let response = server.get("/").await;
    response.assert_status_ok();

    let page = response.text();
    assert!(page.contains(r#"<option value="7">User 7</option>"#));
    assert!(page.contains(r#"<option value="42">User 42</option>"#));
    // Numeric order, not string order: 7 before 42.
    assert!(page.find("User 7").unwrap() < page.find("User 42").unwrap());
}

#[tokio::test]
async fn test_get_recommendations_success() {
    let server = create_test_server(ScriptedEngine::ranking(vec![RankedItem {
        item_id: "0".to_string(),
        score: 0.873,
    }]));

    let response = server
        .post("/get_recommendations")
        .json(&json!({ "user_id": "42" }))
        .await;

    response.assert_status_ok();
    let payload: serde_json::Value = response.json();

    assert_eq!(payload["status"], "success");

    let history = payload["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["AWS Service"], "S3");
    assert_eq!(history[0]["Interaction Type"], "view");
    assert_eq!(history[0]["Rating"], 4.0);
    assert_eq!(history[1]["AWS Service"], "EC2");

    let recommendations = payload["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0]["service"], "EC2");
    assert_eq!(recommendations[0]["score"], 0.873);
}

#[tokio::test]
async fn test_engine_failure_answers_error_envelope_with_http_200() {
    let server = create_test_server(ScriptedEngine::failing("campaign offline"));

    let response = server
        .post("/get_recommendations")
        .json(&json!({ "user_id": "42" }))
        .await;

    response.assert_status_ok();
    let payload: serde_json::Value = response.json();

    assert_eq!(payload["status"], "error");
    assert!(payload["message"]
        .as_str()
        .unwrap()
        .contains("campaign offline"));
    assert!(payload["history"].as_array().unwrap().is_empty());
    assert!(payload["recommendations"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_user_gets_empty_history() {
    let server = create_test_server(ScriptedEngine::ranking(vec![RankedItem {
        item_id: "2".to_string(),
        score: 0.5,
    }]));

    let response = server
        .post("/get_recommendations")
        .json(&json!({ "user_id": "404" }))
        .await;

    response.assert_status_ok();
    let payload: serde_json::Value = response.json();

    assert_eq!(payload["status"], "success");
    assert!(payload["history"].as_array().unwrap().is_empty());
    assert_eq!(payload["recommendations"][0]["service"], "S3");
}

#[tokio::test]
async fn test_unknown_item_id_uses_fallback_name() {
    let server = create_test_server(ScriptedEngine::ranking(vec![RankedItem {
        item_id: "99".to_string(),
        score: 0.2,
    }]));

    let response = server
        .post("/get_recommendations")
        .json(&json!({ "user_id": "7" }))
        .await;

    let payload: serde_json::Value = response.json();
    assert_eq!(
        payload["recommendations"][0]["service"],
        "Unknown Service (99)"
    );
}
