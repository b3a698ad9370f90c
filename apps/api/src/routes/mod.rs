pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route(
            "/api/v1/matching/process-cv",
            post(handlers::handle_process_cv),
        )
        .route("/api/v1/matching/match", post(handlers::handle_match))
        .route(
            "/api/v1/matching/match/detailed",
            post(handlers::handle_match_detailed),
        )
        .route(
            "/api/v1/matching/match/batch",
            post(handlers::handle_match_batch),
        )
        .route("/api/v1/matching/rank", post(handlers::handle_rank))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;

    fn app() -> Router {
        let config = Config {
            reference_year: 2025,
            ..Config::default()
        };
        build_router(AppState::from_config(config).unwrap())
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn python_job() -> Value {
        json!({
            "title": "Backend Engineer",
            "requirements": "5+ years experience with Python and AWS, Bachelor's degree required"
        })
    }

    fn python_candidate() -> Value {
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "skills": ["Python", "AWS"],
            "total_experience_years": 5.0,
            "education": "Bachelor's degree"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "recruit-api");
    }

    #[tokio::test]
    async fn test_process_cv() {
        let (status, body) = post_json(
            "/api/v1/matching/process-cv",
            json!({ "cv_text": "John Smith\njohn@example.com\n5 years of experience in Python" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let data = &body["processed_data"];
        assert_eq!(data["email"], "john@example.com");
        assert_eq!(data["first_name"], "John");
        assert_eq!(data["total_experience_years"], 5.0);
        assert!(data["skills"]
            .as_array()
            .unwrap()
            .contains(&json!("Python")));
    }

    #[tokio::test]
    async fn test_process_cv_rejects_blank_text() {
        let (status, body) =
            post_json("/api/v1/matching/process-cv", json!({ "cv_text": "   " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_match_and_detailed_agree() {
        let payload = json!({ "candidate": python_candidate(), "job": python_job() });
        let (status, summary) = post_json("/api/v1/matching/match", payload.clone()).await;
        assert_eq!(status, StatusCode::OK);
        let (status, detailed) = post_json("/api/v1/matching/match/detailed", payload).await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(
            summary["matching_score"],
            detailed["match_details"]["overall_score"]
        );
        assert_eq!(detailed["match_details"]["breakdown"]["skills_match"], 1.0);
        assert_eq!(detailed["match_details"]["weights"]["skills"], 0.4);
    }

    #[tokio::test]
    async fn test_match_with_custom_weights() {
        let payload = json!({
            "candidate": python_candidate(),
            "job": python_job(),
            "weights": { "skills": 1.0, "experience": 0.0, "education": 0.0, "keyword": 0.0 }
        });
        let (status, body) = post_json("/api/v1/matching/match", payload).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matching_score"], 1.0);
    }

    #[tokio::test]
    async fn test_match_rejects_negative_weights() {
        let payload = json!({
            "candidate": python_candidate(),
            "job": python_job(),
            "weights": { "skills": -1.0, "experience": 0.0, "education": 0.0, "keyword": 0.0 }
        });
        let (status, body) = post_json("/api/v1/matching/match", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_CONFIGURATION");
    }

    #[tokio::test]
    async fn test_batch_preserves_order_and_ids() {
        let payload = json!({
            "pairs": [
                { "id": "a", "candidate": python_candidate(), "job": python_job() },
                { "id": 7, "candidate": {}, "job": {} }
            ]
        });
        let (status, body) = post_json("/api/v1/matching/match/batch", payload).await;
        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["id"], "a");
        assert_eq!(results[1]["id"], 7);
        assert_eq!(results[1]["matching_score"], 0.2);
    }

    #[tokio::test]
    async fn test_rank() {
        let payload = json!({
            "job": python_job(),
            "candidates": [
                { "candidate_id": 1, "candidate": { "first_name": "Empty" } },
                { "candidate_id": 2, "candidate": python_candidate() }
            ]
        });
        let (status, body) = post_json("/api/v1/matching/rank", payload).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_candidates"], 2);
        assert_eq!(body["qualified_candidates"], 1);
        assert_eq!(body["threshold"], 0.6);
        assert_eq!(body["matches"][0]["candidate_id"], 2);
        assert_eq!(body["matches"][0]["candidate_name"], "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_rank_rejects_threshold_out_of_range() {
        let payload = json!({ "job": python_job(), "candidates": [], "threshold": 1.2 });
        let (status, body) = post_json("/api/v1/matching/rank", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
