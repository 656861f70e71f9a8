// API Integration Tests
//
// Purpose: Exercise every endpoint through the router without binding a socket
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use growth_scorer_rust::{create_router, AppState, GrowthAssessor};
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    // Helper: Create test app over the embedded tables
    fn create_test_app() -> axum::Router {
        create_router(AppState::from_assessor(GrowthAssessor::new()))
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Single Assessment
    // =========================================================================

    #[tokio::test]
    async fn test_assess_ok() {
        let response = create_test_app()
            .oneshot(post_json(
                "/api/growth/assess",
                serde_json::json!({"ageMonths": 24, "weightKg": "11.5", "heightCm": 92, "sex": "female"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_response(response).await;
        let waz = body["weight_for_age_z"].as_f64().unwrap();
        assert!((waz - 0.7268).abs() < 1e-3, "waz = {}", waz);
        assert_eq!(body["weight_status"], "Normal");
        assert_eq!(body["height_status"], "Normal");
        assert_eq!(body["secondary_indicator"], "weight_for_height");
    }

    #[tokio::test]
    async fn test_assess_validation_lists_all_fields() {
        let response = create_test_app()
            .oneshot(post_json(
                "/api/growth/assess",
                serde_json::json!({"age_months": -1, "weight_kg": "abc", "height_cm": 0, "sex": "unknown"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = json_response(response).await;
        let fields: Vec<&str> = body["violations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["age_months", "weight_kg", "height_cm", "sex"]);
    }

    #[tokio::test]
    async fn test_assess_wrong_json_types_still_listed_per_field() {
        let response = create_test_app()
            .oneshot(post_json(
                "/api/growth/assess",
                serde_json::json!({"age_months": true, "weight_kg": [1], "height_cm": 0, "sex": 7}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = json_response(response).await;
        assert!(body["error"].is_string());
        let violations = body["violations"].as_array().unwrap();
        let fields: Vec<&str> = violations
            .iter()
            .map(|v| v["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["age_months", "weight_kg", "height_cm", "sex"]);
        assert_eq!(violations[3]["reason"], "must be a string, got 7");
    }

    #[tokio::test]
    async fn test_assess_over_sixty_months_not_implemented() {
        let response = create_test_app()
            .oneshot(post_json(
                "/api/growth/assess",
                serde_json::json!({"age_months": 72, "weight_kg": 20, "height_cm": 115, "sex": "male"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        let body: Value = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("BMI-for-age"));
    }

    // =========================================================================
    // Section 3: Batch Assessment
    // =========================================================================

    #[tokio::test]
    async fn test_batch_mixed_results_in_order() {
        let measurements: Vec<Value> = (0..70)
            .map(|i| {
                if i == 5 {
                    serde_json::json!({"age_months": 12, "weight_kg": "x", "height_cm": 75, "sex": "f"})
                } else {
                    serde_json::json!({"age_months": 12, "weight_kg": 9.0, "height_cm": 75, "sex": "f"})
                }
            })
            .collect();

        let response = create_test_app()
            .oneshot(post_json(
                "/api/growth/batch",
                serde_json::json!({ "measurements": measurements }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_response(response).await;
        assert_eq!(body["count"], 70);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 70);
        assert!(results[0]["ok"].is_object());
        assert!(results[5]["error"].is_string());
        assert_eq!(results[5]["violations"][0]["field"], "weight_kg");
        assert!(results[6]["ok"].is_object());
    }

    // =========================================================================
    // Section 4: Reference Lookup
    // =========================================================================

    #[tokio::test]
    async fn test_reference_lookup_interpolates() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/growth/reference/hfa/male?key=15")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_response(response).await;
        assert_eq!(body["indicator"], "height_for_age");
        let m = body["m"].as_f64().unwrap();
        assert!((m - (75.7488 + 82.2587) / 2.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_reference_lookup_errors() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/growth/reference/bfa/female?key=72")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/growth/reference/wfa/other?key=12")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
