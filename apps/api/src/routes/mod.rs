pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::documents::handlers as documents;
use crate::extraction::handlers as extraction;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Visa API
        .route("/api/v1/visa/countries", get(scoring::handle_list_countries))
        .route("/api/v1/visa/score", post(scoring::handle_score))
        // Documents API
        .route("/api/v1/documents/extract", post(extraction::handle_extract))
        .route(
            "/api/v1/documents/analyze",
            post(extraction::handle_analyze)
                .layer(DefaultBodyLimit::max(extraction::MAX_UPLOAD_BYTES)),
        )
        .route(
            "/api/v1/documents/generate",
            post(documents::handle_generate_document),
        )
        // Advisor API
        .route("/api/v1/chat", post(advisor::handle_chat))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use bytes::Bytes;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::Catalog;
    use crate::llm_client::{DisabledGenerator, LlmError, TextGenerator};
    use crate::ocr_client::{OcrError, OcrProvider};

    enum StubOcr {
        Text(&'static str),
        Fail,
    }

    #[async_trait]
    impl OcrProvider for StubOcr {
        async fn recognize(&self, _image: Bytes, _mime_type: &str) -> Result<String, OcrError> {
            match self {
                StubOcr::Text(text) => Ok(text.to_string()),
                StubOcr::Fail => Err(OcrError::NoResults),
            }
        }
    }

    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        fn provider(&self) -> &'static str {
            "echo"
        }

        async fn generate(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
            Ok(format!("echo: {}", prompt.lines().next().unwrap_or_default()))
        }
    }

    fn router(ocr: StubOcr, llm: Arc<dyn TextGenerator>) -> Router {
        build_router(AppState {
            catalog: Arc::new(Catalog::builtin().expect("builtin catalog")),
            ocr: Arc::new(ocr),
            llm,
        })
    }

    fn offline_router() -> Router {
        router(StubOcr::Fail, Arc::new(DisabledGenerator))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
            .expect("request")
    }

    const BOUNDARY: &str = "visaverse-test-boundary";

    fn post_upload(document_type: Option<&str>, file: Option<&[u8]>) -> Request<Body> {
        let mut body = Vec::new();
        if let Some(document_type) = document_type {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"type\"\r\n\r\n{document_type}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some(file) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"scan.png\"\r\nContent-Type: image/png\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(file);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/documents/analyze")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("request")
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.expect("router dispatch");
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload = serde_json::from_slice(&body).expect("json");
        (status, payload)
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("request");
        let (status, body) = send(offline_router(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["generator"], "disabled");
    }

    #[tokio::test]
    async fn test_list_countries() {
        let request = Request::builder()
            .uri("/api/v1/visa/countries")
            .body(Body::empty())
            .expect("request");
        let (status, body) = send(offline_router(), request).await;
        assert_eq!(status, StatusCode::OK);
        let countries = body["countries"].as_array().expect("countries array");
        assert_eq!(countries.len(), 5);
        assert_eq!(countries[0]["id"], "Germany");
        assert_eq!(countries[0]["visaType"], "EU Blue Card");
        assert_eq!(countries[0]["requirements"][0]["weight"], 25);
    }

    #[tokio::test]
    async fn test_score_profile() {
        let request = post_json(
            "/api/v1/visa/score",
            json!({
                "countryId": "Germany",
                "profile": {
                    "hasDegree": true,
                    "degreeLevel": "Master's",
                    "hasJobOffer": true,
                    "yearsExperience": 5,
                    "languageScores": { "english": 7 },
                    "fieldOfWork": "Technology",
                    "passportCountry": "India"
                }
            }),
        );
        let (status, body) = send(offline_router(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["country"], "Germany");
        assert_eq!(body["bonusPoints"], 16);
        // 22.5 + 30 + 15 + 0 + 0 + 9 = 76.5, plus 16
        assert_eq!(body["score"], 93);
        assert_eq!(body["competitiveLevel"], "High");
        assert_eq!(
            body["missingRequirements"],
            json!(["Health Insurance", "Clean Criminal Record"])
        );
    }

    async fn score(country_id: &str, profile: Value) -> (StatusCode, Value) {
        let request = post_json(
            "/api/v1/visa/score",
            json!({ "countryId": country_id, "profile": profile }),
        );
        send(offline_router(), request).await
    }

    #[tokio::test]
    async fn test_score_floors_fractional_experience() {
        let (status, fractional) = score("Germany", json!({ "yearsExperience": 2.5 })).await;
        assert_eq!(status, StatusCode::OK);
        let (_, whole) = score("Germany", json!({ "yearsExperience": 2 })).await;
        assert_eq!(fractional["score"], whole["score"]);
    }

    #[tokio::test]
    async fn test_score_saturates_out_of_range_age() {
        let (status, body) = score("Canada", json!({ "age": 5000000000u64 })).await;
        assert_eq!(status, StatusCode::OK);
        let score = body["score"].as_u64().expect("score");
        assert!((5..=100).contains(&score));
    }

    #[tokio::test]
    async fn test_score_treats_null_age_as_absent() {
        let (status, with_null) = score("Canada", json!({ "age": null, "hasDegree": true })).await;
        assert_eq!(status, StatusCode::OK);
        let (_, without) = score("Canada", json!({ "hasDegree": true })).await;
        assert_eq!(with_null["score"], without["score"]);
    }

    #[tokio::test]
    async fn test_score_treats_null_flag_as_false() {
        let (status, body) = score("Germany", json!({ "hasDegree": null })).await;
        assert_eq!(status, StatusCode::OK);
        let missing = body["missingRequirements"].as_array().expect("missing");
        assert!(missing.contains(&json!("University Degree")));
    }

    #[tokio::test]
    async fn test_score_unknown_country() {
        let request = post_json(
            "/api/v1/visa/score",
            json!({ "countryId": "Atlantis", "profile": {} }),
        );
        let (status, body) = send(offline_router(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "UNKNOWN_COUNTRY");
    }

    #[tokio::test]
    async fn test_extract_text() {
        let request = post_json(
            "/api/v1/documents/extract",
            json!({ "rawText": "Reach me at jane@example.com", "documentType": "other" }),
        );
        let (status, body) = send(offline_router(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"],
            json!({ "Email": "jane@example.com", "_documentType": "other" })
        );
    }

    #[tokio::test]
    async fn test_extract_defaults_to_passport_mode() {
        let request = post_json("/api/v1/documents/extract", json!({ "rawText": "MALE" }));
        let (status, body) = send(offline_router(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["Gender"], "Male");
        assert_eq!(body["data"]["_documentType"], "passport");
    }

    #[tokio::test]
    async fn test_analyze_uses_ocr_text() {
        let app = router(
            StubOcr::Text("Jane Doe\nSoftware Engineer\n4 years of Rust"),
            Arc::new(DisabledGenerator),
        );
        let (status, body) = send(app, post_upload(Some("work"), Some(b"fake-png"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["provider"], "ocr.space");
        assert_eq!(body["data"]["Name"], "Jane Doe");
        assert_eq!(body["data"]["Experience"], "4 years");
        assert!(body["rawText"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_analyze_short_ocr_text_falls_back_to_demo() {
        let app = router(StubOcr::Text("  ab  "), Arc::new(DisabledGenerator));
        let (status, body) = send(app, post_upload(Some("work"), Some(b"fake-png"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["provider"], "demo");
        assert_eq!(body["data"]["Company"], "Tech Corp Inc.");
        assert!(body.get("rawText").is_none());
    }

    #[tokio::test]
    async fn test_analyze_ocr_failure_falls_back_to_demo() {
        let (status, body) = send(offline_router(), post_upload(None, Some(b"fake-png"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["provider"], "demo");
        assert_eq!(body["data"]["Document Number"], "X12345678");
    }

    #[tokio::test]
    async fn test_analyze_accepts_large_photo() {
        let photo = vec![0xAB_u8; 3 * 1024 * 1024];
        let request = post_upload(Some("passport"), Some(&photo));
        let (status, body) = send(offline_router(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["provider"], "demo");
        assert_eq!(body["data"]["Document Number"], "X12345678");
    }

    #[tokio::test]
    async fn test_analyze_without_file() {
        let (status, body) = send(offline_router(), post_upload(Some("work"), None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_document_template_fallback() {
        let request = post_json(
            "/api/v1/documents/generate",
            json!({ "type": "sop", "country": "Germany", "profile": { "yearsExperience": 6 } }),
        );
        let (status, body) = send(offline_router(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["provider"], "template");
        let content = body["content"].as_str().expect("content");
        assert!(content.starts_with("Statement of Purpose"));
        assert!(content.contains("With 6 years of experience"));
    }

    #[tokio::test]
    async fn test_generate_document_with_generator() {
        let app = router(StubOcr::Fail, Arc::new(EchoGenerator));
        let request = post_json(
            "/api/v1/documents/generate",
            json!({ "type": "cover_letter", "country": "UAE" }),
        );
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["provider"], "echo");
        assert_eq!(
            body["content"],
            "echo: Write a professional cover letter for a visa application to UAE."
        );
    }

    #[tokio::test]
    async fn test_chat_requires_a_message() {
        let request = post_json("/api/v1/chat", json!({ "country": "Canada" }));
        let (status, body) = send(offline_router(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_chat_canned_reply() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let expected =
            crate::advisor::canned_reply("Where should I rent?", Some("Canada"), &catalog.advisor)
                .to_string();

        let request = post_json(
            "/api/v1/chat",
            json!({
                "messages": [{ "role": "user", "content": "Where should I rent?" }],
                "country": "Canada"
            }),
        );
        let (status, body) = send(offline_router(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["provider"], "template");
        assert_eq!(body["message"], expected);
    }

    #[tokio::test]
    async fn test_chat_with_generator() {
        let app = router(StubOcr::Fail, Arc::new(EchoGenerator));
        let request = post_json("/api/v1/chat", json!({ "message": "hello" }));
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["provider"], "echo");
        assert_eq!(body["message"], "echo: User moving to: Germany");
    }
}
