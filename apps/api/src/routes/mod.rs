pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Upper bound on request bodies, uploads included.
const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/analyze/upload",
            post(handlers::handle_analyze_upload),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt; // for `oneshot`

    use super::*;
    use crate::analysis::analyzer::Analyzer;
    use crate::llm_client::DisabledGenerator;

    const BOUNDARY: &str = "X-RESUME-BOUNDARY";

    fn test_app() -> Router {
        let analyzer = Analyzer::new(Arc::new(DisabledGenerator), Duration::from_secs(1));
        build_router(AppState {
            analyzer: Arc::new(analyzer),
        })
    }

    async fn extract_json(body: Body) -> Value {
        let bytes = axum::body::to_bytes(body, usize::MAX)
            .await
            .expect("Should read body");
        serde_json::from_slice(&bytes).expect("Should parse JSON")
    }

    fn json_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
        let mut body = String::new();
        for (name, file_name, content) in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match file_name {
                Some(file_name) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: text/plain\r\n\r\n"
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                )),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::builder()
            .method("POST")
            .uri("/api/v1/analyze/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = extract_json(response.into_body()).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["augmentation"], "disabled");
    }

    #[tokio::test]
    async fn test_analyze_json() {
        let request = json_request(json!({
            "resume_text": "JavaScript, React, experience, education",
            "job_description": "Looking for a JavaScript developer with React and Python skills"
        }));
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = extract_json(response.into_body()).await;
        assert_eq!(body["skillsMatch"]["score"], 67);
        assert_eq!(body["skillsMatch"]["missingSkills"], json!(["Python"]));
        assert_eq!(body["formatting"]["score"], 50);
        assert_eq!(body["rating"], "Fair");
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_resume() {
        let request = json_request(json!({
            "resume_text": "  ",
            "job_description": "Rust developer"
        }));
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = extract_json(response.into_body()).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_rejects_missing_field() {
        let request = json_request(json!({ "resume_text": "Rust developer" }));
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_plain_text_resume() {
        let request = multipart_request(&[
            ("resume", Some("resume.txt"), "JavaScript, React, experience, education"),
            (
                "jobDescription",
                None,
                "Looking for a JavaScript developer with React and Python skills",
            ),
        ]);
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = extract_json(response.into_body()).await;
        assert_eq!(body["skillsMatch"]["matchedSkills"], json!(["JavaScript", "React"]));
    }

    #[tokio::test]
    async fn test_upload_requires_both_fields() {
        let request = multipart_request(&[("resume", Some("resume.txt"), "Rust developer")]);
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = extract_json(response.into_body()).await;
        assert_eq!(
            body["error"]["message"],
            "Resume file and job description are required"
        );
    }

    #[tokio::test]
    async fn test_upload_rejects_pdf() {
        let request = multipart_request(&[
            ("resume", Some("resume.pdf"), "%PDF-1.4"),
            ("jobDescription", None, "Rust developer"),
        ]);
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
