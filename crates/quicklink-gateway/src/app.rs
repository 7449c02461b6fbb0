use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_links_handler, health_handler, home_handler, redirect_handler, stats_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Static routes win over `/{code}`, so a custom code equal to one of
    /// them cannot be reached through the redirect route.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(home_handler))
            .route("/health", get(health_handler))
            .route("/links", post(create_links_handler))
            .route("/stats", get(stats_handler))
            .route("/{code}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use quicklink_generator::SeqGenerator;
    use quicklink_registry::{ExpiryPolicy, LinkRegistry, RegistrySettings, SubmissionRequest};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    const BASE_URL: &str = "https://quick.link";

    fn test_router(settings: RegistrySettings) -> Router {
        let registry = LinkRegistry::with_settings(SeqGenerator::with_prefix("ql"), settings);
        App::router(AppState::new(Arc::new(registry), BASE_URL))
    }

    async fn send(router: &Router, request: Request<Body>) -> Response {
        router.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_links(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/links")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    #[tokio::test]
    async fn health() {
        let router = test_router(RegistrySettings::default());

        let response = send(&router, get("/health")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn shorten_redirect_and_count() {
        let router = test_router(RegistrySettings::default());

        let response = send(
            &router,
            post_links(json!({
                "links": [{ "long_url": "https://example.com", "validity_minutes": 1 }]
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let created = &body["results"][0];
        assert_eq!(created["status"], "created");
        assert_eq!(created["short_code"], "ql000000");
        assert_eq!(created["short_url"], "https://quick.link/ql000000");
        assert_eq!(created["long_url"], "https://example.com");

        let response = send(&router, get("/ql000000")).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), "https://example.com");

        let stats = body_json(send(&router, get("/stats")).await).await;
        assert_eq!(stats["links"][0]["short_code"], "ql000000");
        assert_eq!(stats["links"][0]["click_count"], 1);
    }

    #[tokio::test]
    async fn unknown_code_redirects_home() {
        let router = test_router(RegistrySettings::default());

        let response = send(&router, get("/zzzzzz")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn expired_code_redirects_home_when_strict() {
        let router = test_router(
            RegistrySettings::builder()
                .expiry(ExpiryPolicy::Strict)
                .build(),
        );

        send(
            &router,
            post_links(json!({
                "links": [{ "long_url": "https://example.com", "validity_minutes": 0 }]
            })),
        )
        .await;

        let response = send(&router, get("/ql000000")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let stats = body_json(send(&router, get("/stats")).await).await;
        assert_eq!(stats["links"][0]["click_count"], 0);
    }

    #[tokio::test]
    async fn batch_reports_each_link() {
        let router = test_router(RegistrySettings::default());

        let response = send(
            &router,
            post_links(json!({
                "links": [
                    { "long_url": "https://a.example" },
                    { "long_url": "not-a-url" },
                    { "long_url": "https://c.example", "custom_code": "mine" }
                ]
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0]["status"], "created");
        assert_eq!(results[1]["status"], "error");
        assert_eq!(results[1]["kind"], "invalid_url");
        assert_eq!(results[2]["short_code"], "mine");

        let stats = body_json(send(&router, get("/stats")).await).await;
        assert_eq!(stats["links"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn control_characters_in_url_fail_only_that_link() {
        let router = test_router(RegistrySettings::default());

        let response = send(
            &router,
            post_links(json!({
                "links": [
                    { "long_url": "https://a.example" },
                    { "long_url": "https://example.com/\u{1}x" },
                    { "long_url": "https://c.example" }
                ]
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let results = body["results"].as_array().unwrap();
        assert_eq!(results[0]["short_code"], "ql000000");
        assert_eq!(results[1]["status"], "error");
        assert_eq!(results[1]["kind"], "unusable_url");
        assert_eq!(results[2]["short_code"], "ql000001");

        let stats = body_json(send(&router, get("/stats")).await).await;
        let links = stats["links"].as_array().unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[1]["long_url"], "https://c.example");

        for _ in 0..3 {
            let response = send(&router, get("/ql000001")).await;
            assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        }
        let stats = body_json(send(&router, get("/stats")).await).await;
        assert_eq!(stats["links"][1]["click_count"], 3);
    }

    #[tokio::test]
    async fn stored_url_that_is_not_a_header_value_is_a_server_error() {
        // bypasses the gateway check by submitting to the registry directly
        let registry = Arc::new(LinkRegistry::new(SeqGenerator::with_prefix("ql")));
        registry.submit(vec![SubmissionRequest::builder()
            .long_url("https://example.com/\nx")
            .build()]);
        let router = App::router(AppState::new(registry, BASE_URL));

        let response = send(&router, get("/ql000000")).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::LOCATION).is_none());
        assert_eq!(
            body_json(response).await,
            json!({ "error": "stored url cannot be used as a redirect target" })
        );
    }

    #[tokio::test]
    async fn batch_size_is_capped() {
        let router = test_router(RegistrySettings::default());
        let links: Vec<Value> = (0..6)
            .map(|i| json!({ "long_url": format!("https://example{}.com", i) }))
            .collect();

        let response = send(&router, post_links(json!({ "links": links }))).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let stats = body_json(send(&router, get("/stats")).await).await;
        assert!(stats["links"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_batch_is_rejected() {
        let router = test_router(RegistrySettings::default());

        let response = send(&router, post_links(json!({ "links": [] }))).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "at least one link is required" })
        );
    }
}
