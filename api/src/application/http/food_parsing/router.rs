use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_parser_status::{__path_get_parser_status, get_parser_status},
    match_candidates::{__path_match_candidates, match_candidates},
    parse_ai::{__path_parse_ai, parse_ai},
    parse_quick::{__path_parse_quick, parse_quick},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(parse_quick, parse_ai, match_candidates, get_parser_status))]
pub struct FoodParsingApiDoc;

pub fn food_parsing_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/food-parsing/quick", root_path), post(parse_quick))
        .route(&format!("{}/food-parsing/ai", root_path), post(parse_ai))
        .route(
            &format!("{}/food-parsing/match", root_path),
            post(match_candidates),
        )
        .route(
            &format!("{}/food-parsing/status", root_path),
            get(get_parser_status),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    use crate::{
        application::http::test::{configured_args, test_server},
        args::Args,
    };

    async fn completion_server(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    fn completion(content: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        }))
    }

    #[tokio::test]
    async fn test_blank_text_is_bad_request() {
        let server = test_server(Args::default());

        for route in ["/food-parsing/quick", "/food-parsing/ai"] {
            server
                .post(route)
                .json(&json!({ "text": "   " }))
                .await
                .assert_status(StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_unconfigured_quick_is_empty_and_ai_is_unavailable() {
        let server = test_server(Args::default());

        let response = server
            .post("/food-parsing/quick")
            .json(&json!({ "text": "съел яблоко" }))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"], json!([]));

        let response = server
            .post("/food-parsing/ai")
            .json(&json!({ "text": "съел яблоко" }))
            .await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let message = response.json::<Value>()["message"].as_str().unwrap().to_string();
        assert!(message.contains("GIGACHAT_CLIENT_ID"));
    }

    #[tokio::test]
    async fn test_ai_parse_then_match() {
        let upstream = completion_server(completion(
            r#"{"products":[{"name":"яблоко","grams":150,"confidence":0.9},{"name":"банан","grams":120,"confidence":0.9}]}"#,
        ))
        .await;
        let server = test_server(configured_args(format!("{}/chat/completions", upstream.uri())));

        let response = server
            .post("/food-parsing/ai")
            .json(&json!({ "text": "съел яблоко и банан" }))
            .await;
        response.assert_status_ok();
        let candidates = response.json::<Value>()["data"].clone();
        assert_eq!(candidates.as_array().unwrap().len(), 2);

        let response = server
            .post("/food-parsing/match")
            .json(&json!({ "candidates": candidates }))
            .await;
        response.assert_status_ok();
        let items = response.json::<Value>()["data"].clone();
        assert_eq!(items[0]["product_id"], "1");
        assert_eq!(items[0]["kcal"], 78.0);
        assert_eq!(items[1]["product_id"], "6");
        assert_eq!(items[1]["kcal"], 106.8);
    }

    #[tokio::test]
    async fn test_match_unknown_candidate() {
        let server = test_server(Args::default());

        let response = server
            .post("/food-parsing/match")
            .json(&json!({ "candidates": [{"name": "неизвестный продукт", "grams": 90, "confidence": 0.7}] }))
            .await;

        let items = response.json::<Value>()["data"].clone();
        assert_eq!(items[0]["product_id"], "unknown");
        assert_eq!(items[0]["grams"], 90.0);
        assert_eq!(items[0]["kcal"], 0.0);
    }

    #[tokio::test]
    async fn test_upstream_errors_are_mapped() {
        let cases = [
            (ResponseTemplate::new(401), StatusCode::BAD_GATEWAY),
            (ResponseTemplate::new(429), StatusCode::TOO_MANY_REQUESTS),
            (ResponseTemplate::new(500), StatusCode::BAD_GATEWAY),
            (completion("не знаю"), StatusCode::BAD_GATEWAY),
        ];

        for (template, status) in cases {
            let upstream = completion_server(template).await;
            let server =
                test_server(configured_args(format!("{}/chat/completions", upstream.uri())));

            server
                .post("/food-parsing/ai")
                .json(&json!({ "text": "съел яблоко" }))
                .await
                .assert_status(status);

            let response = server
                .post("/food-parsing/quick")
                .json(&json!({ "text": "съел яблоко" }))
                .await;
            response.assert_status_ok();
            assert_eq!(response.json::<Value>()["data"], json!([]));
        }
    }

    #[tokio::test]
    async fn test_parser_status() {
        let server = test_server(Args::default());

        let body: Value = server.get("/food-parsing/status").await.json();
        assert_eq!(body["data"]["enabled"], false);
        assert_eq!(body["data"]["available"], false);
        assert_eq!(body["data"]["credential"]["valid"], false);

        let upstream = completion_server(completion(r#"{"products":[]}"#)).await;
        let server = test_server(configured_args(format!("{}/chat/completions", upstream.uri())));

        let body: Value = server.get("/food-parsing/status").await.json();
        assert_eq!(body["data"]["enabled"], true);
        assert_eq!(body["data"]["available"], true);
        assert_eq!(body["data"]["credential"]["valid"], true);
    }
}
