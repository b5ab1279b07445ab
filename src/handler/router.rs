//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: logs the request line, picks
//! the resource family by path prefix, routes to a CRUD operation, and
//! holds the outermost safety net turning any escaped failure into a
//! generic 500 so no request ever leaves without a response.

use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

use crate::config::AppState;
use crate::logger;
use crate::resource::{self, ResourceKind};

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        logger::log_request(method.as_str(), &path);
    }

    // 1. Dispatch by top-level resource prefix
    let Some(kind) = select_resource(&path) else {
        logger::log_warning(&format!("Route not found: {method} {path}"));
        return Ok(resource::route_not_found());
    };

    // 2. Match a CRUD operation within the resource family
    let Some(op) = resource::route(&method, &path, kind) else {
        logger::log_warning(&format!("Route not found: {method} {path}"));
        return Ok(resource::route_not_found());
    };

    // 3. Accumulate the request body to completion where the operation
    //    consumes one
    let body = if op.wants_body() {
        match req.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) => {
                logger::log_error(&format!("Failed to read request body: {e}"));
                return Ok(resource::internal_error());
            }
        }
    } else {
        Bytes::new()
    };

    // 4. Run the operation against the collection store
    Ok(resource::dispatch(op, kind, &state.collections, &body).await)
}

/// Pick the resource family a path belongs to by its top-level prefix
fn select_resource(path: &str) -> Option<&'static ResourceKind> {
    if path.starts_with("/questions") {
        Some(&resource::QUESTIONS)
    } else if path.starts_with("/answers") {
        Some(&resource::ANSWERS)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LoggingConfig, ServerConfig, StorageConfig};
    use crate::storage::MemoryStore;
    use hyper::{Method, StatusCode};
    use serde_json::{json, Value};

    fn test_state() -> Arc<AppState> {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                workers: None,
            },
            storage: StorageConfig {
                data_dir: "data".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
                access_log_file: None,
                error_log_file: None,
            },
        };
        let blobs = MemoryStore::new()
            .seed("questions", "[]")
            .seed("answers", "[]");
        Arc::new(AppState::with_store(&config, Arc::new(blobs)))
    }

    async fn send(
        state: &Arc<AppState>,
        method: Method,
        path: &str,
        body: &str,
    ) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(Full::new(Bytes::from(body.to_string())))
            .expect("request");
        let response = handle_request(req, Arc::clone(state))
            .await
            .expect("infallible");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("collect")
            .to_bytes();
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn test_unmatched_route_is_404() {
        let state = test_state();
        let (status, body) = send(&state, Method::GET, "/unknown", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Route not found"}));
    }

    #[tokio::test]
    async fn test_unmatched_method_on_resource_is_404() {
        let state = test_state();
        let (status, body) = send(&state, Method::PATCH, "/questions/1", "{}").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Route not found"}));
    }

    #[tokio::test]
    async fn test_full_crud_scenario() {
        let state = test_state();

        let (status, body) =
            send(&state, Method::POST, "/questions", r#"{"title":"Q1"}"#).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 1, "title": "Q1"}));

        let (status, body) = send(&state, Method::GET, "/questions/1", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 1, "title": "Q1"}));

        let (status, body) = send(
            &state,
            Method::PUT,
            "/questions/1",
            r#"{"title":"Q1-edited"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 1, "title": "Q1-edited"}));

        let (status, body) = send(&state, Method::DELETE, "/questions/1", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 1, "title": "Q1-edited"}));

        let (status, body) = send(&state, Method::GET, "/questions/1", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Question not found"}));
    }

    #[tokio::test]
    async fn test_collections_are_independent() {
        let state = test_state();

        send(&state, Method::POST, "/questions", r#"{"title":"Q1"}"#).await;
        let (status, body) = send(
            &state,
            Method::POST,
            "/answers",
            r#"{"question_id":1,"body":"A1"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], json!(1));

        let (_, questions) = send(&state, Method::GET, "/questions", "").await;
        let (_, answers) = send(&state, Method::GET, "/answers", "").await;
        assert_eq!(questions.as_array().map(Vec::len), Some(1));
        assert_eq!(answers.as_array().map(Vec::len), Some(1));

        let (status, body) = send(&state, Method::GET, "/answers/1", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"question_id": 1, "body": "A1", "id": 1}));
    }

    #[tokio::test]
    async fn test_answers_not_found_message() {
        let state = test_state();
        let (status, body) = send(&state, Method::GET, "/answers/3", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Answer not found"}));
    }

    #[tokio::test]
    async fn test_malformed_body_is_500() {
        let state = test_state();
        let (status, body) = send(&state, Method::POST, "/questions", "not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_id_with_trailing_garbage_routes_to_get() {
        let state = test_state();
        send(&state, Method::POST, "/questions", r#"{"title":"Q1"}"#).await;

        let (status, body) = send(&state, Method::GET, "/questions/1abc", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], json!(1));
    }
}
