// Response building module
// Every response this service emits is UTF-8 JSON

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use serde_json::json;

use crate::logger;

/// Build a JSON response from any serializable body
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return internal_error();
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            internal_error()
        })
}

/// Build a `{"message": ...}` response at the given status
pub fn message_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    json_response(status, &json!({ "message": message }))
}

/// 404 response for an unmatched method/path pair
pub fn route_not_found() -> Response<Full<Bytes>> {
    message_response(StatusCode::NOT_FOUND, "Route not found")
}

/// Generic 500 response; the outermost safety net when no more specific
/// error message is available
pub fn internal_error() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(
            r#"{"message":"Internal Server Error"}"#,
        )))
        .unwrap_or_else(|_| {
            Response::new(Full::new(Bytes::from(
                r#"{"message":"Internal Server Error"}"#,
            )))
        })
}
