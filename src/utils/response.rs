use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// `{ success: true, error: false, data }`
pub fn success(status: StatusCode, data: Value) -> Response {
    (
        status,
        Json(json!({
            "success": true,
            "error": false,
            "data": data,
        })),
    )
        .into_response()
}

/// `{ success: false, data: null, error: { message } }`
///
/// `message` is a single string for most failures and a list of strings for
/// validation failures.
pub fn failure(status: StatusCode, message: impl Into<Value>) -> Response {
    (
        status,
        Json(json!({
            "success": false,
            "data": null,
            "error": { "message": message.into() },
        })),
    )
        .into_response()
}

pub fn unexpected() -> Response {
    failure(StatusCode::INTERNAL_SERVER_ERROR, "Sorry an error occurred")
}

pub fn malformed_id() -> Response {
    failure(StatusCode::BAD_REQUEST, "Url or Id is wrong!")
}

pub fn unauthorized() -> Response {
    failure(StatusCode::UNAUTHORIZED, "Invalid session token")
}
