pub mod check_in;
pub mod health;

use axum::{
    http::{Method, StatusCode, Uri},
    Json,
};
use serde_json::{json, Value};

pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Route not found",
            "path": uri.path(),
            "method": method.as_str(),
        })),
    )
}
