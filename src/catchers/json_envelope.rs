use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::Request;

/// Framework-level failures (unknown route, oversized body, ...) use the same
/// `{success, error}` envelope as the enquiry endpoint.
#[catch(default)]
pub fn json_error(status: Status, request: &Request) -> (Status, Json<serde_json::Value>) {
    tracing::warn!(
        status = status.code,
        method = %request.method(),
        uri = %request.uri(),
        "Request failed before reaching a handler"
    );
    let reason = status.reason().unwrap_or("Request failed");
    (
        status,
        Json(serde_json::json!({ "success": false, "error": reason })),
    )
}
