use super::*;

// Error bodies carry a machine-readable `code` alongside the message so
// clients can classify without sniffing status lines.
fn error_json(status: StatusCode, code: &str, msg: &str) -> Response {
    (
        status,
        Json(serde_json::json!({"error": msg, "code": code})),
    )
        .into_response()
}

pub(super) fn not_found(msg: &str) -> Response {
    error_json(StatusCode::NOT_FOUND, "not_found", msg)
}

pub(super) fn invalid_argument(msg: &str) -> Response {
    error_json(StatusCode::BAD_REQUEST, "invalid_argument", msg)
}

pub(super) fn conflict(msg: &str) -> Response {
    error_json(StatusCode::CONFLICT, "conflict", msg)
}

pub(super) fn cancelled() -> Response {
    error_json(StatusCode::BAD_REQUEST, "cancelled", "selection cancelled")
}

pub(super) fn unauthorized() -> Response {
    error_json(StatusCode::UNAUTHORIZED, "unauthorized", "unauthorized")
}

pub(super) fn internal_error(err: anyhow::Error) -> Response {
    error_json(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal",
        &err.to_string(),
    )
}
