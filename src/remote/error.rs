//! The remote-call error taxonomy and the one place wire failures are
//! converted into it.

use super::types::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("conflict: {0}")]
    Conflict(String),

    /// The user aborted the backend-side folder selection.
    #[error("selection cancelled")]
    Cancelled,

    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

impl CatalogError {
    pub(super) fn transport(label: &str, err: reqwest::Error) -> Self {
        CatalogError::Unknown(anyhow::Error::new(err).context(label.to_string()))
    }
}

/// Map a non-success response to the taxonomy.
///
/// The server tags error bodies with a `code`; that wins. Bare statuses
/// (a proxy, an older server) fall back to the obvious status mapping and
/// anything else is Unknown.
pub(super) fn map_failure(status: reqwest::StatusCode, body: &[u8], label: &str) -> CatalogError {
    let parsed: Option<ErrorBody> = serde_json::from_slice(body).ok();
    let msg = parsed
        .as_ref()
        .map(|b| b.error.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| status.to_string());

    if let Some(code) = parsed.and_then(|b| b.code) {
        match code.as_str() {
            "not_found" => return CatalogError::NotFound(msg),
            "invalid_argument" => return CatalogError::InvalidArgument(msg),
            "conflict" => return CatalogError::Conflict(msg),
            "cancelled" => return CatalogError::Cancelled,
            _ => {}
        }
    }

    match status {
        reqwest::StatusCode::NOT_FOUND => CatalogError::NotFound(msg),
        reqwest::StatusCode::BAD_REQUEST => CatalogError::InvalidArgument(msg),
        reqwest::StatusCode::CONFLICT => CatalogError::Conflict(msg),
        _ => CatalogError::Unknown(anyhow::anyhow!("{}: {} ({})", label, msg, status)),
    }
}

#[cfg(test)]
#[path = "../tests/remote/error_tests.rs"]
mod tests;
