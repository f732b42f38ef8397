//! Wire payloads for the backend catalog API.

#[derive(Debug, serde::Serialize)]
pub(super) struct CreateCategoryRequest<'a> {
    pub(super) name: &'a str,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct ErrorBody {
    pub(super) error: String,

    #[serde(default)]
    pub(super) code: Option<String>,
}
