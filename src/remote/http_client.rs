use super::error::map_failure;
use super::*;

impl CatalogClient {
    pub(super) fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> reqwest::blocking::RequestBuilder {
        let mut rb = self.client.request(method, self.url(path));
        if let Some(token) = &self.remote.token {
            rb = rb.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
        }
        rb
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.remote.base_url.trim_end_matches('/'), path)
    }

    /// Send and demand a success status; anything else becomes a
    /// [`CatalogError`] via the body's `code` or the status.
    pub(super) fn send_ok(
        &self,
        rb: reqwest::blocking::RequestBuilder,
        label: &str,
    ) -> Result<reqwest::blocking::Response, CatalogError> {
        let resp = rb.send().map_err(|e| CatalogError::transport(label, e))?;
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.bytes().unwrap_or_default();
        Err(map_failure(status, &body, label))
    }
}
