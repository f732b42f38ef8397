use anyhow::{Context, Result};

use crate::model::RemoteConfig;

mod error;
mod http_client;
mod types;

mod catalog_ops;

pub use self::error::CatalogError;

/// Typed call surface to the medley backend.
///
/// Pure request/response: no local state, no retries. Every failure maps to
/// a [`CatalogError`] and propagates unchanged to the caller.
pub struct CatalogClient {
    remote: RemoteConfig,
    client: reqwest::blocking::Client,
}

impl CatalogClient {
    pub fn new(remote: RemoteConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("medley")
            .build()
            .context("build reqwest client")?;
        Ok(Self { remote, client })
    }

    pub fn base_url(&self) -> &str {
        &self.remote.base_url
    }
}
