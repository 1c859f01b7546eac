//! Catalog service client
//!
//! `Catalog` is the seam between the fetcher and the remote REST API, so the
//! fetch pipeline can run against an in-memory catalog in tests.

use crate::config::{endpoint, GalleryConfig};
use crate::core::{CreatureRecord, DexNumber};
use crate::{DexError, Result};
use std::future::Future;
use std::time::Duration;

/// Source of creature records by dex number
pub trait Catalog: Send + Sync + 'static {
    fn fetch_creature(
        &self,
        id: DexNumber,
    ) -> impl Future<Output = Result<CreatureRecord>> + Send;
}

/// Catalog backed by the PokeAPI REST endpoint
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Client with no request timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("dexcards/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(HttpCatalog {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &GalleryConfig) -> Result<Self> {
        Self::with_timeout(config.base_url.clone(), config.timeout)
    }
}

impl Catalog for HttpCatalog {
    async fn fetch_creature(&self, id: DexNumber) -> Result<CreatureRecord> {
        let url = endpoint(&self.base_url, id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DexError::Status {
                id: id.get(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        CreatureRecord::from_json(&body).map_err(|source| DexError::Decode {
            id: id.get(),
            source,
        })
    }
}
