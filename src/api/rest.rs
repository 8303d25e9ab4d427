use crate::api::traits::PropertyApi;
use crate::models::{Property, PropertyDraft, PropertyId};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// REST client for the properties resource.
///
/// All endpoints live under `{base_url}/properties`. Responses are parsed
/// as JSON without content-type checking; non-2xx statuses become errors.
pub struct RestPropertyApi {
    client: Client,
    base_url: String,
}

impl RestPropertyApi {
    /// Create a client for the resource rooted at `base_url`
    /// (e.g. `http://localhost:8080/api`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    fn collection_url(&self) -> String {
        format!("{}/properties", self.base_url)
    }

    fn record_url(&self, id: PropertyId) -> String {
        format!("{}/properties/{}", self.base_url, id)
    }
}

#[async_trait]
impl PropertyApi for RestPropertyApi {
    async fn list(&self) -> Result<Vec<Property>> {
        let url = self.collection_url();
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch property list")?;

        if !response.status().is_success() {
            anyhow::bail!("Property list request failed: {}", response.status());
        }

        response
            .json()
            .await
            .context("Failed to decode property list")
    }

    async fn get(&self, id: PropertyId) -> Result<Property> {
        let url = self.record_url(id);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch property {}", id))?;

        if !response.status().is_success() {
            anyhow::bail!("Property {} request failed: {}", id, response.status());
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to decode property {}", id))
    }

    async fn create(&self, draft: &PropertyDraft) -> Result<()> {
        let url = self.collection_url();
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .context("Failed to send create request")?;

        if !response.status().is_success() {
            anyhow::bail!("Create request failed: {}", response.status());
        }

        Ok(())
    }

    async fn update(&self, id: PropertyId, draft: &PropertyDraft) -> Result<()> {
        let url = self.record_url(id);
        debug!("PUT {}", url);

        // The body carries the path id so server-side checks line up.
        let body = draft.clone().with_id(id);

        let response = self
            .client
            .put(&url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Failed to send update for property {}", id))?;

        if !response.status().is_success() {
            anyhow::bail!("Update of property {} failed: {}", id, response.status());
        }

        Ok(())
    }

    async fn delete(&self, id: PropertyId) -> Result<()> {
        let url = self.record_url(id);
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send delete for property {}", id))?;

        if !response.status().is_success() {
            anyhow::bail!("Delete of property {} failed: {}", id, response.status());
        }

        Ok(())
    }
}
