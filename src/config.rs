use anyhow::{Context, Result};

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the `properties` resource lives under
    /// (default: `http://localhost:8080/api`).
    pub base_url: String,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                     |
    /// |--------------------|-----------------------------|
    /// | `PROPERTY_API_URL` | `http://localhost:8080/api` |
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("PROPERTY_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".to_string());

        Self::with_base_url(base_url)
    }

    fn with_base_url(base_url: String) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            anyhow::bail!("PROPERTY_API_URL must not be empty");
        }

        reqwest::Url::parse(&base_url)
            .with_context(|| format!("PROPERTY_API_URL is not a valid URL: '{}'", base_url))?;

        Ok(Self { base_url })
    }
}
