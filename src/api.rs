//! Transport handle: base URL, API version and the request function.

use crate::config::ClientConfig;
use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;


/// The request function behind a [`TransportHandle`].
///
/// Implementations issue one GET for `url` and return the decoded JSON
/// body. A non-success status is an error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Value, TransportError>;
}

/// [`Transport`] over a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured client, e.g. one with a timeout or proxy.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Value, TransportError> {
        let res = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(res.json::<Value>().await?)
    }
}

/// Base URL, version segment and request function shared by every manager.
///
/// Immutable after construction; clones share the same transport.
#[derive(Clone)]
pub struct TransportHandle {
    base_url: String,
    version: String,
    transport: Arc<dyn Transport>,
}

impl TransportHandle {
    pub fn new(
        base_url: impl Into<String>,
        version: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            version: version.into().trim_matches('/').to_string(),
            transport,
        }
    }

    /// Handle over an [`HttpTransport`] built from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config.user_agent)?;
        Ok(Self::new(
            config.base_url.as_str(),
            config.version.as_str(),
            Arc::new(transport),
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// `{base_url}/{version}/{path}`.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            self.version,
            path.trim_start_matches('/')
        )
    }

    /// Issue one GET for `path` relative to the versioned base.
    pub async fn get(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.url(path);
        tracing::debug!(%url, "dispatching request");
        self.transport.get(&url).await
    }
}

impl fmt::Debug for TransportHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportHandle")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
