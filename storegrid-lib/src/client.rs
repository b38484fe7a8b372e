//! Catalog HTTP client

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::error::ApiError;
use crate::model::Product;

/// Base URL of the public catalog.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Client for the product catalog API.
///
/// Cheap to clone (uses `Arc` internally) and safe to share across tasks.
///
/// # Example
///
/// ```ignore
/// let client = CatalogClient::builder()
///     .url(storegrid_lib::DEFAULT_BASE_URL)
///     .build()?;
///
/// let products = client.products().await?;
/// ```
#[derive(Clone, Debug)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

#[derive(Debug)]
struct CatalogClientInner {
    base_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl CatalogClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> CatalogClientBuilder<Missing> {
        CatalogClientBuilder::new()
    }

    /// Fetches the full product list, preserving the order the API returns.
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!(
            "{}/products",
            self.inner.base_url.as_str().trim_end_matches('/')
        );

        let mut request = self.inner.http_client.get(&url);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http(status, body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::parse_with_body(e.to_string(), body))
    }

    /// Fetches the product list with cancellation support.
    ///
    /// Returns [`ApiError::Cancelled`] as soon as the token fires; the
    /// in-flight request is dropped.
    pub async fn products_with_cancel(
        &self,
        cancel: CancellationToken,
    ) -> Result<Vec<Product>, ApiError> {
        tokio::select! {
            _ = cancel.cancelled() => Err(ApiError::Cancelled),
            result = self.products() => result,
        }
    }

    /// Returns the base URL of the catalog.
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`CatalogClient`].
///
/// Uses the typestate pattern so the base URL has to be set before `build`
/// is available.
pub struct CatalogClientBuilder<U> {
    url: U,
    timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl CatalogClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            http_client: None,
        }
    }

    /// Sets the catalog base URL.
    pub fn url(self, url: impl Into<String>) -> CatalogClientBuilder<Set<String>> {
        CatalogClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for CatalogClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> CatalogClientBuilder<U> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl CatalogClientBuilder<Set<String>> {
    /// Builds the [`CatalogClient`], validating the base URL.
    pub fn build(self) -> Result<CatalogClient, ApiError> {
        let base_url =
            Url::parse(&self.url.0).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let http_client = self.http_client.unwrap_or_default();

        Ok(CatalogClient {
            inner: Arc::new(CatalogClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}
