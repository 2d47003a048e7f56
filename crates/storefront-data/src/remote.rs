//! HTTP catalog API client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use storefront_catalog::{Category, Product, ProductFilters};

use crate::error::FetchError;
use crate::store::{CatalogStore, FetchResult};
use crate::timeout::TimeoutConfig;

const API_PREFIX: [&str; 2] = ["api", "v1"];
const CATEGORIES: &str = "categories";
const PRODUCTS: &str = "products";

/// Catalog store backed by the HTTP catalog API.
///
/// Non-success responses surface as [`FetchError::Http`]; a 404 on a
/// by-slug endpoint means not found and resolves to `None`. No retries.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: Client,
    base_url: Url,
    timeout: TimeoutConfig,
}

impl RemoteStore {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: &str, timeout: TimeoutConfig) -> FetchResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .connect_timeout(timeout.connect)
            .timeout(timeout.total)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Build `{base}/api/v1/{resource}[/{slug}]`. The slug is percent-encoded.
    fn endpoint(&self, resource: &str, slug: Option<&str>) -> FetchResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().extend(API_PREFIX).push(resource);
            if let Some(slug) = slug {
                segments.push(slug);
            }
        }
        Ok(url)
    }

    /// GET a JSON document. `Ok(None)` on 404 when `not_found_is_none` is set.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&'static str, String)],
        not_found_is_none: bool,
    ) -> FetchResult<Option<T>> {
        let request = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query);

        let response = tokio::time::timeout(self.timeout.total, async move {
            let response = request.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, body))
        })
        .await
        .map_err(|_| {
            tracing::warn!(url = %url, timeout = ?self.timeout.total, "catalog api timed out");
            FetchError::Timeout(self.timeout.total)
        })?
        .map_err(|e| self.map_transport_error(e))?;

        let (status, body) = response;
        tracing::debug!(url = %url, status = status.as_u16(), bytes = body.len(), "catalog api response");

        if status == StatusCode::NOT_FOUND && not_found_is_none {
            return Ok(None);
        }
        if !status.is_success() {
            let message = String::from_utf8_lossy(&body).trim().to_string();
            let message = if message.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                message
            };
            tracing::warn!(url = %url, status = status.as_u16(), "catalog api error");
            return Err(FetchError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let value = serde_json::from_slice(&body)?;
        Ok(Some(value))
    }

    fn map_transport_error(&self, e: reqwest::Error) -> FetchError {
        tracing::warn!(error = %e, "catalog api transport failure");
        if e.is_timeout() {
            FetchError::Timeout(self.timeout.total)
        } else {
            e.into()
        }
    }

    async fn get_required<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&'static str, String)],
    ) -> FetchResult<T> {
        self.get_json(url, query, false)
            .await?
            .ok_or_else(|| FetchError::Deserialization("empty response".to_string()))
    }
}

#[async_trait]
impl CatalogStore for RemoteStore {
    async fn list_categories(&self) -> FetchResult<Vec<Category>> {
        let url = self.endpoint(CATEGORIES, None)?;
        self.get_required(url, &[]).await
    }

    async fn category_by_slug(&self, slug: &str) -> FetchResult<Option<Category>> {
        let url = self.endpoint(CATEGORIES, Some(slug))?;
        self.get_json(url, &[], true).await
    }

    async fn list_products(&self, filters: &ProductFilters) -> FetchResult<Vec<Product>> {
        let url = self.endpoint(PRODUCTS, None)?;
        self.get_required(url, &filters.to_query_pairs()).await
    }

    async fn product_by_slug(&self, slug: &str) -> FetchResult<Option<Product>> {
        let url = self.endpoint(PRODUCTS, Some(slug))?;
        self.get_json(url, &[], true).await
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
