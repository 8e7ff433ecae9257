//! HTTP client for the product catalog endpoint.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use storefront_core::RawProduct;

use crate::error::FetchError;
use crate::source::ProductSource;

/// HTTP client for a catalog endpoint that returns a JSON array of products.
///
/// Not-found (404) and any other non-2xx response surface as typed errors.
/// Nothing is retried; the configured request timeout is the only bound on
/// how long a fetch may take.
pub struct CatalogClient {
    client: Client,
    catalog_url: Url,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidCatalogUrl`] if `catalog_url` is not an absolute
    ///   `http` or `https` URL.
    /// - [`FetchError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed (e.g., invalid TLS config).
    pub fn new(catalog_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let catalog_url = Self::parse_catalog_url(catalog_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            catalog_url,
        })
    }

    #[must_use]
    pub fn catalog_url(&self) -> &str {
        self.catalog_url.as_str()
    }

    /// Fetches the full product list with a single `GET`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::NotFound`]: HTTP 404.
    /// - [`FetchError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`FetchError::Http`]: network or TLS failure, or the request timed out.
    /// - [`FetchError::Deserialize`]: body is not a JSON array of product records.
    pub async fn fetch_catalog(&self) -> Result<Vec<RawProduct>, FetchError> {
        let url = self.catalog_url.to_string();
        tracing::debug!(url = %url, "fetching product catalog");

        let response = self
            .client
            .get(self.catalog_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound { url });
        }

        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let products = serde_json::from_str::<Vec<RawProduct>>(&body).map_err(|e| {
            FetchError::Deserialize {
                context: format!("product catalog from {url}"),
                source: e,
            }
        })?;

        tracing::debug!(url = %url, count = products.len(), "product catalog fetched");
        Ok(products)
    }

    fn parse_catalog_url(raw: &str) -> Result<Url, FetchError> {
        let invalid = |reason: String| FetchError::InvalidCatalogUrl {
            url: raw.to_owned(),
            reason,
        };

        let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme \"{other}\""))),
        }
    }
}

impl ProductSource for CatalogClient {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<RawProduct>, FetchError>> + Send {
        self.fetch_catalog()
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
