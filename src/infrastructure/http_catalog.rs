use crate::domain::{
    catalog::CatalogService,
    models::{
        AdminStatus, FilterOptions, Product, ProductFilters, ProductListing, ProductPage,
        SearchResponse, SuggestionItem,
    },
};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

// `/api/products` caps `per_page` at 100
const SCAN_PAGE_SIZE: u32 = 100;
const MAX_SCAN_PAGES: u32 = 500;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{endpoint} returned {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    #[error("Could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Talks to the catalog web service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
    running_marker: String,
}

impl HttpCatalog {
    pub fn new(
        base_url: &str,
        running_marker: &str,
        timeout: Duration,
    ) -> std::result::Result<Self, CatalogError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CatalogError::InvalidBaseUrl(base_url));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            running_marker: running_marker.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn fetch_suggestions(
        &self,
        query: &str,
        limit: usize,
    ) -> std::result::Result<Vec<SuggestionItem>, CatalogError> {
        let response = self
            .client
            .get(self.url("/api/search"))
            .query(&[("q", query.to_string()), ("limit", limit.to_string())])
            .send()
            .await?;
        let response = check_status(response, "/api/search")?;
        let body: SearchResponse = response
            .json()
            .await
            .map_err(|source| CatalogError::Decode {
                endpoint: "/api/search",
                source,
            })?;
        Ok(body.products)
    }

    pub async fn fetch_product_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> std::result::Result<ProductPage, CatalogError> {
        let response = self
            .client
            .get(self.url("/api/products"))
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await?;
        let response = check_status(response, "/api/products")?;
        response
            .json()
            .await
            .map_err(|source| CatalogError::Decode {
                endpoint: "/api/products",
                source,
            })
    }

    /// Walks `/api/products` until the last page.
    pub async fn fetch_all_products(&self) -> std::result::Result<Vec<Product>, CatalogError> {
        let mut products = Vec::new();
        for page in 1..=MAX_SCAN_PAGES {
            let chunk = self.fetch_product_page(page, SCAN_PAGE_SIZE).await?;
            let done = !chunk.has_next || chunk.products.is_empty();
            products.extend(chunk.products);
            if done {
                return Ok(products);
            }
        }
        tracing::warn!(
            pages = MAX_SCAN_PAGES,
            "Catalog scan stopped early; listing is partial"
        );
        Ok(products)
    }

    /// The JSON API pages without filtering, so the listing form's filters
    /// and the select options are computed over the full catalog here.
    pub async fn fetch_products(
        &self,
        filters: &ProductFilters,
    ) -> std::result::Result<ProductListing, CatalogError> {
        let products = self.fetch_all_products().await?;
        let options = FilterOptions::from_products(&products);
        let matching: Vec<Product> = products
            .into_iter()
            .filter(|p| filters.matches(p))
            .collect();
        tracing::debug!(
            matching = matching.len(),
            page = filters.page,
            "Filtered catalog listing"
        );

        Ok(ProductListing {
            page: ProductPage::paginate(matching, filters.page, filters.per_page),
            options,
        })
    }

    pub async fn fetch_admin_status(&self) -> std::result::Result<AdminStatus, CatalogError> {
        let response = self.client.get(self.url("/admin")).send().await?;
        self.read_admin_page(response, "/admin").await
    }

    pub async fn trigger_scrape(&self) -> std::result::Result<AdminStatus, CatalogError> {
        // The server redirects back to /admin, which reqwest follows.
        let response = self.client.post(self.url("/admin/scrape")).send().await?;
        self.read_admin_page(response, "/admin/scrape").await
    }

    async fn read_admin_page(
        &self,
        response: Response,
        endpoint: &'static str,
    ) -> std::result::Result<AdminStatus, CatalogError> {
        let response = check_status(response, endpoint)?;
        let body = response
            .text()
            .await
            .map_err(|source| CatalogError::Decode { endpoint, source })?;
        Ok(AdminStatus::from_page(&body, &self.running_marker))
    }
}

fn check_status(
    response: Response,
    endpoint: &'static str,
) -> std::result::Result<Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(CatalogError::Status { endpoint, status })
    }
}

#[async_trait]
impl CatalogService for HttpCatalog {
    async fn search_suggestions(&self, query: &str, limit: usize) -> Result<Vec<SuggestionItem>> {
        Ok(self.fetch_suggestions(query, limit).await?)
    }

    async fn list_products(&self, filters: &ProductFilters) -> Result<ProductListing> {
        Ok(self.fetch_products(filters).await?)
    }

    async fn admin_status(&self) -> Result<AdminStatus> {
        Ok(self.fetch_admin_status().await?)
    }

    async fn start_scrape(&self) -> Result<AdminStatus> {
        Ok(self.trigger_scrape().await?)
    }

    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}
