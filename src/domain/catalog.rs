use crate::domain::models::{AdminStatus, ProductFilters, ProductListing, SuggestionItem};
use anyhow::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogService: Send + Sync {
    // `/api/search`: quick matches for the suggestion panel
    async fn search_suggestions(&self, query: &str, limit: usize) -> Result<Vec<SuggestionItem>>;

    // One page of the filtered listing, with the options for every select
    async fn list_products(&self, filters: &ProductFilters) -> Result<ProductListing>;

    async fn admin_status(&self) -> Result<AdminStatus>;

    // Kicks off a background scrape; the server answers with the admin page.
    async fn start_scrape(&self) -> Result<AdminStatus>;

    fn base_url(&self) -> String;
}
