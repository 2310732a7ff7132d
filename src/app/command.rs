use crate::domain::models::ProductFilters;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Debounced; owned by the suggestion controller
    ScheduleSuggestions { seq: u64, query: String },
    CancelSuggestions,
    // A form submission: drops any pending suggestion fetch, then loads
    SubmitSearch(ProductFilters),
    LoadProducts(ProductFilters),
    LoadAdminStatus,
    StartScrape,
    CopyToClipboard(String),
}
