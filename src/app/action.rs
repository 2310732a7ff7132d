use crate::app::command::Command;
use crate::app::state::AlertKind;
use crate::domain::models::{
    AdminStatus, FilterField, ProductFilters, ProductListing, SuggestionItem,
};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Focus / View ---
    FocusSearch,   // Jump into the search bar (/)
    FocusFilters,  // Jump into the filter sidebar (f)
    FocusProducts, // Back to the product cards
    CycleFocus,    // Tab
    ToggleAdmin,   // Catalog <-> admin view (a)
    CancelMode,    // ESC

    // --- Suggestions ---
    SearchKey(crossterm::event::KeyEvent), // Raw keystroke for the search input
    SearchInputChanged(String),            // Replace the whole input value
    SuggestionNext,
    SuggestionPrev,
    SuggestionSelected(usize),
    SubmitSearch,        // Enter in the search bar: highlighted suggestion or typed query
    OutsideClick,        // Pointer press outside the search widget
    SuggestionsLoaded {
        seq: u64,
        query: String,
        items: Vec<SuggestionItem>,
    },

    // --- Products ---
    SelectNextProduct,
    SelectPrevProduct,
    SelectProduct(usize),
    HoverProduct(Option<usize>),
    NextPage,
    PrevPage,
    ReloadProducts,
    // Both carry the filters they were requested with
    ProductsLoaded {
        filters: ProductFilters,
        listing: Box<ProductListing>,
    },
    ProductsFailed {
        filters: ProductFilters,
        message: String,
    },

    // --- Filters ---
    FilterCursorNext,
    FilterCursorPrev,
    FilterOptionNext, // Next choice for the select under the cursor
    FilterOptionPrev,
    FilterActivate,   // Enter on the sidebar row under the cursor
    CycleFilter(FilterField, isize),
    ClearFilters,

    // --- Admin ---
    StartScrape,
    RefreshAdmin,
    AdminStatusLoaded(AdminStatus),
    ScrapeStarted(AdminStatus),
    AdminFailed(String),

    // --- Lightbox ---
    OpenImageModal,
    CloseImageModal,

    // --- Alerts / Clipboard ---
    ShowAlert(String, AlertKind),
    DismissAlert,
    CopySelectedName,
    CopySelectedUrl,
}
