use super::config::Config;
use super::keymap::KeyMap;
use crate::theme::Theme;
use std::sync::Arc;

pub mod admin;
pub mod alert;
pub mod catalog;
pub mod input;
pub mod modal;
pub mod search;

// Re-exports
pub use admin::AdminState;
pub use alert::{Alert, AlertKind, AlertStack};
pub use catalog::{CatalogState, FilterOptions, CLEAR_FILTERS_ROW};
pub use input::AppTextArea;
pub use modal::ImageModalState;
pub use search::{SearchState, SuggestionPanel};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Browse,     // Navigating product cards
    Search,     // Typing in the search bar
    Filters,    // Moving through the filter sidebar
    Admin,      // Scrape status view
    ImageModal, // Lightbox over whatever was open before
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    pub should_quit: bool,
    pub mode: AppMode,

    // --- Widgets ---
    pub search: SearchState<'a>,
    pub catalog: CatalogState,
    pub admin: AdminState,
    pub alerts: AlertStack,
    pub image_modal: Option<ImageModalState>,

    // --- Animation ---
    pub frame_count: u64,
    pub spinner: &'static str,

    // --- Config ---
    pub config: Config,
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut state = Self {
            theme: Theme::from_palette_type(config.palette),
            config,
            ..Default::default()
        };
        state.catalog.filters.per_page = state.config.per_page;
        state
    }

    /// True for the modes that draw the catalog (search bar, filters, cards).
    pub fn in_catalog_view(&self) -> bool {
        let mode = match &self.image_modal {
            Some(modal) if self.mode == AppMode::ImageModal => modal.return_mode,
            _ => self.mode,
        };
        matches!(mode, AppMode::Browse | AppMode::Search | AppMode::Filters)
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let config = Config::default();
        Self {
            should_quit: false,
            mode: AppMode::Browse,
            search: SearchState::default(),
            catalog: CatalogState::default(),
            admin: AdminState::default(),
            alerts: AlertStack::default(),
            image_modal: None,
            frame_count: 0,
            spinner: SPINNER_FRAMES[0],
            theme: Theme::from_palette_type(config.palette),
            config,
            keymap: Arc::new(KeyMap::default()),
        }
    }
}

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
