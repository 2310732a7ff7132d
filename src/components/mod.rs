pub mod admin_panel;
pub mod alerts;
pub mod filters;
pub mod footer;
pub mod header;
pub mod modals;
pub mod product_cards;
pub mod search_bar;
pub mod suggestions;
