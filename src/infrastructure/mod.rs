pub mod clipboard;
pub mod http_catalog;
