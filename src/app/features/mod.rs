pub mod admin;
pub mod filter;
pub mod products;
pub mod search;
pub mod ui;
