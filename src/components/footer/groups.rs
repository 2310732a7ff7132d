use crate::app::state::{AppMode, AppState};
use crate::domain::models::FilterField;

/// One key hint; `highlighted` marks a binding whose target is active right now.
pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
    pub highlighted: bool,
}

pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}

fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem {
        key,
        desc,
        highlighted: false,
    }
}

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    let mut groups = match state.mode {
        AppMode::Browse => vec![
            FooterGroup {
                name: "NAV",
                items: vec![
                    item("j/k", "move"),
                    item("n/p", "page"),
                    item("/", "search"),
                    item("f", "filters"),
                ],
            },
            FooterGroup {
                name: "ITEM",
                items: vec![item("i", "image"), item("y/Y", "copy name/url")],
            },
        ],
        AppMode::Search => vec![FooterGroup {
            name: "SEARCH",
            items: vec![
                item("↑/↓", "pick"),
                item("Enter", "search"),
                item("Esc", "close"),
            ],
        }],
        AppMode::Filters => vec![FooterGroup {
            name: "FILTERS",
            items: vec![
                item("j/k", "row"),
                item("h/l", "change"),
                FooterItem {
                    key: "c",
                    desc: "clear",
                    highlighted: FilterField::ALL
                        .iter()
                        .any(|f| state.catalog.filters.get(*f).is_some()),
                },
                item("p", "products"),
            ],
        }],
        AppMode::Admin => vec![FooterGroup {
            name: "ADMIN",
            items: vec![
                FooterItem {
                    key: "s",
                    desc: "scrape",
                    highlighted: state.admin.is_running(),
                },
                item("r", "reload"),
                item("a", "catalog"),
            ],
        }],
        AppMode::ImageModal => vec![FooterGroup {
            name: "IMAGE",
            items: vec![item("Esc", "close")],
        }],
    };

    if !state.alerts.is_empty() {
        groups.push(FooterGroup {
            name: "ALERT",
            items: vec![item("x", "dismiss")],
        });
    }
    let mut app = vec![item("q", "quit")];
    if state.mode != AppMode::Admin {
        app.insert(0, item("a", "admin"));
    }
    groups.push(FooterGroup {
        name: "APP",
        items: app,
    });
    groups
}
