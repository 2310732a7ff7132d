use crate::app::state::{AppMode, AppState};
use crate::components::{
    admin_panel::AdminPanel,
    alerts::Alerts,
    filters::{FilterSidebar, SIDEBAR_WIDTH},
    footer::Footer,
    header::Header,
    modals::ImageModal,
    product_cards::ProductCards,
    search_bar::{SearchBar, SEARCH_HEIGHT},
    suggestions::{self, SuggestionsPanel},
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use std::time::Instant;

/// Screen regions. The catalog regions are empty in the admin view and vice versa.
pub struct AppLayout {
    pub main: Vec<Rect>,
    pub search: Rect,
    pub sidebar: Rect,
    pub cards: Rect,
    pub admin: Rect,
}

impl AppLayout {
    pub fn body(&self) -> Rect {
        self.main.get(1).copied().unwrap_or_default()
    }

    /// Drop-down area of the suggestion panel for `item_count` entries.
    pub fn suggestion_panel(&self, item_count: usize) -> Rect {
        suggestions::panel_rect(self.search, self.body(), item_count)
    }
}

pub fn get_layout(area: Rect, state: &AppState) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area)
        .to_vec();
    let body = main[1];

    if !state.in_catalog_view() {
        return AppLayout {
            main,
            search: Rect::default(),
            sidebar: Rect::default(),
            cards: Rect::default(),
            admin: body,
        };
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(SEARCH_HEIGHT), Constraint::Min(0)])
        .split(body);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[1]);

    AppLayout {
        main,
        search: rows[0],
        sidebar: columns[0],
        cards: columns[1],
        admin: Rect::default(),
    }
}

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = &state.theme;
    let layout = get_layout(area, state);

    f.render_widget(Header { state, theme }, layout.main[0]);

    if state.in_catalog_view() {
        f.render_widget(
            SearchBar {
                input: &state.search.input,
                focused: state.mode == AppMode::Search,
                theme,
            },
            layout.search,
        );
        f.render_widget(
            FilterSidebar {
                catalog: &state.catalog,
                focused: state.mode == AppMode::Filters,
                theme,
            },
            layout.sidebar,
        );
        f.render_widget(
            ProductCards {
                catalog: &state.catalog,
                focused: state.mode == AppMode::Browse,
                spinner: state.spinner,
                theme,
            },
            layout.cards,
        );
        // Drawn last so it overlaps the sidebar and cards
        if state.search.panel.is_visible() {
            f.render_widget(
                SuggestionsPanel {
                    panel: &state.search.panel,
                    theme,
                    terminal_area: area,
                },
                layout.suggestion_panel(state.search.panel.items().len()),
            );
        }
    } else {
        f.render_widget(
            AdminPanel {
                admin: &state.admin,
                now: Instant::now(),
                spinner: state.spinner,
                theme,
            },
            layout.admin,
        );
    }

    f.render_widget(Footer { state, theme }, layout.main[2]);

    if let (AppMode::ImageModal, Some(modal)) = (state.mode, &state.image_modal) {
        f.render_widget(
            ImageModal {
                theme,
                state: modal,
            },
            area,
        );
    }

    f.render_widget(
        Alerts {
            alerts: &state.alerts,
            theme,
        },
        layout.body(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Product, ProductId, ProductPage, SuggestionItem};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_catalog_view_renders_cards_and_suggestions() {
        let mut state = AppState::default();
        state.catalog.page = Some(ProductPage {
            products: vec![Product {
                id: ProductId(1),
                name: "Roble Natural".to_string(),
                category: "Laminates".to_string(),
                price: Some(24.5),
                ..Product::default()
            }],
            total: 1,
            pages: 1,
            current_page: 1,
            ..ProductPage::default()
        });
        state.catalog.selected = Some(0);
        state.mode = AppMode::Search;
        state.search.input.set_value("lap");
        state.search.panel.show(
            vec![SuggestionItem {
                name: "Laptop X".to_string(),
                category: "Electronics".to_string(),
            }],
            5,
        );

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, &state)).unwrap();
        let text = screen(&terminal);

        assert!(text.contains("Roble Natural"));
        assert!(text.contains("24.50"));
        assert!(text.contains("Laptop X"));
        assert!(text.contains("Electronics"));
    }

    #[test]
    fn test_admin_view_renders_button() {
        let mut state = AppState::default();
        state.mode = AppMode::Admin;

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &state)).unwrap();
        assert!(screen(&terminal).contains("Start scraping"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let state = AppState::default();
        for (w, h) in [(1, 1), (5, 2), (20, 3)] {
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            terminal.draw(|f| draw(f, &state)).unwrap();
        }
    }
}
