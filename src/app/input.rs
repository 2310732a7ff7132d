use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::components::{admin_panel, filters, modals::helpers::contains, product_cards, suggestions};
use crate::domain::models::FilterField;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match app_state.mode {
        AppMode::Search => Some(match key.code {
            KeyCode::Esc => Action::CancelMode,
            KeyCode::Enter => Action::SubmitSearch,
            KeyCode::Down => Action::SuggestionNext,
            KeyCode::Up => Action::SuggestionPrev,
            KeyCode::Tab => Action::CycleFocus,
            _ => Action::SearchKey(key),
        }),
        AppMode::ImageModal => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | 'i') => {
                Some(Action::CloseImageModal)
            }
            _ => None,
        },
        mode => app_state.keymap.get_action(key, mode),
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    if app_state.mode == AppMode::ImageModal {
        return matches!(mouse.kind, MouseEventKind::Down(_)).then_some(Action::CloseImageModal);
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = ui::get_layout(area, app_state);
    let (column, row) = (mouse.column, mouse.row);

    if !app_state.in_catalog_view() {
        return match mouse.kind {
            MouseEventKind::Down(MouseButton::Left)
                if contains(admin_panel::button_rect(layout.admin), column, row) =>
            {
                Some(Action::StartScrape)
            }
            _ => None,
        };
    }

    let panel = visible_panel(&layout, app_state);
    let item_count = app_state.search.panel.items().len();
    let products = app_state.catalog.products().len();
    let selected = app_state.catalog.selected;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(idx) = suggestions::entry_at(panel, item_count, column, row) {
                return Some(Action::SuggestionSelected(idx));
            }
            if contains(layout.search, column, row) {
                return Some(Action::FocusSearch);
            }
            if let Some(i) = sidebar_row_at(layout.sidebar, column, row) {
                return Some(match FilterField::ALL.get(i) {
                    Some(field) => Action::CycleFilter(*field, 1),
                    None => Action::ClearFilters,
                });
            }
            product_cards::card_at(layout.cards, products, selected, column, row)
                .map(Action::SelectProduct)
        }
        MouseEventKind::Down(MouseButton::Right) => {
            let i = sidebar_row_at(layout.sidebar, column, row)?;
            FilterField::ALL
                .get(i)
                .map(|field| Action::CycleFilter(*field, -1))
        }
        MouseEventKind::Moved => {
            let hovered = product_cards::card_at(layout.cards, products, selected, column, row);
            (hovered != app_state.catalog.hovered).then_some(Action::HoverProduct(hovered))
        }
        MouseEventKind::ScrollDown if contains(panel, column, row) => Some(Action::SuggestionNext),
        MouseEventKind::ScrollUp if contains(panel, column, row) => Some(Action::SuggestionPrev),
        MouseEventKind::ScrollDown if contains(layout.cards, column, row) => {
            Some(Action::SelectNextProduct)
        }
        MouseEventKind::ScrollUp if contains(layout.cards, column, row) => {
            Some(Action::SelectPrevProduct)
        }
        _ => None,
    }
}

fn visible_panel(layout: &ui::AppLayout, app_state: &AppState<'_>) -> Rect {
    if app_state.search.panel.is_visible() {
        layout.suggestion_panel(app_state.search.panel.items().len())
    } else {
        Rect::default()
    }
}

fn sidebar_row_at(sidebar: Rect, column: u16, row: u16) -> Option<usize> {
    filters::row_rects(sidebar)
        .into_iter()
        .position(|r| contains(r, column, row))
}

/// True for a button press outside the search widget (the bar plus its visible panel).
/// The loop turns these into `Action::OutsideClick` ahead of the mapped action.
pub fn is_outside_search_click(
    event: &Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> bool {
    let Event::Mouse(mouse) = event else {
        return false;
    };
    if !matches!(mouse.kind, MouseEventKind::Down(_)) {
        return false;
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = ui::get_layout(area, app_state);
    let panel = visible_panel(&layout, app_state);
    !contains(layout.search, mouse.column, mouse.row) && !contains(panel, mouse.column, mouse.row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Product, ProductPage, SuggestionItem};

    const SIZE: Size = Size {
        width: 100,
        height: 30,
    };

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn state_with_suggestions() -> AppState<'static> {
        let mut state = AppState::default();
        state.mode = AppMode::Search;
        state.search.panel.show(
            vec![
                SuggestionItem {
                    name: "Laptop X".to_string(),
                    category: "Electronics".to_string(),
                },
                SuggestionItem {
                    name: "Laptop Stand".to_string(),
                    category: "Accessories".to_string(),
                },
            ],
            5,
        );
        state
    }

    #[test]
    fn test_search_mode_keys() {
        let state = state_with_suggestions();
        assert_eq!(
            map_event_to_action(key(KeyCode::Down), &state, SIZE),
            Some(Action::SuggestionNext)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::SubmitSearch)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::CancelMode)
        );
        // Bound letters are text while typing
        assert!(matches!(
            map_event_to_action(key(KeyCode::Char('q')), &state, SIZE),
            Some(Action::SearchKey(_))
        ));
    }

    #[test]
    fn test_click_on_suggestion_selects_it() {
        let state = state_with_suggestions();
        // Header row 0, search bar rows 1..4, panel border at row 4, entries from row 5
        assert_eq!(
            map_event_to_action(click(10, 5), &state, SIZE),
            Some(Action::SuggestionSelected(0))
        );
        assert_eq!(
            map_event_to_action(click(10, 8), &state, SIZE),
            Some(Action::SuggestionSelected(1))
        );
        assert!(!is_outside_search_click(&click(10, 8), &state, SIZE));
    }

    #[test]
    fn test_outside_click_detection() {
        let state = state_with_suggestions();
        assert!(!is_outside_search_click(&click(50, 2), &state, SIZE));
        assert!(is_outside_search_click(&click(50, 20), &state, SIZE));
        assert!(is_outside_search_click(&click(99, 29), &state, SIZE));

        // Other buttons count as presses too
        let right = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 50,
            row: 20,
            modifiers: KeyModifiers::empty(),
        });
        assert!(is_outside_search_click(&right, &state, SIZE));

        // Moves and keys never do
        assert!(!is_outside_search_click(&key(KeyCode::Char('x')), &state, SIZE));
    }

    #[test]
    fn test_hidden_panel_is_not_part_of_search_widget() {
        let mut state = state_with_suggestions();
        state.search.panel.hide();
        assert!(is_outside_search_click(&click(10, 5), &state, SIZE));
    }

    #[test]
    fn test_sidebar_clicks() {
        let state = AppState::default();
        // Sidebar starts at row 4 (under the search bar); first select at row 5
        assert_eq!(
            map_event_to_action(click(3, 5), &state, SIZE),
            Some(Action::CycleFilter(FilterField::Category, 1))
        );
        assert_eq!(
            map_event_to_action(click(3, 14), &state, SIZE),
            Some(Action::ClearFilters)
        );
    }

    #[test]
    fn test_hover_over_cards() {
        let mut state = AppState::default();
        state.catalog.page = Some(ProductPage {
            products: vec![Product::default(), Product::default()],
            ..ProductPage::default()
        });
        let moved = |column, row| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column,
                row,
                modifiers: KeyModifiers::empty(),
            })
        };

        // Cards pane starts at column 30, row 4; first card inside the border
        assert_eq!(
            map_event_to_action(moved(35, 6), &state, SIZE),
            Some(Action::HoverProduct(Some(0)))
        );
        state.catalog.hovered = Some(0);
        assert_eq!(map_event_to_action(moved(36, 6), &state, SIZE), None);
        assert_eq!(
            map_event_to_action(moved(35, 25), &state, SIZE),
            Some(Action::HoverProduct(None))
        );
    }

    #[test]
    fn test_any_click_closes_image_modal() {
        let mut state = AppState::default();
        state.mode = AppMode::ImageModal;
        assert_eq!(
            map_event_to_action(click(0, 0), &state, SIZE),
            Some(Action::CloseImageModal)
        );
    }

    #[test]
    fn test_scrape_button_click() {
        let mut state = AppState::default();
        state.mode = AppMode::Admin;
        let layout = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height), &state);
        let button = admin_panel::button_rect(layout.admin);
        assert_eq!(
            map_event_to_action(click(button.x + 1, button.y), &state, SIZE),
            Some(Action::StartScrape)
        );
        assert_eq!(map_event_to_action(click(0, 1), &state, SIZE), None);
    }
}
