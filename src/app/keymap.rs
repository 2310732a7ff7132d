use super::action::Action;
use super::state::AppMode;
use crate::domain::models::FilterField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Key bindings per mode. Mode maps win over the global map.
/// The search bar is not listed here: while it is focused, keys go to the text input.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
    pub browse: HashMap<KeyEvent, Action>,
    pub filters: HashMap<KeyEvent, Action>,
    pub admin: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut global = HashMap::new();
        let mut browse = HashMap::new();
        let mut filters = HashMap::new();
        let mut admin = HashMap::new();

        // --- Global ---
        global.insert(key('q'), Action::Quit);
        global.insert(key('/'), Action::FocusSearch);
        global.insert(key('f'), Action::FocusFilters);
        global.insert(key(KeyCode::Tab), Action::CycleFocus);
        global.insert(key('a'), Action::ToggleAdmin);
        global.insert(key('r'), Action::ReloadProducts);
        global.insert(key('x'), Action::DismissAlert);
        global.insert(key(KeyCode::Esc), Action::CancelMode);

        // --- Product cards ---
        browse.insert(key('j'), Action::SelectNextProduct);
        browse.insert(key(KeyCode::Down), Action::SelectNextProduct);
        browse.insert(key(KeyCode::Right), Action::SelectNextProduct);
        browse.insert(key('k'), Action::SelectPrevProduct);
        browse.insert(key(KeyCode::Up), Action::SelectPrevProduct);
        browse.insert(key(KeyCode::Left), Action::SelectPrevProduct);
        browse.insert(key('n'), Action::NextPage);
        browse.insert(key(KeyCode::PageDown), Action::NextPage);
        browse.insert(key('p'), Action::PrevPage);
        browse.insert(key(KeyCode::PageUp), Action::PrevPage);
        browse.insert(key('i'), Action::OpenImageModal);
        browse.insert(key(KeyCode::Enter), Action::OpenImageModal);
        browse.insert(key('y'), Action::CopySelectedName);
        browse.insert(shift('Y'), Action::CopySelectedUrl);
        browse.insert(key('Y'), Action::CopySelectedUrl);

        // --- Filter sidebar ---
        filters.insert(key('j'), Action::FilterCursorNext);
        filters.insert(key(KeyCode::Down), Action::FilterCursorNext);
        filters.insert(key('k'), Action::FilterCursorPrev);
        filters.insert(key(KeyCode::Up), Action::FilterCursorPrev);
        filters.insert(key('l'), Action::FilterOptionNext);
        filters.insert(key(KeyCode::Right), Action::FilterOptionNext);
        filters.insert(key('h'), Action::FilterOptionPrev);
        filters.insert(key(KeyCode::Left), Action::FilterOptionPrev);
        filters.insert(key(KeyCode::Enter), Action::FilterActivate);
        filters.insert(key('c'), Action::ClearFilters);
        filters.insert(key('p'), Action::FocusProducts);
        filters.insert(key('1'), Action::CycleFilter(FilterField::Category, 1));
        filters.insert(key('2'), Action::CycleFilter(FilterField::SurfaceType, 1));
        filters.insert(key('3'), Action::CycleFilter(FilterField::DesignGroup, 1));
        filters.insert(key('4'), Action::CycleFilter(FilterField::ColorGroup, 1));

        // --- Admin view ---
        admin.insert(key('s'), Action::StartScrape);
        admin.insert(key('r'), Action::RefreshAdmin);
        admin.insert(key(KeyCode::Esc), Action::ToggleAdmin);
        admin.insert(key(KeyCode::Tab), Action::ToggleAdmin);
        admin.insert(key('/'), Action::ToggleAdmin);
        admin.insert(key('f'), Action::ToggleAdmin);

        Self {
            global,
            browse,
            filters,
            admin,
        }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        let overrides = match mode {
            AppMode::Browse => Some(&self.browse),
            AppMode::Filters => Some(&self.filters),
            AppMode::Admin => Some(&self.admin),
            AppMode::Search | AppMode::ImageModal => None,
        };
        if let Some(action) = overrides.and_then(|map| map.get(&event)) {
            return Some(action.clone());
        }
        self.global.get(&event).cloned()
    }
}

trait IntoKeyCode {
    fn into_key_code(self) -> KeyCode;
}

impl IntoKeyCode for KeyCode {
    fn into_key_code(self) -> KeyCode {
        self
    }
}

impl IntoKeyCode for char {
    fn into_key_code(self) -> KeyCode {
        KeyCode::Char(self)
    }
}

fn key(code: impl IntoKeyCode) -> KeyEvent {
    KeyEvent::new(code.into_key_code(), KeyModifiers::empty())
}

fn shift(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_overrides_global() {
        let keymap = KeyMap::default();
        assert_eq!(
            keymap.get_action(key('r'), AppMode::Browse),
            Some(Action::ReloadProducts)
        );
        assert_eq!(
            keymap.get_action(key('r'), AppMode::Admin),
            Some(Action::RefreshAdmin)
        );
    }

    #[test]
    fn test_browse_bindings() {
        let keymap = KeyMap::default();
        assert_eq!(
            keymap.get_action(key(KeyCode::PageDown), AppMode::Browse),
            Some(Action::NextPage)
        );
        assert_eq!(
            keymap.get_action(shift('Y'), AppMode::Browse),
            Some(Action::CopySelectedUrl)
        );
        // Card bindings don't leak into the filter sidebar
        assert_eq!(
            keymap.get_action(key('n'), AppMode::Filters),
            None
        );
    }
}
