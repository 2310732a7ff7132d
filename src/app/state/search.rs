use super::input::AppTextArea;
use crate::domain::models::SuggestionItem;

/// Candidate matches beneath the search input. Hiding discards the items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuggestionPanel {
    items: Vec<SuggestionItem>,
    visible: bool,
    highlighted: Option<usize>,
}

impl SuggestionPanel {
    /// Replaces the contents wholesale. An empty list hides the panel.
    pub fn show(&mut self, mut items: Vec<SuggestionItem>, limit: usize) {
        items.truncate(limit);
        if items.is_empty() {
            self.hide();
            return;
        }
        self.items = items;
        self.visible = true;
        self.highlighted = None;
    }

    pub fn hide(&mut self) {
        self.items.clear();
        self.visible = false;
        self.highlighted = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn items(&self) -> &[SuggestionItem] {
        if self.visible {
            &self.items
        } else {
            &[]
        }
    }

    pub fn get(&self, index: usize) -> Option<&SuggestionItem> {
        self.items().get(index)
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlight_next(&mut self) {
        let len = self.items().len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) if i + 1 < len => i + 1,
            Some(_) | None => 0,
        });
    }

    pub fn highlight_prev(&mut self) {
        let len = self.items().len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState<'a> {
    pub input: AppTextArea<'a>,
    pub panel: SuggestionPanel,
    // Bumped on every input change; fetch results from older values are stale.
    pub seq: u64,
}

impl SearchState<'_> {
    pub fn query(&self) -> String {
        self.input.value().trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> SuggestionItem {
        SuggestionItem {
            name: name.to_string(),
            category: "Laminates".to_string(),
        }
    }

    #[test]
    fn test_show_truncates_to_limit() {
        let mut panel = SuggestionPanel::default();
        panel.show((0..8).map(|i| item(&format!("Oak {i}"))).collect(), 5);
        assert!(panel.is_visible());
        assert_eq!(panel.items().len(), 5);
        assert_eq!(panel.items()[4].name, "Oak 4");
    }

    #[test]
    fn test_hide_is_idempotent() {
        let mut panel = SuggestionPanel::default();
        panel.hide();
        panel.hide();
        assert!(!panel.is_visible());

        panel.show(vec![item("Oak")], 5);
        panel.hide();
        panel.hide();
        assert!(!panel.is_visible());
        assert!(panel.items().is_empty());
        assert_eq!(panel.highlighted(), None);
    }

    #[test]
    fn test_highlight_wraps() {
        let mut panel = SuggestionPanel::default();
        panel.highlight_next();
        assert_eq!(panel.highlighted(), None);

        panel.show(vec![item("A"), item("B"), item("C")], 5);
        panel.highlight_prev();
        assert_eq!(panel.highlighted(), Some(2));
        panel.highlight_next();
        assert_eq!(panel.highlighted(), Some(0));
        panel.highlight_next();
        assert_eq!(panel.highlighted(), Some(1));
    }
}
