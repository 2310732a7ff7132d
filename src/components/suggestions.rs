use crate::app::state::SuggestionPanel;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::filters::SIDEBAR_WIDTH;
use super::modals::helpers::{contains, draw_drop_shadow, inner};

/// Each suggestion takes two lines: name, then category.
pub const ENTRY_HEIGHT: u16 = 2;

/// Widest the drop-down gets. Together with its shadow it fits over the
/// filter sidebar and leaves the product cards uncovered.
pub const PANEL_MAX_WIDTH: u16 = SIDEBAR_WIDTH - 2;

/// Where the panel drops down below the search bar, clipped to `bounds`.
pub fn panel_rect(search: Rect, bounds: Rect, item_count: usize) -> Rect {
    if item_count == 0 || search.width < 3 {
        return Rect::default();
    }
    let height = (item_count as u16).saturating_mul(ENTRY_HEIGHT) + 2;
    Rect {
        x: search.x + 1,
        y: search.bottom(),
        width: (search.width - 2).min(PANEL_MAX_WIDTH),
        height,
    }
    .intersection(bounds)
}

/// Index of the entry drawn at (`column`, `row`), if any.
pub fn entry_at(panel: Rect, item_count: usize, column: u16, row: u16) -> Option<usize> {
    let list = inner(panel);
    if !contains(list, column, row) {
        return None;
    }
    let idx = ((row - list.y) / ENTRY_HEIGHT) as usize;
    (idx < item_count).then_some(idx)
}

pub struct SuggestionsPanel<'a> {
    pub panel: &'a SuggestionPanel,
    pub theme: &'a Theme,
    pub terminal_area: Rect,
}

impl Widget for SuggestionsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.panel.is_visible() || area.width == 0 || area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, area, self.terminal_area, self.theme.shadow);
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        let list = block.inner(area);
        block.render(area, buf);

        for (i, item) in self.panel.items().iter().enumerate() {
            let y = list.y + i as u16 * ENTRY_HEIGHT;
            if y >= list.bottom() {
                break;
            }
            let highlighted = self.panel.highlighted() == Some(i);
            let bg = if highlighted {
                self.theme.suggestion_highlight
            } else {
                Default::default()
            };
            if highlighted {
                buf.set_style(
                    Rect::new(list.x, y, list.width, ENTRY_HEIGHT).intersection(list),
                    bg,
                );
            }

            let marker = if highlighted { "> " } else { "  " };
            let name = Line::from(vec![
                Span::styled(marker, self.theme.suggestion_name.patch(bg)),
                Span::styled(&item.name, self.theme.suggestion_name.patch(bg)),
            ]);
            buf.set_line(list.x, y, &name, list.width);

            if y + 1 < list.bottom() {
                let category = Line::from(vec![
                    Span::raw("  "),
                    Span::styled(&item.category, self.theme.suggestion_category.patch(bg)),
                ]);
                buf.set_line(list.x, y + 1, &category, list.width);
            }
        }
    }
}
