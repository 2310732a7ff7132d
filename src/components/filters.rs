use crate::app::state::{CatalogState, CLEAR_FILTERS_ROW};
use crate::domain::models::FilterField;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use super::modals::helpers::inner;

pub const SIDEBAR_WIDTH: u16 = 30;
const SELECT_HEIGHT: u16 = 2;

/// Hit area of every sidebar row, indexed like `CatalogState::filter_cursor`:
/// one per select (label line plus value line), then the clear button after a gap.
pub fn row_rects(sidebar: Rect) -> Vec<Rect> {
    let list = inner(sidebar);
    let select = |i: u16| Rect::new(list.x, list.y + i * SELECT_HEIGHT, list.width, SELECT_HEIGHT);

    let mut rows: Vec<Rect> = (0..FilterField::ALL.len() as u16).map(select).collect();
    let clear_y = list.y + FilterField::ALL.len() as u16 * SELECT_HEIGHT + 1;
    rows.push(Rect::new(list.x, clear_y, list.width, 1));
    rows.into_iter().map(|r| r.intersection(list)).collect()
}

pub struct FilterSidebar<'a> {
    pub catalog: &'a CatalogState,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for FilterSidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.header_active)
        } else {
            (self.theme.border, self.theme.header_item)
        };
        Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("FILTERS", title_style),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("h/l", self.theme.footer_segment_key),
                Span::raw(": change "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .render(area, buf);

        let rows = row_rects(area);
        for (i, row) in rows.iter().enumerate() {
            if row.height == 0 || row.width == 0 {
                continue;
            }
            let under_cursor = self.focused && self.catalog.filter_cursor == i;
            if under_cursor {
                buf.set_style(*row, self.theme.filter_cursor);
            }

            if i == CLEAR_FILTERS_ROW {
                let style = if under_cursor {
                    self.theme.button
                } else {
                    self.theme.button_disabled
                };
                let line = Line::from(Span::styled(" Clear filters ", style));
                buf.set_line(row.x + 1, row.y, &line, row.width.saturating_sub(1));
                continue;
            }

            let field = FilterField::ALL[i];
            let label = Line::from(Span::styled(field.label(), self.theme.filter_label));
            buf.set_line(row.x + 1, row.y, &label, row.width.saturating_sub(1));

            if row.height > 1 {
                let value = self.catalog.filters.get(field).unwrap_or("All");
                let value = Line::from(vec![
                    Span::styled("‹ ", self.theme.dimmed),
                    Span::styled(value, self.theme.filter_value),
                    Span::styled(" ›", self.theme.dimmed),
                ]);
                buf.set_line(row.x + 1, row.y + 1, &value, row.width.saturating_sub(1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_cursor_order() {
        let rows = row_rects(Rect::new(0, 4, SIDEBAR_WIDTH, 20));
        assert_eq!(rows.len(), CLEAR_FILTERS_ROW + 1);
        assert_eq!(rows[0], Rect::new(1, 5, SIDEBAR_WIDTH - 2, 2));
        assert_eq!(rows[3], Rect::new(1, 11, SIDEBAR_WIDTH - 2, 2));
        assert_eq!(rows[CLEAR_FILTERS_ROW], Rect::new(1, 14, SIDEBAR_WIDTH - 2, 1));
    }

    #[test]
    fn test_rows_clip_in_short_sidebar() {
        let rows = row_rects(Rect::new(0, 0, SIDEBAR_WIDTH, 5));
        assert_eq!(rows[0].height, 2);
        assert_eq!(rows[1].height, 1);
        assert_eq!(rows[CLEAR_FILTERS_ROW].area(), 0);
    }
}
