use crate::app::state::AppTextArea;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub const SEARCH_HEIGHT: u16 = 3;
const PLACEHOLDER: &str = "Search products...";

pub struct SearchBar<'a> {
    pub input: &'a AppTextArea<'a>,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.header_active)
        } else {
            (self.theme.border, self.theme.header_item)
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("SEARCH", title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.input.value().is_empty() && !self.focused {
            Paragraph::new(Span::styled(PLACEHOLDER, self.theme.search_placeholder))
                .render(inner, buf);
            return;
        }

        let mut text_area = self.input.clone();
        text_area.set_style(self.theme.search_input);
        text_area.set_cursor_line_style(Style::default());
        if !self.focused {
            // Hide the cursor block while another widget has focus
            text_area.set_cursor_style(self.theme.search_input);
        }
        Widget::render(&text_area, inner, buf);
    }
}
