use crate::app::state::ImageModalState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect, dim_area, draw_drop_shadow};

/// Lightbox for the selected product's image. A terminal can't paint the
/// picture itself, so it shows the alt text and where the image lives.
pub struct ImageModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a ImageModalState,
}

impl Widget for ImageModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_area(buf, area);

        let modal_area = centered_rect(70, 40, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area, self.theme.shadow);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" IMAGE ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("click/Esc", self.theme.footer_segment_key),
                Span::raw(": close "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(&self.state.alt, self.theme.card_title)),
            Line::from(""),
            Line::from(Span::styled(&self.state.source, self.theme.filter_value)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(modal_area, buf);
    }
}
