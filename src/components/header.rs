use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SEP_RIGHT: &str = "\u{e0b0}";

pub struct Header<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let view = match state.mode {
            AppMode::Admin => " ADMIN ",
            AppMode::ImageModal if !state.in_catalog_view() => " ADMIN ",
            _ => " CATALOG ",
        };
        let stats = match &state.catalog.page {
            Some(page) => format!(" {} products ", page.total),
            None => " - ".to_string(),
        };
        let filters_active = state.catalog.filters.search.is_some()
            || crate::domain::models::FilterField::ALL
                .iter()
                .any(|f| state.catalog.filters.get(*f).is_some());

        // Separator styles: fg = current segment bg, bg = next segment bg
        let logo_bg = theme.header_logo.bg.unwrap_or(Color::Reset);
        let view_bg = theme.header_item.bg.unwrap_or(Color::Reset);
        let base_bg = theme.header.bg.unwrap_or(Color::Reset);

        let mut spans = vec![
            Span::styled(" CATALOG TUI ", theme.header_logo),
            Span::styled(SEP_RIGHT, Style::default().fg(logo_bg).bg(view_bg)),
            Span::styled(view, theme.header_item),
            Span::styled(stats, theme.header_item),
            Span::styled(SEP_RIGHT, Style::default().fg(view_bg).bg(base_bg)),
            Span::styled(format!(" {} ", state.config.base_url), theme.header),
        ];
        if filters_active {
            spans.push(Span::styled(" FILTERED ", theme.header_active));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.header)
            .render(area, buf);
    }
}
