use crate::app::state::AdminState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use std::time::Instant;

use super::modals::helpers::{centered_rect_fixed_height, inner};

const PANEL_HEIGHT: u16 = 11;
const BUTTON_ROW: u16 = 5;
const BUTTON_WIDTH: u16 = 22;

pub fn panel_rect(body: Rect) -> Rect {
    centered_rect_fixed_height(60, PANEL_HEIGHT, body)
}

/// The "start scraping" button inside the panel drawn over `body`.
pub fn button_rect(body: Rect) -> Rect {
    let content = inner(panel_rect(body));
    Rect::new(
        content.x + 2,
        content.y + BUTTON_ROW,
        BUTTON_WIDTH,
        1,
    )
    .intersection(content)
}

pub struct AdminPanel<'a> {
    pub admin: &'a AdminState,
    pub now: Instant,
    pub spinner: &'a str,
    pub theme: &'a Theme,
}

impl Widget for AdminPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let panel = panel_rect(area);
        if panel.width == 0 || panel.height == 0 {
            return;
        }
        Clear.render(panel, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("ADMIN", theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("s", theme.footer_segment_key),
                Span::raw(": scrape "),
                Span::styled("r", theme.footer_segment_key),
                Span::raw(": reload "),
                Span::styled("a/Esc", theme.footer_segment_key),
                Span::raw(": back "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focus);

        let status = match &self.admin.status {
            Some(status) if status.running => {
                Span::styled(format!(" {} Running ", self.spinner), theme.status_running)
            }
            Some(_) => Span::styled(" Idle ", theme.status_idle),
            None if self.admin.is_loading => {
                Span::styled(format!(" {} Loading ", self.spinner), theme.status_idle)
            }
            None => Span::styled(" Unknown ", theme.status_idle),
        };

        let checked = self.admin.status.as_ref().map_or_else(
            || "never".to_string(),
            |s| s.fetched_at.format("%H:%M:%S").to_string(),
        );
        let refresh = match self.admin.next_refresh_at {
            Some(at) => format!(
                "auto-reload in {}s",
                at.saturating_duration_since(self.now).as_secs()
            ),
            None => "auto-reload off".to_string(),
        };

        let lines = vec![
            Line::from(""),
            Line::from(vec![Span::styled("  Scraper: ", theme.filter_label), status]),
            Line::from(Span::styled(format!("  Last checked: {checked}"), theme.card_meta)),
            Line::from(Span::styled(format!("  {refresh}"), theme.dimmed)),
            Line::from(""),
        ];

        Paragraph::new(lines).block(block).render(panel, buf);

        let button = button_rect(area);
        if button.area() > 0 {
            let (label, style) = if self.admin.scrape_enabled(self.now) {
                ("Start scraping", theme.button)
            } else {
                ("Starting...", theme.button_disabled)
            };
            let text = format!("{label:^width$}", width = BUTTON_WIDTH as usize);
            buf.set_stringn(button.x, button.y, text, button.width as usize, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::AdminStatus;
    use std::time::Duration;

    fn render(admin: &AdminState, now: Instant) -> Buffer {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        AdminPanel {
            admin,
            now,
            spinner: "*",
            theme: &theme,
        }
        .render(area, &mut buf);
        buf
    }

    fn button_text(buf: &Buffer) -> String {
        let r = button_rect(buf.area);
        (r.x..r.right())
            .map(|x| buf[(x, r.y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_button_label_follows_cooldown() {
        let now = Instant::now();
        let mut admin = AdminState::default();
        assert!(button_text(&render(&admin, now)).contains("Start scraping"));

        admin.cooldown_until = Some(now + Duration::from_secs(5));
        assert!(button_text(&render(&admin, now)).contains("Starting..."));
        assert!(button_text(&render(&admin, now + Duration::from_secs(5))).contains("Start scraping"));
    }

    #[test]
    fn test_running_status_is_shown() {
        let admin = AdminState {
            status: Some(AdminStatus {
                running: true,
                fetched_at: chrono::Local::now(),
            }),
            ..AdminState::default()
        };
        let buf = render(&admin, Instant::now());
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Running"));
    }
}
