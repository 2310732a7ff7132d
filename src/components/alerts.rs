use crate::app::state::AlertStack;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

const TOAST_WIDTH: u16 = 48;

/// Toasts stacked in the top-right corner, newest on top.
pub struct Alerts<'a> {
    pub alerts: &'a AlertStack,
    pub theme: &'a Theme,
}

impl Widget for Alerts<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = TOAST_WIDTH.min(area.width);
        if width == 0 {
            return;
        }
        let x = area.right() - width;

        for (i, alert) in self.alerts.iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            let row = Rect::new(x, y, width, 1);
            Clear.render(row, buf);

            let style = self.theme.alert(alert.kind);
            buf.set_style(row, style);
            let line = Line::from(vec![
                Span::styled(alert.kind.label(), style.add_modifier(ratatui::style::Modifier::BOLD)),
                Span::styled(format!(" {} ", alert.message), style),
            ]);
            buf.set_line(x, y, &line, width);
        }
    }
}
