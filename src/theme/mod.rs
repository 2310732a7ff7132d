use crate::app::state::AlertKind;
use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod ember;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_active: Style,
    pub header_item: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub footer: Style,

    pub search_input: Style,
    pub search_placeholder: Style,
    pub suggestion_name: Style,
    pub suggestion_category: Style,
    pub suggestion_highlight: Style,

    pub card: Style,
    pub card_selected: Style,
    pub card_lifted: Style,
    pub card_title: Style,
    pub card_meta: Style,
    pub price: Style,
    pub discontinued: Style,

    pub filter_label: Style,
    pub filter_value: Style,
    pub filter_cursor: Style,

    pub button: Style,
    pub button_disabled: Style,
    pub status_running: Style,
    pub status_idle: Style,

    pub alert_info: Style,
    pub alert_success: Style,
    pub alert_warning: Style,
    pub alert_danger: Style,

    pub shadow: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    Nord,
    Ember,
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Ember => Self::from_palette(&ember::EMBER),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        let badge = |bg| Style::default().bg(bg).fg(p.crust).add_modifier(Modifier::BOLD);

        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.accent),

            header_logo: badge(p.accent),
            header_active: badge(p.green),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header: Style::default().bg(p.base).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer_group_name: Style::default().fg(p.subtext).add_modifier(Modifier::DIM),
            footer: Style::default().bg(p.crust).fg(p.subtext),

            search_input: Style::default().fg(p.text),
            search_placeholder: Style::default().fg(p.overlay).add_modifier(Modifier::DIM),
            suggestion_name: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            suggestion_category: Style::default().fg(p.subtext).add_modifier(Modifier::DIM),
            suggestion_highlight: Style::default().bg(p.surface0),

            card: Style::default().fg(p.surface2),
            card_selected: Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            card_lifted: Style::default().fg(p.yellow).bg(p.mantle),
            card_title: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            card_meta: Style::default().fg(p.subtext),
            price: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            discontinued: Style::default().fg(p.red).add_modifier(Modifier::ITALIC),

            filter_label: Style::default().fg(p.subtext),
            filter_value: Style::default().fg(p.teal),
            filter_cursor: Style::default()
                .bg(p.surface1)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),

            button: badge(p.accent),
            button_disabled: Style::default().bg(p.surface0).fg(p.overlay),
            status_running: badge(p.yellow),
            status_idle: Style::default().bg(p.surface1).fg(p.text),

            alert_info: Style::default().fg(p.accent).bg(dim_color(p.accent, 0.2)),
            alert_success: Style::default().fg(p.green).bg(dim_color(p.green, 0.2)),
            alert_warning: Style::default().fg(p.yellow).bg(dim_color(p.yellow, 0.2)),
            alert_danger: Style::default().fg(p.red).bg(dim_color(p.red, 0.2)),

            shadow: Style::default().bg(p.crust),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay).add_modifier(Modifier::DIM),
        }
    }

    pub fn alert(&self, kind: AlertKind) -> Style {
        match kind {
            AlertKind::Info => self.alert_info,
            AlertKind::Success => self.alert_success,
            AlertKind::Warning => self.alert_warning,
            AlertKind::Danger => self.alert_danger,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::Nord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        assert_ne!(
            Theme::from_palette_type(PaletteType::Nord),
            Theme::from_palette_type(PaletteType::Ember)
        );
    }

    #[test]
    fn test_palette_names_parse() {
        #[derive(Deserialize)]
        struct Wrapper {
            palette: PaletteType,
        }
        let parsed: Wrapper = toml::from_str("palette = \"ember\"").unwrap();
        assert_eq!(parsed.palette, PaletteType::Ember);
    }
}
