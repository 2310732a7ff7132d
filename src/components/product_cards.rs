use crate::app::state::CatalogState;
use crate::domain::models::Product;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::modals::helpers::inner;

pub const CARD_WIDTH: u16 = 32;
pub const CARD_HEIGHT: u16 = 6;

/// Grid placement of the visible cards inside the product pane, scrolled so
/// the selected card is on screen. Returns `(product index, rect)` pairs.
pub fn card_rects(pane: Rect, count: usize, selected: Option<usize>) -> Vec<(usize, Rect)> {
    let grid = inner(pane);
    if count == 0 || grid.width == 0 || grid.height == 0 {
        return Vec::new();
    }

    let cols = (grid.width / CARD_WIDTH).max(1) as usize;
    let card_width = grid.width / cols as u16;
    let visible_rows = (grid.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = selected.unwrap_or(0).min(count - 1) / cols;
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    (0..count)
        .filter_map(|i| {
            let row = i / cols;
            if row < first_row || row >= first_row + visible_rows {
                return None;
            }
            let rect = Rect::new(
                grid.x + (i % cols) as u16 * card_width,
                grid.y + (row - first_row) as u16 * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT,
            )
            .intersection(grid);
            (rect.area() > 0).then_some((i, rect))
        })
        .collect()
}

pub fn card_at(
    pane: Rect,
    count: usize,
    selected: Option<usize>,
    column: u16,
    row: u16,
) -> Option<usize> {
    card_rects(pane, count, selected)
        .into_iter()
        .find(|(_, r)| super::modals::helpers::contains(*r, column, row))
        .map(|(i, _)| i)
}

pub struct ProductCards<'a> {
    pub catalog: &'a CatalogState,
    pub focused: bool,
    pub spinner: &'a str,
    pub theme: &'a Theme,
}

impl Widget for ProductCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.header_active)
        } else {
            (self.theme.border, self.theme.header_item)
        };

        let page_label = match &self.catalog.page {
            Some(page) => format!(
                " page {}/{} · {} products ",
                page.current_page,
                page.pages.max(1),
                page.total
            ),
            None => String::new(),
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("PRODUCTS", title_style),
                Span::raw(" "),
            ]))
            .title(Line::from(Span::styled(page_label, self.theme.dimmed)).alignment(Alignment::Right))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("n/p", self.theme.footer_segment_key),
                Span::raw(": page "),
                Span::styled("i", self.theme.footer_segment_key),
                Span::raw(": image "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let grid = block.inner(area);
        block.render(area, buf);

        let products = self.catalog.products();
        if products.is_empty() {
            let message = if self.catalog.is_loading || self.catalog.page.is_none() {
                format!("{} Loading products...", self.spinner)
            } else {
                "No products found.".to_string()
            };
            Paragraph::new(Span::styled(message, self.theme.dimmed))
                .alignment(Alignment::Center)
                .render(grid, buf);
            return;
        }

        for (i, rect) in card_rects(area, products.len(), self.catalog.selected) {
            ProductCard {
                product: &products[i],
                selected: self.catalog.selected == Some(i),
                lifted: self.catalog.hovered == Some(i),
                theme: self.theme,
            }
            .render(rect, buf);
        }

        if self.catalog.is_loading && area.width > 8 && area.height > 0 {
            let badge = Span::styled(format!(" {} ", self.spinner), self.theme.header_logo);
            buf.set_span(area.right().saturating_sub(5), area.y, &badge, 3);
        }
    }
}

struct ProductCard<'a> {
    product: &'a Product,
    selected: bool,
    lifted: bool,
    theme: &'a Theme,
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let border_style = if self.lifted {
            theme.card_lifted
        } else if self.selected {
            theme.card_selected
        } else {
            theme.card
        };
        // Lifted cards get a heavier frame and their title nudged up-right
        let (border_type, title_pad) = if self.lifted {
            (BorderType::Thick, "  ")
        } else {
            (BorderType::Rounded, " ")
        };

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(title_pad),
                Span::styled(&self.product.name, theme.card_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style);

        let mut lines = vec![Line::from(Span::styled(
            &self.product.category,
            theme.card_meta,
        ))];
        if let Some(code) = &self.product.material_code {
            lines.push(Line::from(Span::styled(format!("Ref. {code}"), theme.card_meta)));
        }
        let mut last = Vec::new();
        if let Some(price) = self.product.price {
            last.push(Span::styled(format!("{price:.2} €"), theme.price));
            last.push(Span::raw(" "));
        }
        if self.product.discontinued {
            last.push(Span::styled("discontinued", theme.discontinued));
        }
        if !last.is_empty() {
            lines.push(Line::from(last));
        }

        let mut card = Paragraph::new(lines).block(block);
        if self.lifted {
            card = card.style(theme.card_lifted);
        }
        card.render(area, buf);
    }
}
