pub use crate::domain::models::FilterOptions;
use crate::domain::models::{FilterField, Product, ProductFilters, ProductPage};

/// Row index of the "Clear filters" entry in the sidebar, after the selects.
pub const CLEAR_FILTERS_ROW: usize = FilterField::ALL.len();

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub page: Option<ProductPage>,
    pub filters: ProductFilters,
    pub options: FilterOptions,
    pub selected: Option<usize>,
    pub hovered: Option<usize>,
    pub filter_cursor: usize,
    pub is_loading: bool,
}

impl CatalogState {
    pub fn products(&self) -> &[Product] {
        self.page.as_ref().map_or(&[], |p| p.products.as_slice())
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.and_then(|i| self.products().get(i))
    }

    pub fn cursor_field(&self) -> Option<FilterField> {
        FilterField::ALL.get(self.filter_cursor).copied()
    }

    /// Moves the select for `field` by `delta` choices, wrapping.
    pub fn cycle_filter(&mut self, field: FilterField, delta: isize) {
        let choices = self.options.choices(field, self.filters.get(field));
        let len = choices.len() as isize;
        let current = choices
            .iter()
            .position(|c| c.as_deref() == self.filters.get(field))
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.filters.set(field, choices[next].clone());
    }

    pub fn clear_filters(&mut self) {
        for field in FilterField::ALL {
            self.filters.set(field, None);
        }
        self.filters.search = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(category: &str, color: Option<&str>) -> Product {
        Product {
            name: format!("{category} item"),
            category: category.to_string(),
            color_group: color.map(str::to_string),
            ..Product::default()
        }
    }

    #[test]
    fn test_cycle_filter_wraps_through_all() {
        let mut state = CatalogState::default();
        state.options.absorb(&[product("Laminates", None), product("Tiles", None)]);

        state.cycle_filter(FilterField::Category, 1);
        assert_eq!(state.filters.category.as_deref(), Some("Laminates"));
        state.cycle_filter(FilterField::Category, 1);
        assert_eq!(state.filters.category.as_deref(), Some("Tiles"));
        state.cycle_filter(FilterField::Category, 1);
        assert_eq!(state.filters.category, None);
        state.cycle_filter(FilterField::Category, -1);
        assert_eq!(state.filters.category.as_deref(), Some("Tiles"));
    }
}
