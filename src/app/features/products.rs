use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AlertKind, AppMode, AppState, ImageModalState},
};
use crate::domain::models::ProductListing;
use std::time::Instant;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::FocusProducts => {
            state.mode = AppMode::Browse;
            UpdateResult::Handled(None)
        }
        Action::SelectNextProduct => {
            move_selection(state, 1);
            UpdateResult::Handled(None)
        }
        Action::SelectPrevProduct => {
            move_selection(state, -1);
            UpdateResult::Handled(None)
        }
        Action::SelectProduct(idx) => {
            if *idx < state.catalog.products().len() {
                state.catalog.selected = Some(*idx);
                state.mode = AppMode::Browse;
            }
            UpdateResult::Handled(None)
        }
        Action::HoverProduct(idx) => {
            state.catalog.hovered = idx.filter(|i| *i < state.catalog.products().len());
            UpdateResult::Handled(None)
        }
        Action::NextPage => {
            let has_next = state.catalog.page.as_ref().is_some_and(|p| p.has_next);
            if !has_next || state.catalog.is_loading {
                return UpdateResult::Handled(None);
            }
            state.catalog.filters.page += 1;
            UpdateResult::Handled(Some(load(state)))
        }
        Action::PrevPage => {
            let has_prev = state.catalog.page.as_ref().is_some_and(|p| p.has_prev);
            if !has_prev || state.catalog.is_loading || state.catalog.filters.page <= 1 {
                return UpdateResult::Handled(None);
            }
            state.catalog.filters.page -= 1;
            UpdateResult::Handled(Some(load(state)))
        }
        Action::ReloadProducts => UpdateResult::Handled(Some(load(state))),
        Action::ProductsLoaded { filters, listing } => {
            if *filters != state.catalog.filters {
                tracing::debug!(page = filters.page, "Dropping products for superseded filters");
                return UpdateResult::Handled(None);
            }
            let ProductListing { page, options } = (**listing).clone();
            state.catalog.options = options;
            state.catalog.filters.page = page.current_page.max(1);
            state.catalog.selected = match state.catalog.selected {
                _ if page.products.is_empty() => None,
                Some(i) if i < page.products.len() => Some(i),
                _ => Some(0),
            };
            state.catalog.hovered = None;
            state.catalog.is_loading = false;
            state.catalog.page = Some(page);
            UpdateResult::Handled(None)
        }
        Action::ProductsFailed { filters, message } => {
            if *filters != state.catalog.filters {
                return UpdateResult::Handled(None);
            }
            state.catalog.is_loading = false;
            state.alerts.push(
                format!("Could not load products: {message}"),
                AlertKind::Danger,
                Instant::now(),
            );
            UpdateResult::Handled(None)
        }
        Action::OpenImageModal => {
            let Some(product) = state.catalog.selected_product() else {
                return UpdateResult::Handled(None);
            };
            let Some(source) = product.image_source().map(str::to_string) else {
                tracing::debug!("{} has no image", product.id);
                return UpdateResult::Handled(None);
            };
            let alt = product.name.clone();
            state.image_modal = Some(ImageModalState {
                source,
                alt,
                return_mode: state.mode,
            });
            state.mode = AppMode::ImageModal;
            UpdateResult::Handled(None)
        }
        Action::CopySelectedName => UpdateResult::Handled(
            state
                .catalog
                .selected_product()
                .map(|p| Command::CopyToClipboard(p.name.clone())),
        ),
        Action::CopySelectedUrl => UpdateResult::Handled(
            state
                .catalog
                .selected_product()
                .and_then(|p| p.product_url.as_deref())
                .filter(|url| !url.trim().is_empty())
                .map(|url| Command::CopyToClipboard(url.to_string())),
        ),
        _ => UpdateResult::NotHandled,
    }
}

fn move_selection(state: &mut AppState, delta: isize) {
    let len = state.catalog.products().len();
    if len == 0 {
        state.catalog.selected = None;
        return;
    }
    let next = match state.catalog.selected {
        Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
        None => 0,
    };
    state.catalog.selected = Some(next);
}

fn load(state: &mut AppState) -> Command {
    state.catalog.is_loading = true;
    Command::LoadProducts(state.catalog.filters.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::domain::models::{FilterField, FilterOptions, Product, ProductId, ProductPage};

    fn page(names: &[&str], current_page: u32, has_next: bool) -> ProductPage {
        ProductPage {
            products: names
                .iter()
                .enumerate()
                .map(|(i, name)| Product {
                    id: ProductId(i as i64 + 1),
                    name: name.to_string(),
                    category: "Laminates".to_string(),
                    image_url: (i == 0).then(|| format!("https://img.example/{name}.jpg")),
                    product_url: Some(format!("https://catalog.example/{name}")),
                    ..Product::default()
                })
                .collect(),
            total: names.len() as u64,
            pages: 2,
            current_page,
            has_next,
            has_prev: current_page > 1,
        }
    }

    fn loaded(filters: &crate::domain::models::ProductFilters, page: ProductPage) -> Action {
        Action::ProductsLoaded {
            filters: filters.clone(),
            listing: Box::new(ProductListing {
                options: FilterOptions::from_products(&page.products),
                page,
            }),
        }
    }

    /// Delivers `page` as the answer to the current request.
    fn deliver(state: &mut AppState, page: ProductPage) {
        let action = loaded(&state.catalog.filters, page);
        reducer::update(state, action);
    }

    #[test]
    fn test_loaded_page_selects_first_and_feeds_options() {
        let mut state = AppState::default();
        state.catalog.is_loading = true;
        deliver(&mut state, page(&["Oak", "Ash"], 1, true));

        assert_eq!(state.catalog.selected, Some(0));
        assert!(!state.catalog.is_loading);
        assert_eq!(
            state
                .catalog
                .options
                .choices(FilterField::Category, None)
                .len(),
            2
        );
    }

    #[test]
    fn test_pagination_respects_flags() {
        let mut state = AppState::default();
        deliver(&mut state, page(&["Oak"], 1, true));

        assert_eq!(reducer::update(&mut state, Action::PrevPage), None);
        let cmd = reducer::update(&mut state, Action::NextPage);
        assert!(matches!(cmd, Some(Command::LoadProducts(ref f)) if f.page == 2));

        // Second press while loading is ignored
        assert_eq!(reducer::update(&mut state, Action::NextPage), None);
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = AppState::default();
        deliver(&mut state, page(&["Oak", "Ash", "Elm"], 1, false));
        reducer::update(&mut state, Action::SelectPrevProduct);
        assert_eq!(state.catalog.selected, Some(2));
        reducer::update(&mut state, Action::SelectNextProduct);
        assert_eq!(state.catalog.selected, Some(0));
    }

    #[test]
    fn test_hover_ignores_missing_cards() {
        let mut state = AppState::default();
        deliver(&mut state, page(&["Oak", "Ash"], 1, false));
        reducer::update(&mut state, Action::HoverProduct(Some(1)));
        assert_eq!(state.catalog.hovered, Some(1));
        reducer::update(&mut state, Action::HoverProduct(Some(9)));
        assert_eq!(state.catalog.hovered, None);
    }

    #[test]
    fn test_image_modal_needs_an_image() {
        let mut state = AppState::default();
        deliver(&mut state, page(&["Oak", "Ash"], 1, false));

        reducer::update(&mut state, Action::SelectProduct(1));
        reducer::update(&mut state, Action::OpenImageModal);
        assert_eq!(state.mode, AppMode::Browse);
        assert!(state.image_modal.is_none());

        reducer::update(&mut state, Action::SelectProduct(0));
        reducer::update(&mut state, Action::OpenImageModal);
        assert_eq!(state.mode, AppMode::ImageModal);
        let modal = state.image_modal.as_ref().unwrap();
        assert_eq!(modal.source, "https://img.example/Oak.jpg");
        assert_eq!(modal.alt, "Oak");

        reducer::update(&mut state, Action::CloseImageModal);
        assert_eq!(state.mode, AppMode::Browse);
        assert!(state.image_modal.is_none());
    }

    #[test]
    fn test_copy_commands() {
        let mut state = AppState::default();
        assert_eq!(reducer::update(&mut state, Action::CopySelectedName), None);

        deliver(&mut state, page(&["Oak"], 1, false));
        assert_eq!(
            reducer::update(&mut state, Action::CopySelectedName),
            Some(Command::CopyToClipboard("Oak".to_string()))
        );
        assert_eq!(
            reducer::update(&mut state, Action::CopySelectedUrl),
            Some(Command::CopyToClipboard(
                "https://catalog.example/Oak".to_string()
            ))
        );
    }

    #[test]
    fn test_failed_load_raises_alert() {
        let mut state = AppState::default();
        state.catalog.is_loading = true;
        let action = Action::ProductsFailed {
            filters: state.catalog.filters.clone(),
            message: "timeout".to_string(),
        };
        reducer::update(&mut state, action);
        assert!(!state.catalog.is_loading);
        let alert = state.alerts.iter().next().unwrap();
        assert_eq!(alert.kind, AlertKind::Danger);
        assert!(alert.message.contains("timeout"));
    }

    #[test]
    fn test_superseded_listing_is_dropped() {
        let mut state = AppState::default();
        deliver(&mut state, page(&["Oak", "Slate"], 1, false));
        state.catalog.options = FilterOptions::from_products(&[
            Product {
                category: "Laminates".to_string(),
                ..Product::default()
            },
            Product {
                category: "Tiles".to_string(),
                ..Product::default()
            },
        ]);

        let first = reducer::update(&mut state, Action::CycleFilter(FilterField::Category, 1));
        let second = reducer::update(&mut state, Action::CycleFilter(FilterField::Category, 1));
        let (Some(Command::SubmitSearch(laminates)), Some(Command::SubmitSearch(tiles))) =
            (first, second)
        else {
            panic!("Expected two submits");
        };
        assert_eq!(tiles.category.as_deref(), Some("Tiles"));

        // The newer request answers first, the older one straggles in after
        reducer::update(&mut state, loaded(&tiles, page(&["Slate"], 1, false)));
        reducer::update(&mut state, loaded(&laminates, page(&["Oak"], 1, false)));

        assert_eq!(state.catalog.filters.category.as_deref(), Some("Tiles"));
        let names: Vec<_> = state.catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Slate"]);
        assert!(!state.catalog.is_loading);

        // A late failure for old filters is silent too
        let stale_failure = Action::ProductsFailed {
            filters: laminates,
            message: "timeout".to_string(),
        };
        reducer::update(&mut state, stale_failure);
        assert!(state.alerts.is_empty());
    }
}
