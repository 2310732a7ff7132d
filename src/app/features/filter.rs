use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    features::search::{invalidate_suggestions, submit},
    state::{AppMode, AppState, CLEAR_FILTERS_ROW},
};
use crate::domain::models::FilterField;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::FocusFilters => {
            state.mode = AppMode::Filters;
            UpdateResult::Handled(None)
        }
        Action::FilterCursorNext => {
            state.catalog.filter_cursor = (state.catalog.filter_cursor + 1) % (CLEAR_FILTERS_ROW + 1);
            UpdateResult::Handled(None)
        }
        Action::FilterCursorPrev => {
            state.catalog.filter_cursor = if state.catalog.filter_cursor == 0 {
                CLEAR_FILTERS_ROW
            } else {
                state.catalog.filter_cursor - 1
            };
            UpdateResult::Handled(None)
        }
        Action::FilterOptionNext => UpdateResult::Handled(cycle_under_cursor(state, 1)),
        Action::FilterOptionPrev => UpdateResult::Handled(cycle_under_cursor(state, -1)),
        Action::FilterActivate => match state.catalog.cursor_field() {
            Some(field) => UpdateResult::Handled(Some(change_filter(state, field, 1))),
            None => UpdateResult::Handled(Some(clear_filters(state))),
        },
        Action::CycleFilter(field, delta) => {
            state.mode = AppMode::Filters;
            if let Some(row) = FilterField::ALL.iter().position(|f| f == field) {
                state.catalog.filter_cursor = row;
            }
            UpdateResult::Handled(Some(change_filter(state, *field, *delta)))
        }
        Action::ClearFilters => UpdateResult::Handled(Some(clear_filters(state))),
        _ => UpdateResult::NotHandled,
    }
}

fn cycle_under_cursor(state: &mut AppState, delta: isize) -> Option<Command> {
    let field = state.catalog.cursor_field()?;
    Some(change_filter(state, field, delta))
}

/// Selects auto-submit on change.
fn change_filter(state: &mut AppState, field: FilterField, delta: isize) -> Command {
    state.catalog.cycle_filter(field, delta);
    submit(state)
}

fn clear_filters(state: &mut AppState) -> Command {
    state.catalog.clear_filters();
    state.search.input.set_value("");
    invalidate_suggestions(state);
    submit(state)
}
