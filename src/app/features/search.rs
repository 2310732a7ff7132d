use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::FocusSearch => {
            state.mode = AppMode::Search;
            UpdateResult::Handled(None)
        }
        Action::SearchKey(key) => {
            let before = state.search.input.value();
            state.search.input.input(*key);
            // The search box is single-line; fold anything that slipped in as a newline.
            if state.search.input.lines().len() > 1 {
                let value = state.search.input.value();
                state.search.input.set_value(&value);
            }
            // Cursor movement is not an edit
            if state.search.input.value() == before {
                return UpdateResult::Handled(None);
            }
            UpdateResult::Handled(on_input_changed(state))
        }
        Action::SearchInputChanged(value) => {
            state.search.input.set_value(value);
            UpdateResult::Handled(on_input_changed(state))
        }
        Action::SuggestionNext => {
            state.search.panel.highlight_next();
            UpdateResult::Handled(None)
        }
        Action::SuggestionPrev => {
            state.search.panel.highlight_prev();
            UpdateResult::Handled(None)
        }
        Action::SuggestionSelected(index) => {
            let Some(name) = state.search.panel.get(*index).map(|s| s.name.clone()) else {
                return UpdateResult::Handled(None);
            };
            UpdateResult::Handled(Some(select_suggestion(state, &name)))
        }
        Action::SubmitSearch => {
            let highlighted = state
                .search
                .panel
                .highlighted()
                .and_then(|i| state.search.panel.get(i))
                .map(|s| s.name.clone());
            let command = match highlighted {
                Some(name) => select_suggestion(state, &name),
                None => {
                    invalidate_suggestions(state);
                    state.mode = AppMode::Browse;
                    submit(state)
                }
            };
            UpdateResult::Handled(Some(command))
        }
        Action::OutsideClick => {
            state.search.panel.hide();
            UpdateResult::Handled(None)
        }
        Action::SuggestionsLoaded { seq, query, items } => {
            if state.config.discard_stale_suggestions && *seq != state.search.seq {
                tracing::debug!(
                    seq,
                    current = state.search.seq,
                    "Dropping stale suggestions for {query:?}"
                );
                return UpdateResult::Handled(None);
            }
            state
                .search
                .panel
                .show(items.clone(), state.config.suggestion_limit);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Every edit invalidates earlier fetches. Short queries hide the panel right away.
fn on_input_changed(state: &mut AppState) -> Option<Command> {
    state.search.seq += 1;
    let query = state.search.query();
    if query.chars().count() < state.config.min_query_chars {
        state.search.panel.hide();
        return Some(Command::CancelSuggestions);
    }
    Some(Command::ScheduleSuggestions {
        seq: state.search.seq,
        query,
    })
}

fn select_suggestion(state: &mut AppState, name: &str) -> Command {
    state.search.input.set_value(name);
    invalidate_suggestions(state);
    state.mode = AppMode::Browse;
    submit(state)
}

pub(crate) fn invalidate_suggestions(state: &mut AppState) {
    state.search.seq += 1;
    state.search.panel.hide();
}

/// Submits the catalog form (search text plus filters) from page 1.
pub(crate) fn submit(state: &mut AppState) -> Command {
    let query = state.search.query();
    state.catalog.filters.search = (!query.is_empty()).then_some(query);
    state.catalog.filters.page = 1;
    state.catalog.is_loading = true;
    Command::SubmitSearch(state.catalog.filters.clone())
}
