use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    features::{admin, search},
    state::{AppMode, AppState, SPINNER_FRAMES},
};
use std::time::Instant;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            let now = Instant::now();
            state.frame_count = state.frame_count.wrapping_add(1);
            state.spinner = SPINNER_FRAMES[(state.frame_count as usize) % SPINNER_FRAMES.len()];
            state.alerts.expire(now, state.config.alert_timeout());
            UpdateResult::Handled(admin::on_tick(state, now))
        }
        Action::Resize(_, _) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::CycleFocus => {
            let command = leave_search(state);
            state.mode = match state.mode {
                AppMode::Browse => AppMode::Search,
                AppMode::Search => AppMode::Filters,
                AppMode::Filters => AppMode::Browse,
                other => other,
            };
            UpdateResult::Handled(command)
        }
        Action::CancelMode => {
            let command = leave_search(state);
            match state.mode {
                AppMode::Search | AppMode::Filters => state.mode = AppMode::Browse,
                AppMode::ImageModal => close_image_modal(state),
                AppMode::Browse | AppMode::Admin => {}
            }
            UpdateResult::Handled(command)
        }
        Action::CloseImageModal => {
            close_image_modal(state);
            UpdateResult::Handled(None)
        }
        Action::ShowAlert(message, kind) => {
            state.alerts.push(message.clone(), *kind, Instant::now());
            UpdateResult::Handled(None)
        }
        Action::DismissAlert => {
            state.alerts.dismiss_newest();
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Blurring the search bar hides the panel and drops any fetch still pending for it.
fn leave_search(state: &mut AppState) -> Option<Command> {
    if state.mode != AppMode::Search {
        return None;
    }
    search::invalidate_suggestions(state);
    Some(Command::CancelSuggestions)
}

fn close_image_modal(state: &mut AppState) {
    if let Some(modal) = state.image_modal.take() {
        state.mode = modal.return_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::app::state::AlertKind;
    use std::time::Duration;

    #[test]
    fn test_tick_expires_alerts() {
        let mut state = AppState::default();
        state.alerts.push(
            "old",
            AlertKind::Info,
            Instant::now() - Duration::from_secs(6),
        );
        reducer::update(
            &mut state,
            Action::ShowAlert("fresh".to_string(), AlertKind::Warning),
        );

        reducer::update(&mut state, Action::Tick);
        let messages: Vec<_> = state.alerts.iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, vec!["fresh"]);
    }

    #[test]
    fn test_cancel_from_search_hides_panel() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::FocusSearch);
        state.search.panel.show(
            vec![crate::domain::models::SuggestionItem {
                name: "Oak".to_string(),
                category: "Laminates".to_string(),
            }],
            5,
        );
        let seq = state.search.seq;

        let cmd = reducer::update(&mut state, Action::CancelMode);
        assert_eq!(cmd, Some(Command::CancelSuggestions));
        assert_eq!(state.mode, AppMode::Browse);
        assert!(!state.search.panel.is_visible());
        // A fetch already in flight can no longer reopen the panel
        assert!(state.search.seq > seq);

        // Nothing to cancel outside the search bar
        assert_eq!(reducer::update(&mut state, Action::CancelMode), None);
    }

    #[test]
    fn test_focus_cycle() {
        let mut state = AppState::default();
        for expected in [AppMode::Search, AppMode::Filters, AppMode::Browse] {
            reducer::update(&mut state, Action::CycleFocus);
            assert_eq!(state.mode, expected);
        }
    }
}
