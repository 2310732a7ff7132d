use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AlertKind, AppMode, AppState},
};
use std::time::Instant;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleAdmin => {
            if state.mode == AppMode::Admin {
                state.mode = AppMode::Browse;
                state.admin.next_refresh_at = None;
                return UpdateResult::Handled(None);
            }
            state.search.panel.hide();
            state.mode = AppMode::Admin;
            state.admin.is_loading = true;
            UpdateResult::Handled(Some(Command::LoadAdminStatus))
        }
        Action::RefreshAdmin => {
            state.admin.is_loading = true;
            UpdateResult::Handled(Some(Command::LoadAdminStatus))
        }
        Action::StartScrape => {
            let now = Instant::now();
            if !state.admin.scrape_enabled(now) {
                return UpdateResult::Handled(None);
            }
            state.admin.cooldown_until = Some(now + state.config.scrape_cooldown());
            UpdateResult::Handled(Some(Command::StartScrape))
        }
        Action::AdminStatusLoaded(status) => {
            apply_status(state, status.clone());
            UpdateResult::Handled(None)
        }
        Action::ScrapeStarted(status) => {
            apply_status(state, status.clone());
            state.alerts.push(
                "Scraping started in background. Check the admin panel for progress.",
                AlertKind::Success,
                Instant::now(),
            );
            UpdateResult::Handled(None)
        }
        Action::AdminFailed(msg) => {
            state.admin.is_loading = false;
            state
                .alerts
                .push(msg.clone(), AlertKind::Danger, Instant::now());
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn apply_status(state: &mut AppState, status: crate::domain::models::AdminStatus) {
    let now = Instant::now();
    state
        .admin
        .apply_status(status, now, state.config.admin_refresh());
    // Auto-reload only while the admin view is actually open
    if !is_admin_visible(state) {
        state.admin.next_refresh_at = None;
    }
}

pub(crate) fn is_admin_visible(state: &AppState) -> bool {
    match state.mode {
        AppMode::Admin => true,
        AppMode::ImageModal => state
            .image_modal
            .as_ref()
            .is_some_and(|m| m.return_mode == AppMode::Admin),
        _ => false,
    }
}

/// Called on every tick: fires the periodic reload when it is due.
pub(crate) fn on_tick(state: &mut AppState, now: Instant) -> Option<Command> {
    if !is_admin_visible(state) || !state.admin.refresh_due(now) {
        return None;
    }
    state.admin.next_refresh_at = None;
    state.admin.is_loading = true;
    Some(Command::LoadAdminStatus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::domain::models::AdminStatus;
    use std::time::Duration;

    fn status(running: bool) -> AdminStatus {
        AdminStatus {
            running,
            fetched_at: chrono::Local::now(),
        }
    }

    #[test]
    fn test_toggle_loads_status() {
        let mut state = AppState::default();
        let cmd = reducer::update(&mut state, Action::ToggleAdmin);
        assert_eq!(cmd, Some(Command::LoadAdminStatus));
        assert_eq!(state.mode, AppMode::Admin);

        reducer::update(&mut state, Action::ToggleAdmin);
        assert_eq!(state.mode, AppMode::Browse);
    }

    #[test]
    fn test_scrape_cooldown() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::ToggleAdmin);

        assert_eq!(
            reducer::update(&mut state, Action::StartScrape),
            Some(Command::StartScrape)
        );
        assert!(!state.admin.scrape_enabled(Instant::now()));
        assert_eq!(reducer::update(&mut state, Action::StartScrape), None);

        // Cooldown elapsed
        state.admin.cooldown_until = Some(Instant::now() - Duration::from_millis(1));
        assert!(state.admin.scrape_enabled(Instant::now()));
        assert_eq!(
            reducer::update(&mut state, Action::StartScrape),
            Some(Command::StartScrape)
        );
    }

    #[test]
    fn test_refresh_scheduled_only_while_running() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::ToggleAdmin);

        reducer::update(&mut state, Action::AdminStatusLoaded(status(false)));
        assert_eq!(state.admin.next_refresh_at, None);
        assert_eq!(on_tick(&mut state, Instant::now() + Duration::from_secs(60)), None);

        reducer::update(&mut state, Action::AdminStatusLoaded(status(true)));
        let due = state.admin.next_refresh_at.expect("refresh scheduled");
        assert!(due > Instant::now() + Duration::from_secs(29));

        assert_eq!(on_tick(&mut state, Instant::now()), None);
        assert_eq!(
            on_tick(&mut state, due + Duration::from_millis(1)),
            Some(Command::LoadAdminStatus)
        );
        // Fires once per schedule
        assert_eq!(on_tick(&mut state, due + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_leaving_admin_stops_refresh() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::ToggleAdmin);
        reducer::update(&mut state, Action::AdminStatusLoaded(status(true)));
        reducer::update(&mut state, Action::ToggleAdmin);
        assert_eq!(state.admin.next_refresh_at, None);

        // A late status for a closed admin view schedules nothing
        reducer::update(&mut state, Action::AdminStatusLoaded(status(true)));
        assert_eq!(state.admin.next_refresh_at, None);
    }

    #[test]
    fn test_scrape_started_alerts() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::ToggleAdmin);
        reducer::update(&mut state, Action::ScrapeStarted(status(true)));
        assert!(state.admin.is_running());
        assert_eq!(state.alerts.iter().next().unwrap().kind, AlertKind::Success);
    }
}
