use crate::domain::models::AdminStatus;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminState {
    pub status: Option<AdminStatus>,
    pub is_loading: bool,
    // Scrape button stays disabled until this instant
    pub cooldown_until: Option<Instant>,
    // Set only while a scrape is reported running
    pub next_refresh_at: Option<Instant>,
}

impl AdminState {
    pub fn scrape_enabled(&self, now: Instant) -> bool {
        self.cooldown_until.is_none_or(|until| now >= until)
    }

    pub fn is_running(&self) -> bool {
        self.status.as_ref().is_some_and(|s| s.running)
    }

    pub fn apply_status(&mut self, status: AdminStatus, now: Instant, refresh: Duration) {
        self.next_refresh_at = status.running.then(|| now + refresh);
        self.status = Some(status);
        self.is_loading = false;
    }

    pub fn refresh_due(&self, now: Instant) -> bool {
        self.next_refresh_at.is_some_and(|at| now >= at)
    }
}
