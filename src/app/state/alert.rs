use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    Danger,
}

impl AlertKind {
    pub fn label(self) -> &'static str {
        match self {
            AlertKind::Info => " INFO ",
            AlertKind::Success => " OK ",
            AlertKind::Warning => " WARNING ",
            AlertKind::Danger => " ERROR ",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
    pub created_at: Instant,
    pub timestamp: DateTime<Local>,
}

/// Newest alert first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlertStack {
    alerts: Vec<Alert>,
}

impl AlertStack {
    pub fn push(&mut self, message: impl Into<String>, kind: AlertKind, now: Instant) {
        self.alerts.insert(
            0,
            Alert {
                message: message.into(),
                kind,
                created_at: now,
                timestamp: Local::now(),
            },
        );
    }

    pub fn dismiss_newest(&mut self) {
        if !self.alerts.is_empty() {
            self.alerts.remove(0);
        }
    }

    pub fn expire(&mut self, now: Instant, timeout: Duration) {
        self.alerts
            .retain(|a| now.saturating_duration_since(a.created_at) < timeout);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_and_expiry() {
        let start = Instant::now();
        let mut stack = AlertStack::default();
        stack.push("first", AlertKind::Info, start);
        stack.push("second", AlertKind::Success, start + Duration::from_secs(3));

        let messages: Vec<_> = stack.iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);

        stack.expire(start + Duration::from_secs(5), Duration::from_secs(5));
        let messages: Vec<_> = stack.iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, vec!["second"]);

        stack.dismiss_newest();
        stack.dismiss_newest();
        assert!(stack.is_empty());
    }
}
