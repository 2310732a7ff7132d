use crate::app::action::Action;
use crate::domain::catalog::CatalogService;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Owns the single debounce timer of the suggestion panel.
///
/// Each `schedule` aborts the previous timer, so only the last keystroke of a
/// burst reaches the network. Once the quiet period has elapsed the fetch runs
/// on its own task: cancelling later never aborts a request already in flight,
/// the reducer just ignores its result if it is stale.
pub struct SuggestionController {
    service: Arc<dyn CatalogService>,
    tx: mpsc::Sender<Action>,
    quiet_period: Duration,
    limit: usize,
    pending: Option<JoinHandle<()>>,
}

impl SuggestionController {
    pub fn new(
        service: Arc<dyn CatalogService>,
        tx: mpsc::Sender<Action>,
        quiet_period: Duration,
        limit: usize,
    ) -> Self {
        Self {
            service,
            tx,
            quiet_period,
            limit,
            pending: None,
        }
    }

    pub fn schedule(&mut self, seq: u64, query: String) {
        self.cancel();

        let service = self.service.clone();
        let tx = self.tx.clone();
        let quiet_period = self.quiet_period;
        let limit = self.limit;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            tracing::debug!(seq, "Fetching suggestions for {query:?}");
            tokio::spawn(fetch(service, tx, seq, query, limit));
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for SuggestionController {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn fetch(
    service: Arc<dyn CatalogService>,
    tx: mpsc::Sender<Action>,
    seq: u64,
    query: String,
    limit: usize,
) {
    match service.search_suggestions(&query, limit).await {
        Ok(items) => {
            let _ = tx
                .send(Action::SuggestionsLoaded { seq, query, items })
                .await;
        }
        // Soft-fail: the panel keeps whatever it showed before.
        Err(e) => tracing::warn!("Suggestion fetch for {query:?} failed: {e:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::MockCatalogService;
    use crate::domain::models::SuggestionItem;
    use std::sync::Mutex;

    const QUIET: Duration = Duration::from_millis(300);

    fn recording_mock(calls: Arc<Mutex<Vec<(String, usize)>>>) -> MockCatalogService {
        let mut mock = MockCatalogService::new();
        mock.expect_search_suggestions().returning(move |q, limit| {
            calls.lock().unwrap().push((q.to_string(), limit));
            Ok(vec![SuggestionItem {
                name: format!("{q} result"),
                category: "Electronics".to_string(),
            }])
        });
        mock
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_of_keystrokes_fetches_once_with_last_value() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (tx, mut rx) = mpsc::channel(8);
        let mut controller =
            SuggestionController::new(Arc::new(recording_mock(calls.clone())), tx, QUIET, 5);

        for (seq, query) in ["la", "lap", "lapt"].into_iter().enumerate() {
            controller.schedule(seq as u64 + 1, query.to_string());
            tokio::time::advance(Duration::from_millis(100)).await;
        }
        assert!(calls.lock().unwrap().is_empty());

        let action = rx.recv().await.unwrap();
        match action {
            Action::SuggestionsLoaded { seq, query, items } => {
                assert_eq!(seq, 3);
                assert_eq!(query, "lapt");
                assert_eq!(items[0].name, "lapt result");
            }
            other => panic!("Expected SuggestionsLoaded, got {other:?}"),
        }

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(*calls.lock().unwrap(), vec![("lapt".to_string(), 5)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_quiet_period() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (tx, mut rx) = mpsc::channel(8);
        let mut controller =
            SuggestionController::new(Arc::new(recording_mock(calls.clone())), tx, QUIET, 5);

        controller.schedule(1, "oak".to_string());
        assert!(controller.is_pending());
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(calls.lock().unwrap().is_empty());

        assert!(rx.recv().await.is_some());
        assert_eq!(calls.lock().unwrap().len(), 1);
        assert!(!controller.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_fetch() {
        let mut mock = MockCatalogService::new();
        mock.expect_search_suggestions().never();
        let (tx, mut rx) = mpsc::channel(8);
        let mut controller = SuggestionController::new(Arc::new(mock), tx, QUIET, 5);

        controller.schedule(1, "oak".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
        controller.cancel();
        assert!(!controller.is_pending());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_fetch_sends_nothing() {
        let mut mock = MockCatalogService::new();
        mock.expect_search_suggestions()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("connection refused")));
        let (tx, mut rx) = mpsc::channel(8);
        let mut controller = SuggestionController::new(Arc::new(mock), tx, QUIET, 5);

        controller.schedule(1, "oak".to_string());
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }
}
