use crate::app::{action::Action, command::Command, state::AlertKind};
use crate::domain::catalog::CatalogService;
use crate::infrastructure::clipboard::Clipboard;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs the network and clipboard side effects on background tasks.
/// Suggestion commands belong to the `SuggestionController` and are ignored here.
pub fn handle_command(
    command: Command,
    service: Arc<dyn CatalogService>,
    clipboard: Arc<dyn Clipboard>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::LoadProducts(filters) | Command::SubmitSearch(filters) => {
            tokio::spawn(async move {
                let action = match service.list_products(&filters).await {
                    Ok(listing) => Action::ProductsLoaded {
                        filters,
                        listing: Box::new(listing),
                    },
                    Err(e) => {
                        tracing::error!(page = filters.page, "Failed to load products: {e:#}");
                        Action::ProductsFailed {
                            filters,
                            message: format!("{e}"),
                        }
                    }
                };
                let _ = tx.send(action).await;
            });
        }
        Command::LoadAdminStatus => {
            tokio::spawn(async move {
                match service.admin_status().await {
                    Ok(status) => {
                        let _ = tx.send(Action::AdminStatusLoaded(status)).await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Action::AdminFailed(format!(
                                "Could not load admin status: {e}"
                            )))
                            .await;
                    }
                }
            });
        }
        Command::StartScrape => {
            tokio::spawn(async move {
                match service.start_scrape().await {
                    Ok(status) => {
                        tracing::info!(running = status.running, "Scrape started");
                        let _ = tx.send(Action::ScrapeStarted(status)).await;
                    }
                    Err(e) => {
                        tracing::error!("Failed to start scrape: {e:#}");
                        let _ = tx
                            .send(Action::AdminFailed(format!("Error starting scrape: {e}")))
                            .await;
                    }
                }
            });
        }
        Command::CopyToClipboard(text) => {
            tokio::spawn(async move {
                let copied = tokio::task::spawn_blocking(move || clipboard.copy_text(&text)).await;
                let alert = match copied {
                    Ok(Ok(())) => Action::ShowAlert("Copied to clipboard".to_string(), AlertKind::Success),
                    Ok(Err(e)) => {
                        tracing::warn!("Copy failed: {e:#}");
                        Action::ShowAlert("Copy failed".to_string(), AlertKind::Danger)
                    }
                    Err(e) => {
                        tracing::warn!("Clipboard task failed: {e}");
                        Action::ShowAlert("Copy failed".to_string(), AlertKind::Danger)
                    }
                };
                let _ = tx.send(alert).await;
            });
        }
        Command::ScheduleSuggestions { .. } | Command::CancelSuggestions => {}
    }
    Ok(())
}
