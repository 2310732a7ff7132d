use crate::app::{
    action::Action,
    command::Command,
    handler::handle_command,
    input::{is_outside_search_click, map_event_to_action},
    reducer,
    state::AppState,
    suggestions::SuggestionController,
    ui,
};
use crate::domain::catalog::CatalogService;
use crate::infrastructure::clipboard::Clipboard;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    service: Arc<dyn CatalogService>,
    clipboard: Arc<dyn Clipboard>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, service, clipboard, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    service: Arc<dyn CatalogService>,
    clipboard: Arc<dyn Clipboard>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    let mut suggestions = SuggestionController::new(
        service.clone(),
        action_tx.clone(),
        app_state.config.debounce(),
        app_state.config.suggestion_limit,
    );

    // Initial Load
    app_state.catalog.is_loading = true;
    handle_command(
        Command::LoadProducts(app_state.catalog.filters.clone()),
        service.clone(),
        clipboard.clone(),
        action_tx.clone(),
    )?;

    loop {
        // --- 1. Render ---
        terminal.draw(|f| ui::draw(f, &app_state))?;

        // --- 2. Event Handling ---
        let actions = tokio::select! {
            _ = interval.tick() => vec![Action::Tick],

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                let size = terminal.size()?;
                let mut actions = Vec::with_capacity(2);
                // Dismissal runs first so a click elsewhere hides the panel
                // before whatever it lands on handles it.
                if is_outside_search_click(&event, &app_state, size) {
                    actions.push(Action::OutsideClick);
                }
                actions.extend(map_event_to_action(event, &app_state, size));
                actions
            },

            // Async Results
            Some(a) = action_rx.recv() => vec![a],
        };

        // --- 3. Update (Reducer) ---
        for action in actions {
            let command = reducer::update(&mut app_state, action);
            if app_state.should_quit {
                return Ok(());
            }

            match command {
                Some(Command::ScheduleSuggestions { seq, query }) => {
                    suggestions.schedule(seq, query);
                }
                Some(Command::CancelSuggestions) => suggestions.cancel(),
                Some(cmd @ Command::SubmitSearch(_)) => {
                    // A submitted form makes any pending suggestion fetch pointless
                    suggestions.cancel();
                    handle_command(cmd, service.clone(), clipboard.clone(), action_tx.clone())?;
                }
                Some(cmd) => {
                    handle_command(cmd, service.clone(), clipboard.clone(), action_tx.clone())?;
                }
                None => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
