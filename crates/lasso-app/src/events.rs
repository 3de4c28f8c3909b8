use std::path::{Path, PathBuf};
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lasso_core::history::SearchHistory;
use lasso_types::AppEvent;
use tokio::sync::Mutex;

use crate::state::AppState;

pub mod export;
pub mod open_search;
pub mod region_selected;

use export::handle_save_capture;
use open_search::{
    handle_image_results, handle_image_search, handle_text_search, handle_translation,
};
use region_selected::handle_region_selected;

/// App's main loop: drains UI events and dispatches the handlers.
///
/// Capture pipelines are detached tasks; the loop itself never blocks
/// on the OCR engine, so a slow or hung recognition stalls only that
/// capture's result.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    history_path: PathBuf,
) -> anyhow::Result<()> {
    let history_capacity = state.config.read().await.history.size;

    let history = SearchHistory::load(&history_path, history_capacity).unwrap_or_else(|e| {
        tracing::warn!("could not load search history: {e}");
        SearchHistory::new(history_capacity)
    });
    let history = Arc::new(Mutex::new(history));

    let _ = app_to_ui_tx.send(AppEvent::BackendReady).await;

    tracing::info!("event loop started");
    loop {
        let event = ui_to_app_rx.recv().await?;
        tracing::debug!(event = ?std::mem::discriminant(&event), "event received");

        match event {
            AppEvent::Exit => {
                let _ = app_to_ui_tx.send(AppEvent::Exit).await;
                tracing::info!("exit requested");
                return Ok(());
            }
            other => {
                handle_event(state.clone(), &app_to_ui_tx, &history, &history_path, other).await?;
            }
        }
    }
}

async fn handle_event(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    history: &Arc<Mutex<SearchHistory>>,
    history_path: &Path,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        // The overlay is a window; arm it on the UI side.
        AppEvent::ShowOverlay => {
            let _ = app_to_ui_tx.send(AppEvent::ShowOverlay).await;
        }
        AppEvent::OverlayCancelled => {
            tracing::debug!("selection cancelled");
        }
        AppEvent::RegionSelected(rect) => {
            handle_region_selected(state, rect, app_to_ui_tx, history, history_path).await?;
        }
        AppEvent::OpenTextSearch { engine, query } => {
            handle_text_search(engine, &query, app_to_ui_tx, history, history_path).await?;
        }
        AppEvent::OpenImageResults { engine, query } => {
            handle_image_results(engine, &query, app_to_ui_tx, history, history_path).await?;
        }
        AppEvent::OpenImageSearch { engine } => {
            handle_image_search(state, engine, app_to_ui_tx).await?;
        }
        AppEvent::OpenTranslation(text) => {
            handle_translation(&text, app_to_ui_tx).await?;
        }
        AppEvent::CopyText(text) => {
            if let Err(e) = lasso_io::clipboard::copy_text(&text) {
                tracing::warn!("clipboard copy failed: {e}");
                send_status(app_to_ui_tx, "Clipboard copy failed", false).await;
            } else {
                send_status(app_to_ui_tx, "Copied to clipboard", false).await;
            }
        }
        AppEvent::SaveCapture => {
            handle_save_capture(state, app_to_ui_tx).await?;
        }
        AppEvent::SetEngine(engine) => {
            {
                let mut config = state.config.write().await;
                config.search.default_engine = engine;
            }
            let config = state.config.read().await;
            if let Err(e) = crate::profile::save_user_profile("main", &config) {
                tracing::warn!("could not persist engine choice: {e}");
            }
            drop(config);
            tracing::info!(%engine, "search engine changed");
            let _ = app_to_ui_tx.send(AppEvent::SetEngine(engine)).await;
        }
        AppEvent::ClearHistory => {
            let mut history = history.lock().await;
            history.clear();
            if let Err(e) = history.save(history_path) {
                tracing::warn!("could not persist history: {e}");
            }
        }
        // UI-bound or already handled; nothing to do in the backend.
        AppEvent::ShowResults(_)
        | AppEvent::StatusUpdate { .. }
        | AppEvent::BackendReady
        | AppEvent::Exit => {}
    }

    Ok(())
}

pub(crate) async fn send_status(tx: &AsyncSender<AppEvent>, status: &str, capturing: bool) {
    let _ = tx
        .send(AppEvent::StatusUpdate {
            status: status.to_string(),
            capturing,
        })
        .await;
}
