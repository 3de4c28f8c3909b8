use std::path::Path;
use std::sync::Arc;

use kanal::AsyncSender;
use lasso_core::history::SearchHistory;
use lasso_core::search;
use lasso_types::{AppEvent, SearchEngine};
use tokio::sync::Mutex;

use crate::events::send_status;
use crate::state::AppState;

/// Open a text web search for `query` in the system browser and record
/// the query in history.
pub async fn handle_text_search(
    engine: SearchEngine,
    query: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    history: &Arc<Mutex<SearchHistory>>,
    history_path: &Path,
) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        send_status(app_to_ui_tx, "Nothing to search", false).await;
        return Ok(());
    }

    let url = search::text_url(engine, query)?;
    tracing::info!(%engine, chars = query.len(), "opening text search");
    open_and_record(url.as_str(), query, app_to_ui_tx, history, history_path).await;
    Ok(())
}

/// Image results for a text query (Google `tbm=isch`, Bing images).
pub async fn handle_image_results(
    engine: SearchEngine,
    query: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    history: &Arc<Mutex<SearchHistory>>,
    history_path: &Path,
) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        send_status(app_to_ui_tx, "Nothing to search", false).await;
        return Ok(());
    }

    let url = search::image_results_url(engine, query)?;
    tracing::info!(%engine, chars = query.len(), "opening image results");
    open_and_record(url.as_str(), query, app_to_ui_tx, history, history_path).await;
    Ok(())
}

/// Reverse image search: put the last capture on the clipboard and open
/// the engine's visual-search page, where the user pastes it.
pub async fn handle_image_search(
    state: Arc<AppState>,
    engine: SearchEngine,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some((captured, _text)) = state.last_capture() else {
        send_status(app_to_ui_tx, "No capture to search with", false).await;
        return Ok(());
    };

    let png = captured.png.clone();
    let copied = tokio::task::spawn_blocking(move || lasso_io::clipboard::copy_png(&png)).await?;
    if let Err(e) = copied {
        tracing::warn!("could not copy capture to clipboard: {e}");
    }

    let url = search::reverse_image_url(engine)?;
    tracing::info!(%engine, "opening reverse image search");

    match lasso_io::browser::open_url(url.as_str()) {
        Ok(()) => {
            send_status(
                app_to_ui_tx,
                "Image copied, paste it into the search page",
                false,
            )
            .await;
        }
        Err(e) => {
            tracing::error!("could not open browser: {e}");
            send_status(app_to_ui_tx, "Could not open browser", false).await;
        }
    }

    Ok(())
}

/// Open the recognized text in the web translator.
pub async fn handle_translation(
    text: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let text = text.trim();
    if text.is_empty() {
        send_status(app_to_ui_tx, "Nothing to translate", false).await;
        return Ok(());
    }

    let url = search::translate_url(text)?;
    tracing::info!(chars = text.len(), "opening translation");

    match lasso_io::browser::open_url(url.as_str()) {
        Ok(()) => {
            send_status(app_to_ui_tx, "Translation opened in browser", false).await;
        }
        Err(e) => {
            tracing::error!("could not open browser: {e}");
            send_status(app_to_ui_tx, "Could not open browser", false).await;
        }
    }

    Ok(())
}

async fn open_and_record(
    url: &str,
    query: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    history: &Arc<Mutex<SearchHistory>>,
    history_path: &Path,
) {
    match lasso_io::browser::open_url(url) {
        Ok(()) => {
            {
                let mut history = history.lock().await;
                history.add(query);
                if let Err(e) = history.save(history_path) {
                    tracing::warn!("could not persist history: {e}");
                }
            }
            send_status(app_to_ui_tx, "Search opened in browser", false).await;
        }
        Err(e) => {
            tracing::error!("could not open browser: {e}");
            send_status(app_to_ui_tx, "Could not open browser", false).await;
        }
    }
}
