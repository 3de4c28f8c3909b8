use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use kanal::AsyncSender;
use lasso_core::history::SearchHistory;
use lasso_core::preprocess::{DefaultPreprocessor, Preprocessor};
use lasso_core::recognition::{self, CONFIDENCE_CUTOFF};
use lasso_types::{AppEvent, RecognitionSummary, SelectionRect};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::events::send_status;
use crate::state::AppState;

/// Accept a selection and detach its capture pipeline.
///
/// The pipeline runs as its own task so the event loop keeps draining
/// while the engine works. Tokens are minted here, in event order, so
/// the newest selection cancels whatever is still in flight.
pub async fn handle_region_selected(
    state: Arc<AppState>,
    rect: SelectionRect,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    history: &Arc<Mutex<SearchHistory>>,
    history_path: &Path,
) -> anyhow::Result<()> {
    if state.config.read().await.ui.show_notifications {
        send_status(app_to_ui_tx, "Region captured, recognizing…", true).await;
    }
    state.status.capture.write().await.capturing = true;

    let token = state.begin_capture();
    tokio::spawn(run_pipeline(
        state,
        rect,
        token,
        app_to_ui_tx.clone(),
        history.clone(),
        history_path.to_path_buf(),
    ));

    Ok(())
}

/// One capture's pipeline: grab pixels, run the recognizer on a blocking
/// worker, post-process, notify the panel.
///
/// The `ocr_gate` guarantees the engine is never entered from two
/// workers at once; a cancelled token means a newer selection took over
/// and this one exits without touching the engine.
pub(crate) async fn run_pipeline(
    state: Arc<AppState>,
    rect: SelectionRect,
    token: CancellationToken,
    app_to_ui_tx: AsyncSender<AppEvent>,
    history: Arc<Mutex<SearchHistory>>,
    history_path: PathBuf,
) {
    let (enhance, auto_copy, notify, history_enabled) = {
        let config = state.config.read().await;
        (
            config.ocr.enhance,
            config.search.auto_copy,
            config.ui.show_notifications,
            config.history.enabled,
        )
    };

    let result = {
        let _gate = state.ocr_gate.lock().await;
        if token.is_cancelled() {
            // Superseded while waiting for the previous worker.
            tracing::debug!("capture superseded before it started");
            state.status.capture.write().await.capturing = false;
            return;
        }
        let worker_token = token.clone();
        let recognizer = state.recognizer.clone();
        tokio::task::spawn_blocking(move || {
            #[cfg(windows)]
            let _com = lasso_ocr::ComGuard::initialize()?;

            let captured = lasso_ocr::capture_region(rect, enhance)?;
            if worker_token.is_cancelled() {
                return Ok(None);
            }
            let recognition = recognizer.recognize(&captured.png)?;
            Ok::<_, anyhow::Error>(Some((captured, recognition)))
        })
        .await
    };

    match result {
        Ok(Ok(Some((captured, recognition)))) => {
            let text = DefaultPreprocessor
                .process(&recognition::concatenate(&recognition, CONFIDENCE_CUTOFF));
            let average_confidence = recognition::average_confidence(&recognition, CONFIDENCE_CUTOFF);

            {
                let mut status = state.status.capture.write().await;
                status.capturing = false;
                status.capture_count += 1;
                status.last_capture_time = Some(SystemTime::now());
                status.current_message = "recognition finished".to_string();
            }

            if text.is_empty() {
                tracing::info!("no text recognized in selection");
                if notify {
                    send_status(&app_to_ui_tx, "No text found", false).await;
                }
            } else {
                tracing::info!(chars = text.len(), "recognition finished");
                if auto_copy {
                    if let Err(e) = lasso_io::clipboard::copy_text(&text) {
                        tracing::warn!("auto-copy failed: {e}");
                    }
                }
                if history_enabled {
                    let mut history = history.lock().await;
                    history.add(&text);
                    if let Err(e) = history.save(&history_path) {
                        tracing::warn!("could not persist history: {e}");
                    }
                }
                if notify {
                    send_status(&app_to_ui_tx, "Ready", false).await;
                }
            }

            state.remember_capture(captured.clone(), text.clone());
            let _ = app_to_ui_tx
                .send(AppEvent::ShowResults(RecognitionSummary {
                    text,
                    average_confidence,
                    thumbnail: captured.png,
                }))
                .await;
        }
        Ok(Ok(None)) => {
            tracing::debug!("capture superseded by a newer selection");
            state.status.capture.write().await.capturing = false;
        }
        Ok(Err(e)) => {
            tracing::error!("capture pipeline failed: {e}");
            {
                let mut status = state.status.capture.write().await;
                status.capturing = false;
                status.error_count += 1;
                status.current_message = e.to_string();
            }
            send_status(&app_to_ui_tx, &format!("Failed: {e}"), false).await;
        }
        Err(e) => {
            tracing::error!("capture worker panicked: {e}");
            {
                let mut status = state.status.capture.write().await;
                status.capturing = false;
                status.error_count += 1;
            }
            send_status(&app_to_ui_tx, "Capture worker failed", false).await;
        }
    }
}
