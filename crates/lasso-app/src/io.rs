use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use lasso_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Global-hotkey watcher. The OS event receiver is not async, so the
/// poll loop runs on a blocking thread and is stopped via the token.
///
/// Registration failure is not fatal: capture stays reachable through
/// the menu, so the watcher parks until shutdown instead of returning
/// (a finished task would tear the whole app down).
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (enabled, binding, poll_interval) = {
        let config = state.config.read().await;
        (
            config.hotkey.enabled,
            config.hotkey.binding.clone(),
            Duration::from_millis(config.hotkey_poll_ms),
        )
    };

    if !enabled {
        tracing::info!("hotkey disabled, watcher idle");
        cancel.cancelled().await;
        return Ok(());
    }

    let poll_cancel = cancel.clone();
    let worker = tokio::task::spawn_blocking(move || {
        let manager = match lasso_ocr::HotkeyManager::from_binding(&binding) {
            Ok(manager) => manager,
            Err(e) => {
                tracing::error!(
                    "could not register hotkey '{binding}': {e}; capture stays available from the menu"
                );
                return false;
            }
        };
        tracing::info!(%binding, id = manager.id(), "hotkey registered");

        while !poll_cancel.is_cancelled() {
            if manager.poll() {
                tracing::info!("capture hotkey pressed");
                match event_tx.try_send(AppEvent::ShowOverlay) {
                    Ok(true) => {}
                    Ok(false) => tracing::warn!("ui channel full, dropping hotkey press"),
                    Err(e) => tracing::warn!("could not arm overlay: {e}"),
                }
            }
            std::thread::sleep(poll_interval);
        }

        tracing::info!("hotkey watcher stopping");
        true
    });

    let registered = worker.await?;
    if !registered {
        cancel.cancelled().await;
    }
    Ok(())
}
