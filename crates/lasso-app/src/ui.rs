use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lasso_config::Config;
use lasso_types::AppEvent;
use lasso_ui::PanelState;
use tokio::sync::RwLock;

/// Headless UI loop: tracks panel state and logs what a front end would
/// render. A windowing layer replaces this with a real overlay + panel
/// driven through `lasso_ui::UiBridge`.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    _ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let engine = config.read().await.search.default_engine;
    let mut panel = PanelState::new(engine);

    while let Ok(event) = app_to_ui_rx.recv().await {
        match &event {
            AppEvent::Exit => {
                tracing::info!("ui loop stopping");
                return Ok(());
            }
            AppEvent::BackendReady => {
                tracing::info!("backend ready");
            }
            AppEvent::ShowOverlay => {
                // A front end arms its SelectionOverlay here and reports
                // RegionSelected / OverlayCancelled back.
                tracing::info!("selection overlay armed");
            }
            AppEvent::StatusUpdate { status, capturing } => {
                tracing::info!(capturing, "status: {status}");
            }
            _ => {
                panel.apply(&event);
                if panel.visible() {
                    tracing::debug!(
                        chars = panel.text().len(),
                        confidence = panel.average_confidence(),
                        "panel updated"
                    );
                }
            }
        }
    }

    Ok(())
}
