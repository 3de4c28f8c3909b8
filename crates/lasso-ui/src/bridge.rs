use kanal::{AsyncReceiver, AsyncSender, Receiver, Sender};
use lasso_types::AppEvent;

/// Couples the async backend to a sync windowing thread.
///
/// The front end (tray icon, overlay window, results panel) blocks on
/// `to_ui_rx` and pushes user actions through `from_ui_tx`; ownership of
/// event payloads transfers at enqueue time.
pub struct UiBridge {
    to_ui_tx: Sender<AppEvent>,
    from_ui_rx: AsyncReceiver<AppEvent>,
}

pub struct UiBridgeHandle {
    pub to_ui_rx: Receiver<AppEvent>,
    pub from_ui_tx: AsyncSender<AppEvent>,
}

impl UiBridge {
    pub fn new() -> (Self, UiBridgeHandle) {
        let (to_ui_tx, to_ui_rx) = kanal::bounded(128);
        let (from_ui_tx, from_ui_rx) = kanal::bounded_async(64);

        (
            UiBridge {
                to_ui_tx,
                from_ui_rx,
            },
            UiBridgeHandle {
                to_ui_rx,
                from_ui_tx,
            },
        )
    }

    /// Pump backend events to the sync side until either end closes.
    pub async fn forward_from_backend(&self, app_to_ui_rx: AsyncReceiver<AppEvent>) {
        while let Ok(event) = app_to_ui_rx.recv().await {
            if self.to_ui_tx.send(event).is_err() {
                tracing::debug!("ui side closed, stopping forwarder");
                break;
            }
        }
    }

    /// Pump user actions from the sync side into the backend.
    pub async fn forward_to_backend(&self, ui_to_app_tx: AsyncSender<AppEvent>) {
        while let Ok(event) = self.from_ui_rx.recv().await {
            if ui_to_app_tx.send(event).await.is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn events_cross_the_bridge_both_ways() {
        let (bridge, handle) = UiBridge::new();
        let UiBridgeHandle {
            to_ui_rx,
            from_ui_tx,
        } = handle;

        let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async::<AppEvent>(8);
        let (ui_to_app_tx, ui_to_app_rx) = kanal::bounded_async::<AppEvent>(8);

        let bridge = Arc::new(bridge);
        let forward = bridge.clone();
        tokio::spawn(async move { forward.forward_from_backend(app_to_ui_rx).await });
        let forward = bridge.clone();
        tokio::spawn(async move { forward.forward_to_backend(ui_to_app_tx).await });

        // Backend -> sync front end.
        app_to_ui_tx.send(AppEvent::BackendReady).await.unwrap();
        let event = tokio::task::spawn_blocking(move || to_ui_rx.recv().unwrap())
            .await
            .unwrap();
        assert!(matches!(event, AppEvent::BackendReady));

        // Sync front end -> backend.
        from_ui_tx.send(AppEvent::Exit).await.unwrap();
        let event = ui_to_app_rx.recv().await.unwrap();
        assert!(matches!(event, AppEvent::Exit));
    }
}
