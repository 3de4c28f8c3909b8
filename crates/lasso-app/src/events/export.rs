use std::sync::Arc;

use kanal::AsyncSender;
use lasso_types::AppEvent;

use crate::events::send_status;
use crate::state::AppState;

/// Save the most recent capture (JPEG + companion text file) to the
/// user's documents folder.
pub async fn handle_save_capture(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some((captured, text)) = state.last_capture() else {
        send_status(app_to_ui_tx, "Nothing to save yet", false).await;
        return Ok(());
    };

    let saved = tokio::task::spawn_blocking(move || {
        let dir = lasso_io::save::default_save_dir()?;
        lasso_io::save::save_capture(&dir, &captured.png, &text)
    })
    .await?;

    match saved {
        Ok(saved) => {
            let message = format!("Saved to {}", saved.image_path.display());
            send_status(app_to_ui_tx, &message, false).await;
        }
        Err(e) => {
            tracing::error!("save failed: {e}");
            send_status(app_to_ui_tx, "Could not save capture", false).await;
        }
    }

    Ok(())
}
