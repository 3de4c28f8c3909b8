use std::sync::Arc;

use anyhow::Context;
use tokio::signal;

use lasso_app::controller::AppController;
use lasso_app::profile;
use lasso_app::single_instance::InstanceLock;
use lasso_app::state::AppState;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if atty::is(atty::Stream::Stdout) {
        builder.init();
    } else {
        builder.json().init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let _lock = match InstanceLock::acquire().context("acquiring instance lock")? {
        Some(lock) => lock,
        None => {
            tracing::warn!("another instance is already running");
            return Ok(());
        }
    };

    profile::init_user_config().context("initializing user config")?;
    let config = profile::load_user_profile("main").context("loading profile")?;
    let history_path = profile::history_path()?;

    let recognizer =
        Arc::new(lasso_ocr::OcrEngine::new(&config.ocr.language).context("starting OCR engine")?);
    tracing::info!(language = %config.ocr.language, "OCR engine ready");

    let state = Arc::new(AppState::new(config, recognizer));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(history_path);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;
    tracing::info!("goodbye");
    Ok(())
}
