use std::sync::Arc;
use std::time::Duration;

use lasso_config::Config;
use lasso_types::AppEvent;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use super::FakeRecognizer;
use crate::io::watcher_io;
use crate::state::AppState;

fn state_with(config: Config) -> Arc<AppState> {
    Arc::new(AppState::new(
        config,
        Arc::new(FakeRecognizer::with(&[("x", 1.0)])),
    ))
}

#[tokio::test]
async fn watcher_outlives_a_failed_registration() {
    let mut config = Config::new();
    config.hotkey.binding = "ctrl+nosuchkey".to_string();
    let state = state_with(config);

    let (tx, _rx) = kanal::bounded_async::<AppEvent>(8);
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(watcher_io(state, cancel.child_token(), tx));

    // Registration fails immediately; the task must park, not finish
    // (a finished task would take the whole app down with it).
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(
        !handle.is_finished(),
        "watcher exited after a failed registration"
    );

    cancel.cancel();
    timeout(Duration::from_secs(2), handle)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn disabled_hotkey_parks_until_shutdown() {
    let mut config = Config::new();
    config.hotkey.enabled = false;
    let state = state_with(config);

    let (tx, _rx) = kanal::bounded_async::<AppEvent>(8);
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(watcher_io(state, cancel.child_token(), tx));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!handle.is_finished());

    cancel.cancel();
    timeout(Duration::from_secs(2), handle)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
}
