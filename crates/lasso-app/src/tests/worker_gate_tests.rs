use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use lasso_core::preprocess::{DefaultPreprocessor, Preprocessor};
use lasso_core::recognition::{CONFIDENCE_CUTOFF, average_confidence, concatenate};
use lasso_ocr::{CapturedImage, Recognizer};
use lasso_types::{AppEvent, SelectionRect};
use tokio::time::timeout;

use lasso_core::history::SearchHistory;
use tokio::sync::Mutex;

use super::{FakeRecognizer, test_state};
use crate::events::region_selected::run_pipeline;

#[tokio::test]
async fn gate_never_admits_two_workers() {
    let state = test_state();
    let active = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let state = state.clone();
        let active = active.clone();
        handles.push(tokio::spawn(async move {
            let _gate = state.ocr_gate.lock().await;
            tokio::task::spawn_blocking(move || {
                let inside = active.fetch_add(1, Ordering::SeqCst);
                assert_eq!(inside, 0, "a second worker entered the gate");
                std::thread::sleep(Duration::from_millis(20));
                active.fetch_sub(1, Ordering::SeqCst);
            })
            .await
            .unwrap();
        }));
    }

    for handle in handles {
        timeout(Duration::from_secs(5), handle)
            .await
            .unwrap()
            .unwrap();
    }
}

#[tokio::test]
async fn new_capture_cancels_the_previous_one() {
    let state = test_state();

    let first = state.begin_capture();
    assert!(!first.is_cancelled());

    let second = state.begin_capture();
    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
}

#[tokio::test]
async fn blocking_worker_can_report_a_selection() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);

    tokio::task::spawn_blocking(move || {
        tx.try_send(AppEvent::RegionSelected(SelectionRect {
            x: 5,
            y: 6,
            width: 100,
            height: 40,
        }))
        .unwrap();
    })
    .await
    .unwrap();

    let event = timeout(Duration::from_secs(1), rx.recv())
        .await
        .unwrap()
        .unwrap();
    match event {
        AppEvent::RegionSelected(rect) => {
            assert_eq!(rect.x, 5);
            assert_eq!(rect.width, 100);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn superseded_capture_exits_without_touching_the_engine() {
    let state = test_state();
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);
    let dir = tempfile::tempdir().unwrap();
    let history = Arc::new(Mutex::new(SearchHistory::new(5)));

    // Hold the gate so the first capture cannot start yet.
    let gate = state.ocr_gate.clone().lock_owned().await;
    let token = state.begin_capture();
    let pipeline = tokio::spawn(run_pipeline(
        state.clone(),
        SelectionRect {
            x: 0,
            y: 0,
            width: 100,
            height: 100,
        },
        token,
        tx,
        history.clone(),
        dir.path().join("history.json"),
    ));

    // A newer selection arrives while the first waits on the gate.
    let _newer = state.begin_capture();
    drop(gate);

    timeout(Duration::from_secs(2), pipeline)
        .await
        .unwrap()
        .unwrap();

    let status = state.status.capture.read().await;
    assert!(!status.capturing);
    assert_eq!(status.error_count, 0);
    drop(status);
    assert!(
        rx.try_recv().unwrap().is_none(),
        "superseded capture produced traffic"
    );
    assert!(history.lock().await.is_empty());
}

#[tokio::test]
async fn recognition_output_is_filtered_and_cleaned() {
    let recognizer: Arc<dyn Recognizer> = Arc::new(FakeRecognizer::with(&[
        ("Hello   world", 0.9),
        ("###noise###", 0.1),
        ("second  line", 0.8),
    ]));

    let result = tokio::task::spawn_blocking(move || recognizer.recognize(&[]))
        .await
        .unwrap()
        .unwrap();

    let text = DefaultPreprocessor.process(&concatenate(&result, CONFIDENCE_CUTOFF));
    assert_eq!(text, "Hello world\nsecond line");

    let avg = average_confidence(&result, CONFIDENCE_CUTOFF);
    assert!((avg - 0.85).abs() < 1e-6);
}

#[tokio::test]
async fn last_capture_is_remembered_for_save_and_image_search() {
    let state = test_state();
    assert!(state.last_capture().is_none());

    state.remember_capture(
        CapturedImage {
            png: vec![1, 2, 3],
            width: 10,
            height: 20,
        },
        "recognized".to_string(),
    );

    let (captured, text) = state.last_capture().unwrap();
    assert_eq!(captured.png, vec![1, 2, 3]);
    assert_eq!(text, "recognized");
}
