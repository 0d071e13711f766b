use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread;
use std::time::Duration;

use elegy_hardware::error::HwError;
use elegy_hardware::util::wait_for_level;

#[test]
fn wait_for_level_success_path() {
    let high = Arc::new(AtomicBool::new(false));
    let high_bg = high.clone();
    // Raise the line after a short delay
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(3));
        high_bg.store(true, Ordering::Relaxed);
    });

    let res = wait_for_level(
        || high.load(Ordering::Relaxed),
        Duration::from_millis(50),
        Duration::from_micros(200),
    );
    assert!(res.is_ok(), "expected success, got {res:?}");
}

#[test]
fn wait_for_level_timeout_path() {
    let high = Arc::new(AtomicBool::new(false));

    let err = wait_for_level(
        || high.load(Ordering::Relaxed),
        Duration::from_millis(5),
        Duration::from_micros(200),
    )
    .expect_err("expected timeout error");

    match err {
        HwError::EchoTimeout => {}
        other => panic!("unexpected error: {other:?}"),
    }
}
