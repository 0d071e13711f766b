use std::time::Duration;

use elegy_core::mocks::{ManualClock, RecordingPort};
use elegy_core::transport::{
    ESC_BOLD_OFF, ESC_BOLD_ON, ESC_FEED_LINE, ESC_FONT_A, ESC_INIT, ESC_UPSIDE_DOWN_ON, emit,
};
use elegy_core::{EmitCfg, EmitError};

fn fast_cfg() -> EmitCfg {
    EmitCfg {
        slow_reveal: false,
        reveal_delay_ms: 150,
        blank_feed_lines: 12,
        settle_delay_ms: 0,
    }
}

#[test]
fn emission_byte_layout_fast_mode() {
    let mut port = RecordingPort::new("lp0");
    let emissions = port.emissions();
    let clock = ManualClock::new();

    emit(&mut port, "Hello brave new world", &fast_cfg(), &clock).unwrap();

    let recorded = emissions.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    let bytes = &recorded[0];

    let mut expected = Vec::new();
    expected.extend_from_slice(ESC_INIT);
    expected.extend_from_slice(ESC_UPSIDE_DOWN_ON);
    expected.extend_from_slice(ESC_BOLD_ON);
    expected.extend_from_slice(ESC_FONT_A);
    for line in ["world", "new", "brave", "Hello"] {
        expected.extend_from_slice(line.as_bytes());
        expected.push(b'\n');
    }
    expected.extend_from_slice(ESC_BOLD_OFF);
    expected.extend_from_slice(ESC_FEED_LINE);
    expected.extend_from_slice(&ESC_FEED_LINE.repeat(12));
    expected.extend_from_slice(ESC_UPSIDE_DOWN_ON);

    assert_eq!(bytes, &expected);
}

#[test]
fn slow_reveal_paces_each_line_and_trailer() {
    let mut port = RecordingPort::new("lp0");
    let clock = ManualClock::new();
    let cfg = EmitCfg {
        slow_reveal: true,
        reveal_delay_ms: 150,
        blank_feed_lines: 12,
        settle_delay_ms: 60,
    };

    emit(&mut port, "Hello brave new world", &cfg, &clock).unwrap();

    // 4 lines at 150ms, 12 trailing feeds at half delay, 60ms settle.
    let expected = Duration::from_millis(4 * 150 + 12 * 75 + 60);
    assert_eq!(clock.elapsed(), expected);
}

#[test]
fn fast_mode_only_settles() {
    let mut port = RecordingPort::new("lp0");
    let clock = ManualClock::new();
    let cfg = EmitCfg {
        slow_reveal: false,
        reveal_delay_ms: 150,
        blank_feed_lines: 12,
        settle_delay_ms: 60,
    };

    emit(&mut port, "one two", &cfg, &clock).unwrap();
    assert_eq!(clock.elapsed(), Duration::from_millis(60));
}

#[test]
fn unprintable_sentence_emits_placeholder_line() {
    let mut port = RecordingPort::new("lp0");
    let emissions = port.emissions();
    let clock = ManualClock::new();

    emit(&mut port, "12 34 !!", &fast_cfg(), &clock).unwrap();

    let recorded = emissions.lock().unwrap();
    let text = String::from_utf8_lossy(&recorded[0]).into_owned();
    assert!(text.contains("…\n"));
}

#[test]
fn open_failure_is_typed() {
    let mut port = elegy_core::mocks::FailingPort::new("lp3");
    let clock = ManualClock::new();
    let err = emit(&mut port, "anything", &fast_cfg(), &clock).unwrap_err();
    assert!(matches!(err, EmitError::Open(_)));
    assert!(err.to_string().contains("device unplugged"));
}
