use elegy_config::load_toml;

fn base_toml() -> &'static str {
    r#"
[trigger]
threshold_cm = 40.0
debounce_ms = 3000
poll_ms = 50
echo_timeout_ms = 30

[generation]
retry_budget = 120
max_words = 80
history_capacity = 500

[printing]
slow_reveal = true
reveal_delay_ms = 150
blank_feed_lines = 12
settle_delay_ms = 60

[[channels]]
device = "/dev/usb/lp0"
corpus = "corpus/channel0.txt"
trig_pin = 17
echo_pin = 18

[[channels]]
device = "/dev/usb/lp1"
corpus = "corpus/channel1.txt"
"#
}

#[test]
fn accepts_full_config() {
    let cfg = load_toml(base_toml()).expect("parse TOML");
    cfg.validate().expect("valid config should pass");
    assert_eq!(cfg.channels.len(), 2);
    assert_eq!(cfg.channels[0].trig_pin, Some(17));
    assert!(cfg.channels[1].trig_pin.is_none());
}

#[test]
fn sections_default_when_omitted() {
    let toml = r#"
[[channels]]
device = "/dev/usb/lp0"
corpus = "corpus/channel0.txt"
"#;
    let cfg = load_toml(toml).expect("parse TOML");
    cfg.validate().expect("defaults should validate");
    assert_eq!(cfg.trigger.threshold_cm, 40.0);
    assert_eq!(cfg.trigger.debounce_ms, 3_000);
    assert_eq!(cfg.generation.retry_budget, 120);
    assert_eq!(cfg.generation.history_capacity, 500);
    assert_eq!(cfg.printing.blank_feed_lines, 12);
    assert!(cfg.printing.slow_reveal);
}

#[test]
fn rejects_empty_channel_list() {
    let toml = r#"
channels = []
"#;
    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject empty channels");
    assert!(format!("{err}").contains("at least one [[channels]]"));
}

#[test]
fn rejects_half_a_pin_pair() {
    let toml = r#"
[[channels]]
device = "/dev/usb/lp0"
corpus = "corpus/channel0.txt"
trig_pin = 17
"#;
    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject lone trig_pin");
    assert!(format!("{err}").contains("both trig_pin and echo_pin"));
}

#[test]
fn rejects_zero_retry_budget() {
    let toml = r#"
[generation]
retry_budget = 0

[[channels]]
device = "/dev/usb/lp0"
corpus = "corpus/channel0.txt"
"#;
    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject retry_budget=0");
    assert!(format!("{err}").contains("retry_budget must be >= 1"));
}

#[test]
fn rejects_zero_poll_interval() {
    let toml = r#"
[trigger]
poll_ms = 0

[[channels]]
device = "/dev/usb/lp0"
corpus = "corpus/channel0.txt"
"#;
    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject poll_ms=0");
    assert!(format!("{err}").contains("poll_ms must be >= 1"));
}

#[test]
fn rejects_empty_device_path() {
    let toml = r#"
[[channels]]
device = "  "
corpus = "corpus/channel0.txt"
"#;
    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject blank device");
    assert!(format!("{err}").contains("device must not be empty"));
}
