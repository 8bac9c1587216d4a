//! Integration tests for the sensor allowlist.

use std::sync::Arc;
use std::thread;

use relay_sensors::{
    Allowlist, DEFAULT_MONITORED_SENSORS, RelayConfig, ROUTING_REQUIRED_SENSOR_IDS,
    parse_sensor_ids,
};

#[test]
fn test_ids_come_from_token_prefix() {
    let raw = "7, 19:0 ,x,  , 2001:1,33:abc:0";
    let parsed = parse_sensor_ids(raw);

    let expected: Vec<i64> = raw
        .split(',')
        .map(str::trim)
        .filter_map(|t| t.split(':').next()?.parse().ok())
        .collect();

    assert_eq!(parsed.iter().map(|s| s.id).collect::<Vec<_>>(), expected);
    assert_eq!(expected, vec![7, 19, 2001, 33]);
}

#[test]
fn test_documented_override_examples() {
    let both = Allowlist::load(Some("33,34:1"));
    assert_eq!(both.published_sensor_ids(), vec![33, 34]);

    let mixed = Allowlist::load(Some("33:0,34"));
    assert_eq!(mixed.poll_sensor_ids(), vec![33, 34]);
    assert_eq!(mixed.published_sensor_ids(), vec![34]);
}

#[test]
fn test_fallback_equals_default_table() {
    for raw in ["", "   ", ",,,", "abc", "x:0, y"] {
        let allowlist = Allowlist::load(Some(raw));
        assert_eq!(allowlist.entries(), DEFAULT_MONITORED_SENSORS, "raw = {raw:?}");
    }
}

#[test]
fn test_shared_across_threads() {
    let allowlist = Arc::new(Allowlist::load(Some("12:0,34:1,56")));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let allowlist = Arc::clone(&allowlist);
            thread::spawn(move || {
                (
                    allowlist.poll_sensor_ids(),
                    allowlist.published_sensor_ids(),
                )
            })
        })
        .collect();

    for handle in handles {
        let (poll, published) = handle.join().expect("reader thread panicked");
        assert_eq!(poll, vec![12, 34, 56]);
        assert_eq!(published, vec![34, 56]);
    }
}

#[test]
fn test_config_file_end_to_end() {
    let path = std::env::temp_dir().join(format!("relay-sensors-{}.json5", std::process::id()));
    std::fs::write(
        &path,
        r#"{
            // Poll the route-planner inputs, publish only speed.
            sensors: {
                sensor_ids: "2, 3:0, 10:0, 12:0, 33:0",
                required_ids: [2, 33],
            },
        }"#,
    )
    .expect("failed to write temp config");

    let config = RelayConfig::load_from_file(&path).expect("config should load");
    std::fs::remove_file(&path).ok();

    let allowlist = config.allowlist_with_env(None);
    assert_eq!(allowlist.poll_sensor_ids(), vec![2, 3, 10, 12, 33]);
    assert_eq!(allowlist.published_sensor_ids(), vec![2]);
    assert!(allowlist.missing(&config.sensors.required_ids).is_empty());

    let missing = allowlist.missing(ROUTING_REQUIRED_SENSOR_IDS);
    assert!(missing.contains(&15));
    assert!(!missing.contains(&33));
}
