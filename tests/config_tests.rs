use std::collections::HashMap;
use std::time::Duration;

use aws_examples::core::config::{
    DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_SECS, ExampleConfig, LabelsConfig,
    PollSettings,
};
use aws_examples::errors::ExampleError;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults_when_nothing_is_set() {
    let config = ExampleConfig::from_lookup(lookup(&[])).unwrap();

    assert_eq!(config.region, None);
    assert_eq!(config.poll, PollSettings::default());
    assert_eq!(
        config.poll.interval,
        Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS)
    );
    assert_eq!(config.poll.max_attempts, DEFAULT_MAX_POLL_ATTEMPTS);
}

#[test]
fn test_reads_region_and_poll_settings() {
    let config = ExampleConfig::from_lookup(lookup(&[
        ("AWS_REGION", "eu-west-1"),
        ("EXAMPLES_POLL_INTERVAL_SECS", "2"),
        ("EXAMPLES_MAX_POLL_ATTEMPTS", " 7 "),
    ]))
    .unwrap();

    assert_eq!(config.region.as_deref(), Some("eu-west-1"));
    assert_eq!(config.poll.interval, Duration::from_secs(2));
    assert_eq!(config.poll.max_attempts, 7);
}

#[test]
fn test_blank_region_is_ignored() {
    let config = ExampleConfig::from_lookup(lookup(&[("AWS_REGION", "  ")])).unwrap();
    assert_eq!(config.region, None);
}

#[test]
fn test_invalid_numbers_are_config_errors() {
    let err = ExampleConfig::from_lookup(lookup(&[("EXAMPLES_POLL_INTERVAL_SECS", "soon")]))
        .unwrap_err();
    assert!(matches!(err, ExampleError::Config(ref msg) if msg.contains("EXAMPLES_POLL_INTERVAL_SECS")));

    let err = ExampleConfig::from_lookup(lookup(&[("EXAMPLES_MAX_POLL_ATTEMPTS", "0")]))
        .unwrap_err();
    assert!(matches!(err, ExampleError::Config(_)));
}

#[test]
fn test_labels_config_requires_table_name() {
    assert!(LabelsConfig::from_lookup(lookup(&[])).is_err());

    let config = LabelsConfig::from_lookup(lookup(&[("LABELS_TABLE_NAME", "Labels")])).unwrap();
    assert_eq!(config.labels_table_name, "Labels");
}
