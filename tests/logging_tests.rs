use aws_examples::setup_logging;

#[test]
fn test_logging_setup_is_idempotent() {
    // A second call finds a global subscriber already installed
    let result = std::panic::catch_unwind(|| {
        setup_logging();
        setup_logging();
        tracing::info!(example = "logging_tests", "still logging");
    });
    assert!(result.is_ok(), "repeated setup_logging should not panic");
}
