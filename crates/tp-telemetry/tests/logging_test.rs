use tp_telemetry::logging::{self, LogFormat};

#[test]
fn test_init_logging_human() {
    // Should not panic; second call is a safe no-op.
    logging::init_logging("test-service", "debug");
    logging::init_logging("test-service", "info");

    tracing::info!(key = "value", "human-readable log line");
}

#[test]
fn test_init_logging_json() {
    // The global subscriber may already be set by another test; this is then a no-op.
    logging::init_logging_json("test-service-json", "info");

    tracing::info!(key = "value", "json log line");
}

#[test]
fn test_bad_default_level_does_not_panic() {
    logging::init("bad-level", "not=a=valid[filter", LogFormat::Human);
    tracing::warn!("still logging");
}

#[test]
fn test_dispatch_json() {
    logging::init("dispatch", "warn", LogFormat::Json);
}
