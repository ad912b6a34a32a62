use collector_telemetry::{SinkMetrics, init_tracing};

#[test]
fn fresh_metrics_start_at_zero() {
    let metrics = SinkMetrics::new();
    assert_eq!(metrics.snapshot(), Default::default());
}

#[test]
fn record_methods_increment_counters() {
    let metrics = SinkMetrics::new();

    metrics.record_point_received();
    metrics.record_written();
    metrics.record_written();
    metrics.record_write_failure();
    metrics.record_device_poll_failure();
    metrics.record_device_data_incomplete();
    metrics.record_liveness_ping_success();
    metrics.record_liveness_ping_failure();

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.points_received, 1);
    assert_eq!(snapshot.records_written, 2);
    assert_eq!(snapshot.write_failure, 1);
    assert_eq!(snapshot.device_poll_failure, 1);
    assert_eq!(snapshot.device_data_incomplete, 1);
    assert_eq!(snapshot.liveness_ping_success, 1);
    assert_eq!(snapshot.liveness_ping_failure, 1);
}

#[test]
fn separate_instances_do_not_share_counters() {
    let first = SinkMetrics::new();
    let second = SinkMetrics::new();

    first.record_write_failure();

    assert_eq!(first.snapshot().write_failure, 1);
    assert_eq!(second.snapshot().write_failure, 0);
}

#[test]
fn init_tracing_is_repeatable() {
    init_tracing();
    init_tracing();
}
