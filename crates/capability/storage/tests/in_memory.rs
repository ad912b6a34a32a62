use collector_storage::{
    Destination, FieldValue, InMemoryTimeSeriesWriter, TimeSeriesRecord, TimeSeriesWriter,
};

#[tokio::test]
async fn in_memory_writer_keeps_write_order() {
    let writer = InMemoryTimeSeriesWriter::new();
    let destination = Destination::new("home", "smartmeter");

    writer
        .write(
            &destination,
            &TimeSeriesRecord::new("ACTIVE_POWER_P", 245_i64, 1000).tag("unit", "W"),
        )
        .await
        .expect("write");
    writer
        .write(&destination, &TimeSeriesRecord::new("VOLTAGE_L1", 230.1, 2000))
        .await
        .expect("write");

    let records = writer.records();
    assert_eq!(writer.len(), 2);
    assert_eq!(records[0].0, destination);
    assert_eq!(records[0].1.measurement, "ACTIVE_POWER_P");
    assert_eq!(records[0].1.tags.get("unit").map(String::as_str), Some("W"));
    assert_eq!(records[1].1.value, FieldValue::F64(230.1));
    assert_eq!(records[1].1.ts_ms, 2000);
}

#[tokio::test]
async fn in_memory_writer_ping_and_close_are_noops() {
    let writer = InMemoryTimeSeriesWriter::new();
    writer.ping().await.expect("ping");
    writer.close().await;
    writer.close().await;
    assert!(writer.is_empty());
}
