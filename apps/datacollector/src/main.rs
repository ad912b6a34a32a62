//! 采集端入口：按环境变量构造数据汇，从 stdin 逐行读取 JSON 测点并顺序写入。

mod feed;

use collector_config::SinkConfig;
use collector_sink::{DataSink, build_sink};
use collector_telemetry::init_tracing;
use feed::PointFeed;
use tokio::io::BufReader;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 初始化结构化日志
    init_tracing();
    // 从环境变量加载数据汇配置；缺少必填键在此直接退出
    let config = SinkConfig::from_env()?;
    let sink = build_sink(&config, None)?;
    info!(
        target: "collector.app",
        sink = sink.name(),
        url = %config.influxdb().url,
        bucket = %config.influxdb().bucket,
        "sink_configured"
    );

    sink.start().await;
    let result = run_feed(sink.as_ref()).await;
    sink.stop().await;

    let snapshot = sink.metrics();
    info!(
        target: "collector.app",
        points_received = snapshot.points_received,
        records_written = snapshot.records_written,
        write_failure = snapshot.write_failure,
        device_poll_failure = snapshot.device_poll_failure,
        device_data_incomplete = snapshot.device_data_incomplete,
        liveness_ping_success = snapshot.liveness_ping_success,
        liveness_ping_failure = snapshot.liveness_ping_failure,
        "collector_stopped"
    );
    result
}

/// 顺序消费 stdin 测点流，直到 EOF 或 Ctrl-C。
async fn run_feed(sink: &dyn DataSink) -> Result<(), Box<dyn std::error::Error>> {
    let mut feed = PointFeed::new(BufReader::new(tokio::io::stdin()));
    loop {
        tokio::select! {
            line = feed.next_line() => {
                let Some(line) = line? else {
                    info!(target: "collector.app", "feed_closed");
                    return Ok(());
                };
                match line {
                    Ok(Some(point)) => sink.send(&point).await,
                    Ok(None) => {}
                    Err(err) => warn!(target: "collector.app", error = %err, "feed_line_skipped"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!(target: "collector.app", "shutdown_requested");
                return Ok(());
            }
        }
    }
}
