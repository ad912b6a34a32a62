use async_trait::async_trait;
use collector_device::{
    AuxiliaryDevicePoller, DeviceEndpoint, DeviceError, EnergyUsage, poll_with_timeout,
};
use std::time::Duration;

struct StaticPoller {
    usage: EnergyUsage,
    delay: Duration,
}

#[async_trait]
impl AuxiliaryDevicePoller for StaticPoller {
    fn address(&self) -> &str {
        "192.168.1.50"
    }

    async fn energy_usage(&self) -> Result<EnergyUsage, DeviceError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.usage)
    }
}

struct UnreachablePoller;

#[async_trait]
impl AuxiliaryDevicePoller for UnreachablePoller {
    fn address(&self) -> &str {
        "192.168.1.51"
    }

    async fn energy_usage(&self) -> Result<EnergyUsage, DeviceError> {
        Err(DeviceError::Communication("connection refused".to_string()))
    }
}

#[tokio::test]
async fn poll_returns_snapshot_within_timeout() {
    let poller = StaticPoller {
        usage: EnergyUsage::new(Some(245_000.0), Some(12.7)),
        delay: Duration::ZERO,
    };
    let usage = poll_with_timeout(&poller, Duration::from_secs(1))
        .await
        .expect("usage");
    assert_eq!(usage.current_power, Some(245_000.0));
    assert_eq!(usage.today_energy, Some(12.7));
}

#[tokio::test]
async fn poll_times_out_on_hung_device() {
    let poller = StaticPoller {
        usage: EnergyUsage::default(),
        delay: Duration::from_secs(5),
    };
    let err = poll_with_timeout(&poller, Duration::from_millis(50))
        .await
        .expect_err("timeout");
    assert!(matches!(err, DeviceError::Timeout(50)));
}

#[tokio::test]
async fn poll_passes_through_communication_errors() {
    let err = poll_with_timeout(&UnreachablePoller, Duration::from_secs(1))
        .await
        .expect_err("communication");
    assert_eq!(err.to_string(), "communication error: connection refused");
}

#[test]
fn endpoint_debug_hides_password() {
    let endpoint = DeviceEndpoint::new("192.168.1.50", "user@example.com", "secret");
    let rendered = format!("{:?}", endpoint);
    assert!(rendered.contains("192.168.1.50"));
    assert!(!rendered.contains("secret"));
}
