//! Tapo P110 智能插座轮询实现

use crate::error::DeviceError;
use crate::types::{DeviceEndpoint, EnergyUsage};
use crate::AuxiliaryDevicePoller;
use async_trait::async_trait;
use tapo::ApiClient;
use tracing::debug;

/// Tapo P110 轮询器（每次查询新建会话）
#[derive(Debug, Clone)]
pub struct TapoP110Poller {
    endpoint: DeviceEndpoint,
}

impl TapoP110Poller {
    pub fn new(endpoint: DeviceEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl AuxiliaryDevicePoller for TapoP110Poller {
    fn address(&self) -> &str {
        &self.endpoint.address
    }

    async fn energy_usage(&self) -> Result<EnergyUsage, DeviceError> {
        let device = ApiClient::new(self.endpoint.username.clone(), self.endpoint.password.clone())
            .p110(self.endpoint.address.clone())
            .await
            .map_err(|err| DeviceError::Communication(err.to_string()))?;
        let usage = device
            .get_energy_usage()
            .await
            .map_err(|err| DeviceError::Communication(err.to_string()))?;
        debug!(
            target: "collector.device",
            address = %self.endpoint.address,
            current_power = usage.current_power,
            today_energy = usage.today_energy,
            "tapo_energy_usage"
        );
        Ok(EnergyUsage::new(
            Some(usage.current_power as f64),
            Some(usage.today_energy as f64),
        ))
    }
}
