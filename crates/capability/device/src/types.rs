//! 设备相关数据类型

/// 设备地址与凭据
#[derive(Clone, PartialEq, Eq)]
pub struct DeviceEndpoint {
    pub address: String,
    pub username: String,
    pub password: String,
}

impl DeviceEndpoint {
    pub fn new(
        address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for DeviceEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceEndpoint")
            .field("address", &self.address)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// 用电快照
///
/// `current_power` 为毫瓦，`today_energy` 为瓦时；设备可能缺省任一读数。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergyUsage {
    pub current_power: Option<f64>,
    pub today_energy: Option<f64>,
}

impl EnergyUsage {
    pub fn new(current_power: Option<f64>, today_energy: Option<f64>) -> Self {
        Self {
            current_power,
            today_energy,
        }
    }
}
