use serde::{Deserialize, Serialize};

use crate::{
    capabilities::{DAIKIN_MAX_TEMP_C, DAIKIN_MIN_TEMP_C},
    types::{ActuatorDefaults, FanSpeed},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateConfig {
    #[serde(rename = "fallbackTargetTempC")]
    pub fallback_target_temp_c: f32,
    pub fan: FanSpeed,
    #[serde(rename = "swingVertical")]
    pub swing_vertical: bool,
    #[serde(rename = "swingHorizontal")]
    pub swing_horizontal: bool,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            fallback_target_temp_c: 24.0,
            fan: FanSpeed::Auto,
            swing_vertical: true,
            swing_horizontal: true,
        }
    }
}

impl ClimateConfig {
    pub fn sanitize(&mut self) {
        if !self.fallback_target_temp_c.is_finite() {
            self.fallback_target_temp_c = Self::default().fallback_target_temp_c;
        }
        self.fallback_target_temp_c = self
            .fallback_target_temp_c
            .round()
            .clamp(f32::from(DAIKIN_MIN_TEMP_C), f32::from(DAIKIN_MAX_TEMP_C));
    }

    pub fn actuator_defaults(&self) -> ActuatorDefaults {
        ActuatorDefaults {
            fan: self.fan,
            swing_vertical: self.swing_vertical,
            swing_horizontal: self.swing_horizontal,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IrHardwareConfig {
    #[serde(rename = "txPin")]
    pub tx_pin: i32,
    #[serde(rename = "carrierKHz")]
    pub carrier_khz: u32,
    #[serde(rename = "frameMs")]
    pub frame_ms: u64,
}

impl Default for IrHardwareConfig {
    fn default() -> Self {
        Self {
            tx_pin: 4,
            carrier_khz: 38,
            frame_ms: 30,
        }
    }
}

impl IrHardwareConfig {
    pub fn sanitize(&mut self) {
        if self.tx_pin < 0 {
            self.tx_pin = 4;
        }

        self.carrier_khz = self.carrier_khz.clamp(10, 100);
        self.frame_ms = self.frame_ms.min(1_000);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    #[serde(rename = "deviceName")]
    pub device_name: String,
    pub climate: ClimateConfig,
    pub ir: IrHardwareConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            device_name: "Daikin AC".to_string(),
            climate: ClimateConfig::default(),
            ir: IrHardwareConfig::default(),
        }
    }
}

impl RuntimeConfig {
    pub fn sanitize(&mut self) {
        if self.device_name.trim().is_empty() {
            self.device_name = Self::default().device_name;
        }
        self.climate.sanitize();
        self.ir.sanitize();
    }
}
