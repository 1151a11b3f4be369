use serde::{Deserialize, Serialize};

/// Operating intent as the host framework names it.
///
/// Only `Off`, `Auto`, `Heat` and `Cool` are advertised. The remaining variants exist so that a
/// host can send them at all; they degrade to an off frame on transmit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClimateMode {
    #[default]
    Off,
    Auto,
    Heat,
    Cool,
    FanOnly,
    Dry,
    #[serde(other)]
    Unsupported,
}

impl ClimateMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Auto => "AUTO",
            Self::Heat => "HEAT",
            Self::Cool => "COOL",
            Self::FanOnly => "FAN_ONLY",
            Self::Dry => "DRY",
            Self::Unsupported => "UNSUPPORTED",
        }
    }
}

/// Mode codes the Daikin frame can carry while powered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DaikinMode {
    Auto,
    Heat,
    Cool,
}

impl DaikinMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Heat => "HEAT",
            Self::Cool => "COOL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FanSpeed {
    #[default]
    Auto,
    Quiet,
    Low,
    Medium,
    High,
}

/// Desired climate state held by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ThermostatState {
    pub mode: ClimateMode,
    #[serde(rename = "targetTemperature")]
    pub target_temperature: Option<f32>,
}

/// Intent patch. `None` leaves the corresponding field untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct ControlRequest {
    #[serde(default)]
    pub mode: Option<ClimateMode>,
    #[serde(rename = "targetTemperature", default)]
    pub target_temperature: Option<f32>,
}

impl ControlRequest {
    pub fn mode(mode: ClimateMode) -> Self {
        Self {
            mode: Some(mode),
            target_temperature: None,
        }
    }

    pub fn target_temperature(temp_c: f32) -> Self {
        Self {
            mode: None,
            target_temperature: Some(temp_c),
        }
    }

    pub fn with_target_temperature(mut self, temp_c: f32) -> Self {
        self.target_temperature = Some(temp_c);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActuatorDefaults {
    pub fan: FanSpeed,
    #[serde(rename = "swingVertical")]
    pub swing_vertical: bool,
    #[serde(rename = "swingHorizontal")]
    pub swing_horizontal: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransmitDiagnostics {
    #[serde(rename = "sentFrames")]
    pub sent_frames: u64,
    #[serde(rename = "failedFrames")]
    pub failed_frames: u64,
    #[serde(rename = "lastError")]
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ControllerStatus {
    pub name: String,
    pub initialized: bool,
    pub mode: &'static str,
    #[serde(rename = "targetTemperature")]
    pub target_temperature: Option<f32>,
    pub defaults: ActuatorDefaults,
    pub transmit: TransmitDiagnostics,
}
