use serde::Serialize;

use crate::types::ClimateMode;

pub const DAIKIN_MIN_TEMP_C: u8 = 10;
pub const DAIKIN_MAX_TEMP_C: u8 = 32;
pub const DAIKIN_TEMP_STEP_C: f32 = 1.0;

const SUPPORTED_MODES: [ClimateMode; 4] = [
    ClimateMode::Off,
    ClimateMode::Auto,
    ClimateMode::Heat,
    ClimateMode::Cool,
];

/// Static capability set advertised to the host.
///
/// Advisory only: nothing on the control path consults it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateTraits {
    #[serde(rename = "supportedModes")]
    pub supported_modes: Vec<ClimateMode>,
    #[serde(rename = "supportsCurrentTemperature")]
    pub supports_current_temperature: bool,
    #[serde(rename = "supportsTwoPointTargetTemperature")]
    pub supports_two_point_target_temperature: bool,
    #[serde(rename = "supportsAway")]
    pub supports_away: bool,
    #[serde(rename = "visualMinTemperature")]
    pub visual_min_temperature: f32,
    #[serde(rename = "visualMaxTemperature")]
    pub visual_max_temperature: f32,
    #[serde(rename = "visualTemperatureStep")]
    pub visual_temperature_step: f32,
}

impl ClimateTraits {
    pub fn daikin() -> Self {
        Self {
            supported_modes: SUPPORTED_MODES.to_vec(),
            supports_current_temperature: false,
            supports_two_point_target_temperature: false,
            supports_away: false,
            visual_min_temperature: f32::from(DAIKIN_MIN_TEMP_C),
            visual_max_temperature: f32::from(DAIKIN_MAX_TEMP_C),
            visual_temperature_step: DAIKIN_TEMP_STEP_C,
        }
    }

    pub fn supports_mode(&self, mode: ClimateMode) -> bool {
        self.supported_modes.contains(&mode)
    }

    pub fn clamp_target(&self, temp_c: f32) -> f32 {
        let stepped = (temp_c / self.visual_temperature_step).round() * self.visual_temperature_step;
        stepped.clamp(self.visual_min_temperature, self.visual_max_temperature)
    }
}
