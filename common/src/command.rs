use serde::Serialize;

use crate::{
    actuator::ActuatorDriver,
    error::ActuatorError,
    types::{ClimateMode, ControlRequest, DaikinMode, ThermostatState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "power", content = "mode", rename_all = "UPPERCASE")]
pub enum Power {
    On(DaikinMode),
    Off,
}

impl From<ClimateMode> for Power {
    fn from(mode: ClimateMode) -> Self {
        match mode {
            ClimateMode::Auto => Self::On(DaikinMode::Auto),
            ClimateMode::Heat => Self::On(DaikinMode::Heat),
            ClimateMode::Cool => Self::On(DaikinMode::Cool),
            ClimateMode::Off | ClimateMode::FanOnly | ClimateMode::Dry | ClimateMode::Unsupported => {
                Self::Off
            }
        }
    }
}

/// One complete Daikin frame. The protocol has no partial updates, so every field is always set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Command {
    #[serde(flatten)]
    pub power: Power,
    #[serde(rename = "temperatureC")]
    pub temperature_c: u8,
}

impl Command {
    pub fn from_state(state: &ThermostatState, fallback_temp_c: f32) -> Self {
        Self {
            power: Power::from(state.mode),
            temperature_c: native_temperature(state.target_temperature.unwrap_or(fallback_temp_c)),
        }
    }

    pub fn drive<A: ActuatorDriver>(&self, actuator: &mut A) -> Result<(), ActuatorError> {
        actuator.power_on();
        match self.power {
            Power::On(mode) => actuator.set_mode(mode),
            Power::Off => actuator.power_off(),
        }
        actuator.set_temperature(self.temperature_c);
        actuator.commit_transmission()
    }
}

/// Applies `request` on top of `prior` and derives the frame for the result.
pub fn translate(
    prior: &ThermostatState,
    request: &ControlRequest,
    fallback_temp_c: f32,
) -> (ThermostatState, Command) {
    let mut next = *prior;
    if let Some(mode) = request.mode {
        next.mode = mode;
    }
    if let Some(target) = request.target_temperature {
        next.target_temperature = Some(target);
    }

    let command = Command::from_state(&next, fallback_temp_c);
    (next, command)
}

/// Rounds half away from zero. Out-of-range values saturate and NaN maps to 0.
pub fn native_temperature(temp_c: f32) -> u8 {
    temp_c.round() as u8
}
