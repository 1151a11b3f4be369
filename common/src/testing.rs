use crate::{
    actuator::ActuatorDriver,
    error::ActuatorError,
    types::{DaikinMode, FanSpeed},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActuatorCall {
    InitializeLink,
    SetFan(FanSpeed),
    SetSwingVertical(bool),
    SetSwingHorizontal(bool),
    PowerOn,
    PowerOff,
    SetMode(DaikinMode),
    SetTemperature(u8),
    Commit,
}

#[derive(Debug, Default)]
pub struct RecordingActuator {
    pub calls: Vec<ActuatorCall>,
    pub fail_init: Option<ActuatorError>,
    pub fail_commit: Option<ActuatorError>,
}

impl RecordingActuator {
    /// Staged frame fields of every committed transmission, in order.
    pub fn frames(&self) -> Vec<Vec<ActuatorCall>> {
        let mut frames = Vec::new();
        let mut current = Vec::new();
        for call in &self.calls {
            match call {
                ActuatorCall::Commit => frames.push(std::mem::take(&mut current)),
                ActuatorCall::PowerOn
                | ActuatorCall::PowerOff
                | ActuatorCall::SetMode(_)
                | ActuatorCall::SetTemperature(_) => current.push(call.clone()),
                _ => {}
            }
        }
        frames
    }
}

impl ActuatorDriver for RecordingActuator {
    fn initialize_link(&mut self) -> Result<(), ActuatorError> {
        self.calls.push(ActuatorCall::InitializeLink);
        match self.fail_init.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn set_fan(&mut self, fan: FanSpeed) {
        self.calls.push(ActuatorCall::SetFan(fan));
    }

    fn set_swing_vertical(&mut self, enabled: bool) {
        self.calls.push(ActuatorCall::SetSwingVertical(enabled));
    }

    fn set_swing_horizontal(&mut self, enabled: bool) {
        self.calls.push(ActuatorCall::SetSwingHorizontal(enabled));
    }

    fn power_on(&mut self) {
        self.calls.push(ActuatorCall::PowerOn);
    }

    fn power_off(&mut self) {
        self.calls.push(ActuatorCall::PowerOff);
    }

    fn set_mode(&mut self, mode: DaikinMode) {
        self.calls.push(ActuatorCall::SetMode(mode));
    }

    fn set_temperature(&mut self, temp_c: u8) {
        self.calls.push(ActuatorCall::SetTemperature(temp_c));
    }

    fn commit_transmission(&mut self) -> Result<(), ActuatorError> {
        self.calls.push(ActuatorCall::Commit);
        match self.fail_commit.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
