use crate::{
    error::ActuatorError,
    types::{DaikinMode, FanSpeed, ThermostatState},
};

/// Command vocabulary of the IR codec driving the air conditioner.
///
/// Setters only stage frame fields. Nothing reaches the unit until
/// [`ActuatorDriver::commit_transmission`], which blocks until the frame has been sent.
pub trait ActuatorDriver {
    fn initialize_link(&mut self) -> Result<(), ActuatorError>;

    fn set_fan(&mut self, fan: FanSpeed);

    fn set_swing_vertical(&mut self, enabled: bool);

    fn set_swing_horizontal(&mut self, enabled: bool);

    fn power_on(&mut self);

    fn power_off(&mut self);

    fn set_mode(&mut self, mode: DaikinMode);

    fn set_temperature(&mut self, temp_c: u8);

    fn commit_transmission(&mut self) -> Result<(), ActuatorError>;
}

pub trait StateObserver {
    fn publish_state(&mut self, state: &ThermostatState);
}

impl<F> StateObserver for F
where
    F: FnMut(&ThermostatState),
{
    fn publish_state(&mut self, state: &ThermostatState) {
        self(state);
    }
}
