pub mod actuator;
pub mod capabilities;
pub mod command;
pub mod config;
pub mod error;
pub mod thermostat;
pub mod types;

#[cfg(test)]
mod testing;

pub use actuator::{ActuatorDriver, StateObserver};
pub use capabilities::ClimateTraits;
pub use command::{native_temperature, translate, Command, Power};
pub use config::{ClimateConfig, IrHardwareConfig, RuntimeConfig};
pub use error::{ActuatorError, ClimateError};
pub use thermostat::ThermostatController;
pub use types::{
    ActuatorDefaults, ClimateMode, ControlRequest, ControllerStatus, DaikinMode, FanSpeed,
    ThermostatState, TransmitDiagnostics,
};
