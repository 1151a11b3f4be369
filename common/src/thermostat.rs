use tracing::{debug, info, warn};

use crate::{
    actuator::{ActuatorDriver, StateObserver},
    capabilities::ClimateTraits,
    command::{translate, Command},
    config::ClimateConfig,
    error::ClimateError,
    types::{ControlRequest, ControllerStatus, ThermostatState, TransmitDiagnostics},
};

/// Holds the desired climate state for one air conditioner and re-sends the full frame on every
/// control call.
///
/// Owns its actuator and observer. `setup` must succeed once before `control` is accepted.
pub struct ThermostatController<A, O> {
    name: String,
    config: ClimateConfig,
    actuator: A,
    observer: O,

    state: ThermostatState,
    initialized: bool,
    link_failed: bool,
    diagnostics: TransmitDiagnostics,
}

impl<A, O> ThermostatController<A, O>
where
    A: ActuatorDriver,
    O: StateObserver,
{
    pub fn new(name: impl Into<String>, mut config: ClimateConfig, actuator: A, observer: O) -> Self {
        config.sanitize();
        Self {
            name: name.into(),
            config,
            actuator,
            observer,
            state: ThermostatState::default(),
            initialized: false,
            link_failed: false,
            diagnostics: TransmitDiagnostics::default(),
        }
    }

    pub fn setup(&mut self) -> Result<(), ClimateError> {
        if self.initialized {
            return Err(ClimateError::AlreadyInitialized);
        }
        if self.link_failed {
            return Err(ClimateError::LinkFailed);
        }

        if let Err(err) = self.actuator.initialize_link() {
            self.link_failed = true;
            return Err(ClimateError::Initialization(err));
        }

        // Not part of the control contract; fixed for the lifetime of the instance.
        self.actuator.set_fan(self.config.fan);
        self.actuator.set_swing_vertical(self.config.swing_vertical);
        self.actuator.set_swing_horizontal(self.config.swing_horizontal);

        self.initialized = true;
        info!(
            "{}: actuator link ready (fan {:?}, swing v={} h={})",
            self.name, self.config.fan, self.config.swing_vertical, self.config.swing_horizontal
        );
        Ok(())
    }

    pub fn traits(&self) -> ClimateTraits {
        ClimateTraits::daikin()
    }

    pub fn control(&mut self, request: ControlRequest) -> Result<(), ClimateError> {
        if !self.initialized {
            return Err(ClimateError::NotInitialized);
        }

        let (next, command) = translate(&self.state, &request, self.config.fallback_target_temp_c);
        self.state = next;

        self.transmit(&command);
        // Published even when the frame was not confirmed sent.
        self.observer.publish_state(&self.state);
        Ok(())
    }

    pub fn state(&self) -> &ThermostatState {
        &self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn diagnostics(&self) -> &TransmitDiagnostics {
        &self.diagnostics
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn status(&self) -> ControllerStatus {
        ControllerStatus {
            name: self.name.clone(),
            initialized: self.initialized,
            mode: self.state.mode.as_str(),
            target_temperature: self.state.target_temperature,
            defaults: self.config.actuator_defaults(),
            transmit: self.diagnostics.clone(),
        }
    }

    fn transmit(&mut self, command: &Command) {
        debug!("{}: transmitting {command:?}", self.name);
        match command.drive(&mut self.actuator) {
            Ok(()) => {
                self.diagnostics.sent_frames = self.diagnostics.sent_frames.saturating_add(1);
                self.diagnostics.last_error = None;
            }
            Err(err) => {
                warn!("{}: transmission failed: {err}", self.name);
                self.diagnostics.failed_frames = self.diagnostics.failed_frames.saturating_add(1);
                self.diagnostics.last_error = Some(err.to_string());
            }
        }
    }
}
