use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActuatorError {
    #[error("actuator link unavailable: {0}")]
    LinkUnavailable(String),
    #[error("actuator busy")]
    Busy,
    #[error("transmission failed: {0}")]
    Transmit(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClimateError {
    #[error("failed to initialize actuator link")]
    Initialization(#[source] ActuatorError),
    #[error("actuator link failed to initialize; instance needs a restart")]
    LinkFailed,
    #[error("controller already initialized")]
    AlreadyInitialized,
    #[error("control requested before setup")]
    NotInitialized,
}
