use std::{
    sync::OnceLock,
    thread,
    time::{Duration, Instant},
};

use serde::Serialize;
use tracing::{info, warn};

use daikin_climate_common::{
    ActuatorDriver, ActuatorError, DaikinMode, FanSpeed, IrHardwareConfig,
};

const MAX_GPIO: i32 = 39;
const MIN_SEND_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkFrame {
    pub power: bool,
    pub mode: Option<DaikinMode>,
    #[serde(rename = "temperatureC")]
    pub temperature_c: u8,
    pub fan: FanSpeed,
    #[serde(rename = "swingVertical")]
    pub swing_vertical: bool,
    #[serde(rename = "swingHorizontal")]
    pub swing_horizontal: bool,
}

impl Default for LinkFrame {
    fn default() -> Self {
        Self {
            power: false,
            mode: None,
            temperature_c: 0,
            fan: FanSpeed::Auto,
            swing_vertical: false,
            swing_horizontal: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkDiagnostics {
    pub ready: bool,
    #[serde(rename = "txPin")]
    pub tx_pin: i32,
    #[serde(rename = "carrierKHz")]
    pub carrier_khz: u32,
    #[serde(rename = "frameMs")]
    pub frame_ms: u64,
    #[serde(rename = "lastSendMs")]
    pub last_send_ms: Option<u64>,
    #[serde(rename = "sentFrames")]
    pub sent_frames: u64,
    #[serde(rename = "lastFrame")]
    pub last_frame: Option<LinkFrame>,
}

/// Stand-in for the IR blaster on hosts without one.
///
/// Stages frame fields like the Daikin codec does, then logs the frame and blocks for the
/// configured frame duration on commit.
pub struct SimulatedLink {
    config: IrHardwareConfig,
    ready: bool,
    staged: LinkFrame,
    last_frame: Option<LinkFrame>,
    last_send_ms: Option<u64>,
    sent_frames: u64,
}

impl SimulatedLink {
    pub fn new(config: IrHardwareConfig) -> Self {
        Self {
            config,
            ready: false,
            staged: LinkFrame::default(),
            last_frame: None,
            last_send_ms: None,
            sent_frames: 0,
        }
    }

    pub fn diagnostics(&self) -> LinkDiagnostics {
        LinkDiagnostics {
            ready: self.ready,
            tx_pin: self.config.tx_pin,
            carrier_khz: self.config.carrier_khz,
            frame_ms: self.config.frame_ms,
            last_send_ms: self.last_send_ms,
            sent_frames: self.sent_frames,
            last_frame: self.last_frame,
        }
    }

    fn rate_limit(&self) {
        let now = monotonic_ms();
        if let Some(last) = self.last_send_ms {
            let elapsed = now.saturating_sub(last);
            if elapsed < MIN_SEND_INTERVAL_MS {
                thread::sleep(Duration::from_millis(MIN_SEND_INTERVAL_MS - elapsed));
            }
        }
    }
}

impl ActuatorDriver for SimulatedLink {
    fn initialize_link(&mut self) -> Result<(), ActuatorError> {
        if !(0..=MAX_GPIO).contains(&self.config.tx_pin) {
            return Err(ActuatorError::LinkUnavailable(format!(
                "GPIO {} cannot drive an IR LED",
                self.config.tx_pin
            )));
        }

        self.ready = true;
        info!(
            "IR link on GPIO {} ({} kHz carrier)",
            self.config.tx_pin, self.config.carrier_khz
        );
        Ok(())
    }

    fn set_fan(&mut self, fan: FanSpeed) {
        self.staged.fan = fan;
    }

    fn set_swing_vertical(&mut self, enabled: bool) {
        self.staged.swing_vertical = enabled;
    }

    fn set_swing_horizontal(&mut self, enabled: bool) {
        self.staged.swing_horizontal = enabled;
    }

    fn power_on(&mut self) {
        self.staged.power = true;
    }

    fn power_off(&mut self) {
        self.staged.power = false;
    }

    fn set_mode(&mut self, mode: DaikinMode) {
        self.staged.mode = Some(mode);
    }

    fn set_temperature(&mut self, temp_c: u8) {
        self.staged.temperature_c = temp_c;
    }

    fn commit_transmission(&mut self) -> Result<(), ActuatorError> {
        if !self.ready {
            warn!("IR link not initialized, dropping frame");
            return Err(ActuatorError::LinkUnavailable("link not initialized".to_string()));
        }

        self.rate_limit();

        let frame = self.staged;
        info!(
            "IR frame: power={} mode={} temp={}C fan={:?} swing v={} h={}",
            if frame.power { "ON" } else { "OFF" },
            frame.mode.map(DaikinMode::as_str).unwrap_or("-"),
            frame.temperature_c,
            frame.fan,
            frame.swing_vertical,
            frame.swing_horizontal
        );
        thread::sleep(Duration::from_millis(self.config.frame_ms));

        self.last_frame = Some(frame);
        self.last_send_ms = Some(monotonic_ms());
        self.sent_frames = self.sent_frames.saturating_add(1);
        Ok(())
    }
}

fn monotonic_ms() -> u64 {
    static START: OnceLock<Instant> = OnceLock::new();
    START
        .get_or_init(Instant::now)
        .elapsed()
        .as_millis()
        .try_into()
        .unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_link(tx_pin: i32) -> SimulatedLink {
        SimulatedLink::new(IrHardwareConfig {
            tx_pin,
            carrier_khz: 38,
            frame_ms: 0,
        })
    }

    #[test]
    fn rejects_pins_without_output() {
        let mut link = test_link(48);
        assert!(matches!(
            link.initialize_link(),
            Err(ActuatorError::LinkUnavailable(_))
        ));
        assert!(!link.diagnostics().ready);
    }

    #[test]
    fn commit_before_init_fails() {
        let mut link = test_link(4);
        assert!(link.commit_transmission().is_err());
        assert_eq!(link.diagnostics().sent_frames, 0);
    }

    #[test]
    fn commit_snapshots_staged_fields() {
        let mut link = test_link(4);
        link.initialize_link().unwrap();
        link.set_fan(FanSpeed::Auto);
        link.set_swing_vertical(true);
        link.set_swing_horizontal(true);
        link.power_on();
        link.set_mode(DaikinMode::Cool);
        link.set_temperature(24);
        link.commit_transmission().unwrap();

        let diagnostics = link.diagnostics();
        assert_eq!(diagnostics.sent_frames, 1);
        assert_eq!(
            diagnostics.last_frame,
            Some(LinkFrame {
                power: true,
                mode: Some(DaikinMode::Cool),
                temperature_c: 24,
                fan: FanSpeed::Auto,
                swing_vertical: true,
                swing_horizontal: true,
            })
        );
    }

    #[test]
    fn power_off_keeps_last_mode_staged() {
        let mut link = test_link(4);
        link.initialize_link().unwrap();
        link.power_on();
        link.set_mode(DaikinMode::Heat);
        link.set_temperature(21);
        link.commit_transmission().unwrap();

        link.power_on();
        link.power_off();
        link.set_temperature(21);
        link.commit_transmission().unwrap();

        let frame = link.diagnostics().last_frame.unwrap();
        assert!(!frame.power);
        assert_eq!(frame.mode, Some(DaikinMode::Heat));
        assert_eq!(link.diagnostics().sent_frames, 2);
    }
}
