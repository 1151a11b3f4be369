use std::{
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, BufReader};
use tracing::{info, warn};

use daikin_climate_common::{
    ControlRequest, ControllerStatus, RuntimeConfig, StateObserver, ThermostatController,
    ThermostatState,
};

use crate::link::{LinkDiagnostics, SimulatedLink};

const DEFAULT_CONFIG_PATH: &str = "./daikin-climate.json";
const MAX_LINE_BYTES: u64 = 512;

#[derive(Debug, Clone, PartialEq)]
enum HostCommand {
    Control(ControlRequest),
    Traits,
    Status,
}

#[derive(Debug, Serialize)]
struct HostStatus {
    controller: ControllerStatus,
    link: LinkDiagnostics,
}

/// Writes each published state as one JSON line.
struct JsonLinePublisher<W> {
    out: W,
}

impl<W: Write> StateObserver for JsonLinePublisher<W> {
    fn publish_state(&mut self, state: &ThermostatState) {
        if let Err(err) = write_json_line(&mut self.out, state) {
            warn!("state publish failed: {err:#}");
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::var("DAIKIN_CLIMATE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    let mut runtime = load_runtime_config(&config_path).await.unwrap_or_else(|err| {
        warn!("failed to load runtime config from {}: {err:#}", config_path.display());
        RuntimeConfig::default()
    });
    if let Some(tx_pin) = std::env::var("DAIKIN_TX_PIN")
        .ok()
        .and_then(|value| value.parse::<i32>().ok())
    {
        runtime.ir.tx_pin = tx_pin;
    }
    runtime.sanitize();

    let link = SimulatedLink::new(runtime.ir.clone());
    let publisher = JsonLinePublisher {
        out: std::io::stdout(),
    };
    let mut controller =
        ThermostatController::new(runtime.device_name.clone(), runtime.climate, link, publisher);
    controller
        .setup()
        .context("failed to set up climate controller")?;

    info!("{} ready, reading control requests from stdin", runtime.device_name);

    serve(
        BufReader::new(tokio::io::stdin()),
        &mut std::io::stdout(),
        &mut controller,
    )
    .await?;

    info!("stdin closed, shutting down");
    Ok(())
}

async fn serve<R, W, O>(
    mut input: R,
    out: &mut W,
    controller: &mut ThermostatController<SimulatedLink, O>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    O: StateObserver,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = (&mut input)
            .take(MAX_LINE_BYTES + 1)
            .read_until(b'\n', &mut buf)
            .await
            .context("failed to read input")?;
        if read == 0 {
            return Ok(());
        }

        if !buf.ends_with(b"\n") && read as u64 > MAX_LINE_BYTES {
            warn!("ignoring input line longer than {MAX_LINE_BYTES} bytes");
            discard_rest_of_line(&mut input, &mut buf).await?;
            continue;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(err) => {
                warn!("ignoring non utf8 input line: {err}");
                continue;
            }
        };
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!("ignoring input line: {err:#}");
                continue;
            }
        };

        match command {
            HostCommand::Control(request) => {
                // Transmission blocks for the length of the IR frame.
                if let Err(err) = tokio::task::block_in_place(|| controller.control(request)) {
                    warn!("control request rejected: {err}");
                }
            }
            HostCommand::Traits => write_json_line(out, &controller.traits())?,
            HostCommand::Status => {
                let status = HostStatus {
                    controller: controller.status(),
                    link: controller.actuator().diagnostics(),
                };
                write_json_line(out, &status)?;
            }
        }
    }
}

async fn discard_rest_of_line<R>(input: &mut R, buf: &mut Vec<u8>) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        buf.clear();
        let read = (&mut *input)
            .take(MAX_LINE_BYTES)
            .read_until(b'\n', buf)
            .await
            .context("failed to read input")?;
        if read == 0 || buf.ends_with(b"\n") {
            return Ok(());
        }
    }
}

async fn load_runtime_config(path: &Path) -> anyhow::Result<RuntimeConfig> {
    match tokio::fs::read(path).await {
        Ok(raw) => Ok(serde_json::from_slice::<RuntimeConfig>(&raw)?),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(RuntimeConfig::default()),
        Err(err) => Err(err.into()),
    }
}

fn parse_line(line: &str) -> anyhow::Result<Option<HostCommand>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "traits" => return Ok(Some(HostCommand::Traits)),
        "status" => return Ok(Some(HostCommand::Status)),
        _ => {}
    }

    let request = serde_json::from_str::<ControlRequest>(trimmed)
        .with_context(|| format!("invalid control request `{trimmed}`"))?;
    Ok(Some(HostCommand::Control(request)))
}

fn write_json_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, value).context("failed to serialize output")?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
