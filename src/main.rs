//! SerpentGuard command line: one classification cycle from exported
//! classifier output to a printed triage report and a logged incident.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use crossbeam_channel::unbounded;

use serpentguard::classifier::{ImageRef, JsonPredictionSource};
use serpentguard::config::{LoggerConfig, TriageConfig};
use serpentguard::cycle::{self, CycleFault, CycleRequest};
use serpentguard::incident::{EndpointClient, LogOutcome};
use serpentguard::triage::{TriageMode, report};

#[derive(Parser)]
#[command(
    name = "serpentguard",
    about = "Snakebite triage from ranked image classifier output."
)]
struct Cli {
    /// JSON file with the classifier's ranked predictions for the image
    predictions: PathBuf,

    /// Capture flow the predictions came from
    #[arg(long, value_enum, default_value = "snake")]
    mode: Mode,

    /// Persistence endpoint base URL
    #[arg(long, default_value = "http://localhost:5000")]
    endpoint: String,

    /// Skip the endpoint and save the incident locally
    #[arg(long)]
    offline: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Snake,
    Bite,
}

impl From<Mode> for TriageMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Snake => TriageMode::Snake,
            Mode::Bite => TriageMode::BiteMark,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (req_tx, req_rx) = unbounded();
    let (out_tx, out_rx) = unbounded();
    let worker = cycle::spawn_cycle_worker(
        Arc::new(JsonPredictionSource),
        TriageConfig::default(),
        req_rx,
        out_tx,
    );

    let cycle_id = 1;
    req_tx
        .send(CycleRequest {
            cycle_id,
            image: ImageRef::new(&cli.predictions),
            mode: cli.mode.into(),
        })
        .context("cycle worker unavailable")?;

    let outcome = out_rx
        .recv()
        .context("cycle worker exited before replying")?;
    drop(req_tx);
    if worker.join().is_err() {
        bail!("cycle worker panicked");
    }

    if !cycle::is_current(cycle_id, &outcome) {
        bail!("stale cycle outcome {}", outcome.cycle_id);
    }
    let verdict = match outcome.result {
        Ok(verdict) => verdict,
        Err(CycleFault::ModelNotReady) => {
            bail!("classifier model not ready, try again shortly")
        }
        Err(fault) => bail!("{}", fault),
    };

    println!("{}", report::render(&verdict, outcome.mode));

    let logger_config = LoggerConfig {
        endpoint_url: cli.endpoint,
        ..Default::default()
    };
    let client = EndpointClient::new(&logger_config);
    let logged = if cli.offline {
        client.log_offline(&verdict)
    } else {
        client.log(&verdict)
    };
    match logged {
        LogOutcome::Delivered => println!("Incident logged to {}", logger_config.endpoint_url),
        LogOutcome::SavedLocallyOffline => println!("Incident saved locally (endpoint offline)"),
    }

    Ok(())
}
