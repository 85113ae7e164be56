use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use pricer_core::{update, AppState, Category, Msg};
use pricer_engine::{ClientSettings, EngineEvent, EngineHandle};

use crate::cli::{Cli, Commands};
use crate::{config, effects::EffectRunner, render};

/// The estimate request itself times out server-side at 30s; this bounds the
/// whole round trip including file IO.
const WAIT_LIMIT: Duration = Duration::from_secs(60);

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = config::client_settings(cli.api_base.as_deref());
    match cli.command {
        Commands::Estimate {
            image,
            category,
            notes,
        } => run_estimate(settings, image, category.into(), notes),
        Commands::Health => run_health(settings),
    }
}

fn run_estimate(
    settings: ClientSettings,
    image: String,
    category: Category,
    notes: String,
) -> anyhow::Result<()> {
    let metadata = std::fs::metadata(&image)
        .with_context(|| format!("could not read image file {image}"))?;
    anyhow::ensure!(metadata.is_file(), "{image} is not a file");

    let (msg_tx, msg_rx) = mpsc::channel();
    let runner = EffectRunner::new(settings, msg_tx);

    // Fill in the form the way the view would: pick the file, set the
    // category and notes, then press submit.
    let mut state = AppState::new();
    for msg in [
        Msg::ImagePicked {
            path: image,
            size_bytes: metadata.len(),
        },
        Msg::CategorySelected(category),
        Msg::NotesChanged(notes),
        Msg::SubmitClicked,
    ] {
        state = dispatch(state, msg, &runner);
    }

    let mut view = state.view();
    if view.submitting {
        eprintln!("Estimating...");
        while view.submitting {
            let msg = msg_rx
                .recv_timeout(WAIT_LIMIT)
                .map_err(|_| anyhow::anyhow!("timed out waiting for the estimate service"))?;
            state = dispatch(state, msg, &runner);
            view = state.view();
        }
    }

    if let Some(error) = &view.error {
        eprintln!("{error}");
        std::process::exit(1);
    }
    if let Some(result) = &view.result {
        render::print_result(result);
    }
    Ok(())
}

fn run_health(settings: ClientSettings) -> anyhow::Result<()> {
    let (engine, events) = EngineHandle::new(settings);
    engine.check_health();

    let event = events
        .recv_timeout(WAIT_LIMIT)
        .map_err(|_| anyhow::anyhow!("timed out waiting for the estimate service"))?;
    match event {
        EngineEvent::HealthDone { result } => match result {
            Ok(status) if status.ok => {
                println!("ok");
                Ok(())
            }
            Ok(status) => {
                eprintln!(
                    "degraded: {}",
                    status.error.unwrap_or_else(|| "unknown".to_string())
                );
                std::process::exit(1);
            }
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
        other => anyhow::bail!("unexpected engine event: {other:?}"),
    }
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (mut state, effects) = update(state, msg);
    runner.enqueue(effects);
    // One render pass at the end of the run; the flag only matters there.
    let _ = state.consume_dirty();
    state
}
