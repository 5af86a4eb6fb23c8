//! Drives a `Sim` to completion, either as fast as possible or paced
//! against the real clock.

use std::io::BufRead;
use std::time::Duration;

use anyhow::{Context, Result};
use sync_sim::{Sim, SimObserver};
use sync_theme::ThemeStore;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::RunSettings;
use crate::control::{Console, Controls, Flow};
use crate::output::Output;
use crate::render::Frame;

/// How often the realtime loop catches the simulated clock up.
const REALTIME_POLL_MS: u64 = 100;

/// Console lines buffered between the stdin thread and the run loop.
const CONTROL_QUEUE: usize = 16;

pub async fn run<S, T>(sim: &mut Sim<S>, settings: &RunSettings, console: &mut Console<T>, out: &mut Output) -> Result<()>
where
    S: Controls,
    T: ThemeStore,
{
    sim.start();
    if settings.realtime {
        run_realtime(sim, settings, console, out).await?;
    } else {
        run_batch(sim, settings, console, out);
    }
    SimObserver::<S::Event>::on_sim_end(out, sim.clock());

    if settings.quiet {
        println!("{}", sim.model().frame(sim.clock(), console.palette()));
    }
    info!(sim = S::NAME, fired = sim.timers_fired(), at = %sim.now(), "run finished");

    if let Some(e) = out.take_error() {
        warn!(error = %e, "output incomplete");
        return Err(e).context("writing simulation output");
    }
    Ok(())
}

/// One frame per step period until the duration is used up.
fn run_batch<S, T>(sim: &mut Sim<S>, settings: &RunSettings, console: &Console<T>, out: &mut Output)
where
    S: Controls,
    T: ThemeStore,
{
    let end = sim.now() + settings.duration_ms;
    let period = sim.speed().millis();
    while sim.now() < end {
        let step = period.min(end - sim.now());
        let fired = sim.advance(step, out);
        if fired > 0 && !settings.quiet {
            println!("{}", sim.model().frame(sim.clock(), console.palette()));
        }
    }
}

async fn run_realtime<S, T>(
    sim:      &mut Sim<S>,
    settings: &RunSettings,
    console:  &mut Console<T>,
    out:      &mut Output,
) -> Result<()>
where
    S: Controls,
    T: ThemeStore,
{
    let base = sim.now();
    let started = Instant::now();
    let mut ticker = tokio::time::interval(Duration::from_millis(REALTIME_POLL_MS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut lines = spawn_stdin_reader();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let elapsed = (started.elapsed().as_millis() as u64).min(settings.duration_ms);
                let fired = sim.advance_to(base + elapsed, out);
                if fired > 0 && !settings.quiet {
                    println!("{}", sim.model().frame(sim.clock(), console.palette()));
                }
                if elapsed >= settings.duration_ms {
                    break;
                }
            }
            line = lines.recv(), if stdin_open => {
                let Some(line) = line else {
                    debug!("stdin closed, console controls off");
                    stdin_open = false;
                    continue;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match console.dispatch(sim, &line) {
                    Ok(Flow::Reply(reply)) => {
                        println!("> {reply}");
                        println!("{}", sim.model().frame(sim.clock(), console.palette()));
                    }
                    Ok(Flow::Quit) => {
                        info!(at = %sim.now(), "stopped from console");
                        sim.pause();
                        break;
                    }
                    Err(e) => {
                        warn!(command = line.trim(), error = %format!("{e:#}"), "control rejected");
                        println!("! {e:#}");
                    }
                }
            }
            signal = &mut ctrl_c => {
                signal.context("listening for Ctrl-C")?;
                info!(at = %sim.now(), "interrupted");
                sim.pause();
                break;
            }
        }
    }
    Ok(())
}

/// Read stdin on a plain thread so a pending read never holds up shutdown.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(CONTROL_QUEUE);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}
