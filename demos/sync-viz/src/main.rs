//! sync-viz — terminal front end for the sleeping barber and cigarette
//! smokers simulators.
//!
//! ```text
//! sync-viz barber --chairs 1 --arrival-rate 100 --duration 30
//! sync-viz smokers --force tobacco+paper --speed fast --output out/
//! sync-viz --store prefs.json theme toggle
//! ```
//!
//! With `--realtime`, lines typed on stdin steer the run; see [`control`].

mod cli;
mod config;
mod control;
mod logging;
mod output;
mod prefs;
mod render;
mod run;


use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use sync_barber::{BarberConfig, BarberShop};
use sync_core::Simulation;
use sync_sim::SimBuilder;
use sync_smokers::SmokersRoom;

use cli::{BarberArgs, Cli, Command, SmokersArgs};
use config::{AppConfig, RunSettings};
use control::Console;
use output::Output;
use prefs::AnyStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_level.as_tracing_level(), cli.log_file.as_deref())?;

    let file = AppConfig::load(cli.config.as_deref())?;
    let store = file.store_path(cli.store.as_deref());
    let system = cli.system_scheme.or(file.system_scheme).unwrap_or_default();

    match cli.command {
        Command::Barber(args) => barber(args, &file, &mut prefs::console(&store, system)).await,
        Command::Smokers(args) => smokers(args, &file, &mut prefs::console(&store, system)).await,
        Command::Theme { action } => {
            let mut themes = prefs::open_controller(&store, system)?;
            println!("{}", prefs::theme_command(&action, &mut themes)?);
            Ok(())
        }
    }
}

fn barber_config(args: &BarberArgs, file: &AppConfig) -> Result<BarberConfig> {
    let defaults = BarberConfig::default();
    BarberConfig::new(
        args.chairs.or(file.chairs).unwrap_or(defaults.chairs()),
        args.arrival_rate.or(file.arrival_rate).unwrap_or(defaults.arrival_rate()),
    )
    .context("invalid barber settings")
}

async fn barber(args: BarberArgs, file: &AppConfig, console: &mut Console<AnyStore>) -> Result<()> {
    let settings = RunSettings::resolve(&args.sim, file);
    let shop = BarberShop::new(barber_config(&args, file)?);
    let mut sim = SimBuilder::new(shop).config(settings.sim.clone()).build();

    for _ in 0..args.add {
        sim.with_paused(|shop, clock| shop.admit(clock))?;
    }

    let mut out = open_output(&settings, BarberShop::NAME)?;
    run::run(&mut sim, &settings, console, &mut out).await?;

    let shop = sim.model();
    println!(
        "Served {} | Rejected {} | Still waiting {} | Next customer {}",
        shop.served(),
        shop.rejected(),
        shop.waiting_count(),
        shop.next_id()
    );
    Ok(())
}

async fn smokers(args: SmokersArgs, file: &AppConfig, console: &mut Console<AnyStore>) -> Result<()> {
    let settings = RunSettings::resolve(&args.sim, file);
    let mut sim = SimBuilder::new(SmokersRoom::new()).config(settings.sim.clone()).build();

    if let Some(pair) = args.force {
        sim.with_paused(|room, clock| room.place(pair, clock))?
            .context("forcing the first placement")?;
    }

    let mut out = open_output(&settings, SmokersRoom::NAME)?;
    run::run(&mut sim, &settings, console, &mut out).await?;

    let room = sim.model();
    let counts: Vec<String> = room
        .smokers()
        .iter()
        .map(|s| format!("{} ({}): {}", s.id, s.has, s.smokes))
        .collect();
    println!("Total smokes {} | {}", room.total_smokes(), counts.join(", "));
    Ok(())
}

fn open_output(settings: &RunSettings, simulation: &str) -> Result<Output> {
    let dir = settings.output_dir.as_deref();
    Output::open(dir, settings.sqlite, simulation)
        .with_context(|| format!("opening output in {}", dir.unwrap_or(Path::new(".")).display()))
}
