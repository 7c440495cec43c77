use bounce::{ScenarioConfig, Simulation, NullCanvas};
use bounce::run_2d;
use bounce::bench_tick;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, long, default_value = "default.yaml")]
    file_name: String,

    /// Run this many ticks without a window, then exit
    #[arg(long)]
    headless: Option<u64>,

    /// Time tick() for several particle counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let scenario_cfg = ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn run_headless(mut sim: Simulation, ticks: u64) {
    let every = (ticks / 10).max(1);
    info!(
        particles = sim.particles().len(),
        energy = sim.kinetic_energy(),
        "headless run starting"
    );

    for _ in 0..ticks {
        sim.tick(&mut NullCanvas);
        if sim.system.tick % every == 0 {
            let p = sim.total_momentum();
            info!(
                tick = sim.system.tick,
                px = p.x,
                py = p.y,
                energy = sim.kinetic_energy(),
                "progress"
            );
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // the viewer installs its own subscriber through bevy's LogPlugin
    if args.bench || args.headless.is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    if args.bench {
        bench_tick();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let sim = Simulation::build_scenario(scenario_cfg).context("failed to build scenario")?;

    match args.headless {
        Some(ticks) => run_headless(sim, ticks),
        None => run_2d(sim)?,
    }

    Ok(())
}
