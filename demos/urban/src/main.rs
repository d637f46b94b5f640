//! urban — run the urban ecosystem on a 40 × 40 city and print a status
//! panel at the end.
//!
//! ```text
//! cargo run -p urban --release [config.json]
//! RUST_LOG=ue_sim=debug cargo run -p urban
//! ```
//!
//! The optional JSON file holds any subset of `EcosystemConfig` fields;
//! missing fields keep their defaults.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use ue_behavior::BehaviorModel;
use ue_core::EcosystemConfig;
use ue_grid::GridKind;
use ue_output::{CsvWriter, SimOutputObserver};
use ue_sim::{HealthStatus, Sim, SimBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:          u32   = 40;
const HEIGHT:         u32   = 40;
const SEED:           u64   = 42;
const AGENT_COUNT:    usize = 60;
const FORAGE_AMOUNT:  i32   = 5;
const VISION:         u32   = 5;
const TOTAL_TICKS:    u64   = 200;
const SNAPSHOT_EVERY: u64   = 10;
const OUTPUT_DIR:     &str  = "output/urban";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => default_config(),
    };

    println!("=== urban — adaptive agent ecosystem ===");
    println!(
        "Grid: {}×{}  |  Agents: {AGENT_COUNT}  |  Ticks: {}  |  Phase: {:?}",
        config.width, config.height, config.total_ticks, config.decision_phase
    );

    let mut sim = SimBuilder::new(config).build()?;
    sim.populate(AGENT_COUNT, FORAGE_AMOUNT, VISION)?;
    println!("Seed: {}", sim.seed());
    println!();

    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = SimOutputObserver::new(writer);

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        warn!(error = %e, "output incomplete");
    }
    info!(secs = elapsed.as_secs_f64(), rows = obs.snapshot_rows(), "run complete");

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  output written to {OUTPUT_DIR}/");
    println!();
    print_status(&sim);

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn default_config() -> EcosystemConfig {
    let mut c = EcosystemConfig::new(WIDTH, HEIGHT, Some(SEED));
    c.total_ticks = TOTAL_TICKS;
    c.output_interval_ticks = SNAPSHOT_EVERY;
    c
}

fn load_config(path: &Path) -> Result<EcosystemConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: EcosystemConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

// ── Status panel ──────────────────────────────────────────────────────────────

fn print_status<B: BehaviorModel>(sim: &Sim<B>) {
    let health = sim.system_health();
    let status = HealthStatus::from_health(health);
    let resource  = sim.grid(GridKind::Resource);
    let traffic   = sim.grid(GridKind::Traffic);
    let pollution = sim.grid(GridKind::Pollution);

    println!("{:<22} {}", "Tick", sim.tick());
    println!("{:<22} {}", "Agents", sim.agents().len());
    println!("{:<22} {:.1}", "Mean resource", resource.mean());
    println!("{:<22} {}", "Total traffic", traffic.total());
    println!("{:<22} {:.2}", "Mean pollution", pollution.mean());
    println!("{:<22} {:.1} ({status})", "System health", health);
    println!("{:<22} {:.1}", "Mean satisfaction", sim.mean_satisfaction());
    println!("{:<22} {:.1}", "Mean stress", sim.mean_stress());
    println!();

    println!("{:<12} {:>10} {:>10} {:>10}", "Sector", "Resource", "Traffic", "Pollution");
    println!("{}", "-".repeat(45));
    let r = sim.sector_means(GridKind::Resource);
    let t = sim.sector_means(GridKind::Traffic);
    let p = sim.sector_means(GridKind::Pollution);
    for ((r, t), p) in r.iter().zip(&t).zip(&p) {
        println!("{:<12} {:>10.1} {:>10.2} {:>10.2}", format!("{:?}", r.0), r.1, t.1, p.1);
    }
}
