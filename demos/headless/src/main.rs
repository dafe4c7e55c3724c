//! headless: run the ant colony without a window.
//!
//! Builds a world with a few food piles and a wall between them and the
//! nest, runs it for a fixed number of ticks (or simulated frames), and
//! writes a CSV trace.  Pass `--config` to override any tunable from a JSON
//! file; missing fields keep their defaults.

mod logging;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use ant_core::{Cell, ColonyConfig, Tick};
use ant_output::{CsvWriter, SimOutputObserver};
use ant_sim::{FrameDriver, TickReport, World, WorldBuilder, WorldObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const PILE_AMOUNT:  u32 = 200;
const WALL_RADIUS:  f32 = 3.0;
/// One 60 Hz display frame.
const FRAME:        Duration = Duration::from_micros(16_667);

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Headless ant colony run with CSV output.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ticks to run (ignored when --frames is given)
    #[arg(short, long, default_value_t = 5_000)]
    ticks: u64,

    /// Drive the run through the frame pacer for this many 60 Hz frames
    #[arg(long)]
    frames: Option<u64>,

    /// Initial population (clamped to the configured bounds)
    #[arg(short, long)]
    population: Option<usize>,

    /// World seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Speed multiplier
    #[arg(long, default_value_t = 1.0)]
    speed: f32,

    /// JSON file overriding `ColonyConfig` fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for tick_summaries.csv and ant_snapshots.csv
    #[arg(short, long, default_value = "output/headless")]
    output: PathBuf,

    /// Write an ant snapshot every N ticks (0 disables)
    #[arg(long, default_value_t = 100)]
    snapshot_interval: u64,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(path: Option<&Path>) -> Result<ColonyConfig> {
    let Some(path) = path else {
        return Ok(ColonyConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    info!("loaded config overrides from {}", path.display());
    Ok(config)
}

/// Food piles in three corners and a wall across the approach to the fourth.
fn build_world(config: ColonyConfig, args: &Args) -> Result<World> {
    let grid = config.grid();
    let (w, h) = (grid.width as i32, grid.height as i32);
    let nest = config.nest_cell();

    let mut builder = WorldBuilder::new(config)
        .seed(args.seed)
        .snapshot_interval(args.snapshot_interval)
        .food(Cell::new(w / 8, h / 8), PILE_AMOUNT)
        .food(Cell::new(w - w / 8, h / 8), PILE_AMOUNT)
        .food(Cell::new(w / 8, h - h / 8), PILE_AMOUNT);

    // Wall halfway between the nest and the bottom-right corner.
    let (wx, wy) = ((nest.x + w) / 2, (nest.y + h) / 2);
    for dx in -6..=6 {
        builder = builder.obstacle(Cell::new(wx + dx, wy - dx), WALL_RADIUS);
    }
    if let Some(n) = args.population {
        builder = builder.population(n);
    }
    Ok(builder.build()?)
}

/// Logs colony counters every `every` ticks.
struct Progress {
    every: u64,
}

impl WorldObserver for Progress {
    fn on_tick_end(&mut self, report: &TickReport, world: &World) {
        if self.every > 0 && report.tick.0 > 0 && report.tick.is_multiple_of(self.every) {
            info!(
                "{}: score {}, carrying {}, food left {}",
                report.tick,
                world.score(),
                world.carrying_count(),
                world.food().total_amount(),
            );
        }
    }
}

/// Fans every hook out to the CSV observer and the progress logger.
struct Both<'a, A, B>(&'a mut A, &'a mut B);

impl<A: WorldObserver, B: WorldObserver> WorldObserver for Both<'_, A, B> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }
    fn on_tick_end(&mut self, report: &TickReport, world: &World) {
        self.0.on_tick_end(report, world);
        self.1.on_tick_end(report, world);
    }
    fn on_snapshot(&mut self, tick: Tick, world: &World) {
        self.0.on_snapshot(tick, world);
        self.1.on_snapshot(tick, world);
    }
    fn on_run_end(&mut self, final_tick: Tick) {
        self.0.on_run_end(final_tick);
        self.1.on_run_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = load_config(args.config.as_deref())?;
    let mut world = build_world(config, &args)?;
    info!(
        "world {}x{}, {} ants, {} food in {} piles, {} wall cells, seed {}",
        world.grid().width,
        world.grid().height,
        world.ants().len(),
        world.food().total_amount(),
        world.food().len(),
        world.obstacles().blocked_count(),
        world.seed(),
    );

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let writer = CsvWriter::new(&args.output)?;
    let mut csv = SimOutputObserver::new(writer);
    let mut progress = Progress { every: 1_000 };

    let started = Instant::now();
    match args.frames {
        Some(frames) => {
            let mut driver = FrameDriver::new(world.config());
            driver.set_speed(args.speed);
            let mut obs = Both(&mut csv, &mut progress);
            let mut ticks = 0_u64;
            for _ in 0..frames {
                ticks += u64::from(driver.advance(&mut world, FRAME, &mut obs));
            }
            obs.on_run_end(world.tick_count());
            info!("{frames} frames -> {ticks} ticks");
        }
        None => {
            world.run(args.ticks, args.speed, &mut Both(&mut csv, &mut progress));
        }
    }
    let elapsed = started.elapsed();

    if let Some(e) = csv.take_error() {
        warn!("output error: {e}");
    }

    if args.json {
        let summary = serde_json::json!({
            "ticks":          world.tick_count().0,
            "score":          world.score(),
            "ants":           world.ants().len(),
            "carrying":       world.carrying_count(),
            "food_remaining": world.food().total_amount(),
            "field_total":    world.field().total(),
            "field_peak":     world.field().max_value(),
            "elapsed_ms":     elapsed.as_millis() as u64,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} ticks in {:.2?}: score {}, {} carrying, {} food left",
            world.tick_count().0,
            elapsed,
            world.score(),
            world.carrying_count(),
            world.food().total_amount(),
        );
    }
    info!("trace written to {}", args.output.display());
    Ok(())
}
