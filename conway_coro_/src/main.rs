// main.rs - Conway's Game of Life driver
// Parses flags, seeds the simulation, then either opens the egui window or
// prints generations to stdout in headless mode.

use clap::Parser;
use conway::{LifeError, Simulation, StepOutcome, patterns};
use eframe::egui;
use egui::Color32;
use std::io::{IsTerminal, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod ui;

use config::{Cli, RunConfig, StepperKind};
use error::AppError;

// Room for the control rows above and below the board.
const CONTROLS_HEIGHT: f32 = 190.0;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match RunConfig::try_from(cli).map_err(AppError::from).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// Logs go to stderr so headless output on stdout stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(config: RunConfig) -> Result<(), AppError> {
    let mut sim = Simulation::new(config.grid_width, config.grid_height, config.topology)?;

    if let Some(path) = &config.pattern_file {
        let cells = conway::load_life106(path)?;
        let report = sim.seed(cells, config.origin);
        tracing::info!(
            file = %path.display(),
            applied = report.applied,
            skipped = report.skipped,
            "pattern seeded"
        );
    }

    let stepper = Stepper::new(config.stepper)?;
    tracing::info!(
        width = config.grid_width,
        height = config.grid_height,
        edge = %config.topology,
        stepper = ?config.stepper,
        "simulation ready"
    );

    match config.headless {
        Some(generations) => run_headless(&mut sim, &stepper, generations, config.stop_on_cycle),
        None => run_window(GameOfLife::new(sim, stepper, &config)),
    }
}

fn run_headless(
    sim: &mut Simulation,
    stepper: &Stepper,
    generations: u64,
    stop_on_cycle: bool,
) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_generation(&mut out, sim)?;
    for _ in 0..generations {
        let outcome = stepper.step(sim)?;
        print_generation(&mut out, sim)?;
        if stop_on_cycle && outcome == StepOutcome::Cycle {
            tracing::info!(generation = sim.generation(), "cycle detected, stopping");
            break;
        }
    }
    Ok(())
}

fn print_generation(out: &mut impl Write, sim: &Simulation) -> Result<(), AppError> {
    let grid = sim.current();
    write!(out, "generation {}: {} alive\n{}\n", sim.generation(), grid.live_count(), grid)
        .map_err(AppError::Output)
}

fn run_window(app: GameOfLife) -> Result<(), AppError> {
    let board = app.board_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board.x.max(560.0) + 20.0, board.y + CONTROLS_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| AppError::Window(e.to_string()))?;

    println!("Thats Life Folks!");
    Ok(())
}

/// Computes generations either on the calling thread or as row coroutines.
pub struct Stepper {
    runtime: Option<tokio::runtime::Runtime>,
}

impl Stepper {
    fn new(kind: StepperKind) -> Result<Self, AppError> {
        let runtime = match kind {
            StepperKind::Sync => None,
            StepperKind::Coro => Some(tokio::runtime::Runtime::new().map_err(AppError::Runtime)?),
        };
        Ok(Self { runtime })
    }

    pub fn step(&self, sim: &mut Simulation) -> Result<StepOutcome, LifeError> {
        match &self.runtime {
            Some(runtime) => sim.step_concurrent(runtime),
            None => sim.step(),
        }
    }
}

/// Window state: the simulation plus everything the controls can change.
pub struct GameOfLife {
    sim: Simulation,
    stepper: Stepper,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub stop_on_cycle: bool,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub cell_size: f32,
    pub selected_pattern: usize,
    pub status: Option<String>,
    random_seed: u32,
}

impl GameOfLife {
    fn new(sim: Simulation, stepper: Stepper, config: &RunConfig) -> Self {
        let (r, g, b) = config.live_rgb;
        Self {
            sim,
            stepper,
            is_running: true,
            last_update: Instant::now(),
            update_interval: config.update_interval,
            stop_on_cycle: config.stop_on_cycle,
            live_color: Color32::from_rgb(r, g, b),
            dead_color: Color32::BLACK,
            cell_size: config.sprite_size as f32,
            selected_pattern: 0,
            status: None,
            random_seed: 0,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn board_size(&self) -> egui::Vec2 {
        let grid = self.sim.current();
        egui::vec2(
            grid.width() as f32 * self.cell_size,
            grid.height() as f32 * self.cell_size,
        )
    }
}

/// Actions the window's controls trigger.
pub trait GameOfLifeInterface {
    fn update_generation(&mut self);
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn apply_random_pattern(&mut self);
    fn toggle_cell(&mut self, x: usize, y: usize);
}

impl GameOfLifeInterface for GameOfLife {
    fn update_generation(&mut self) {
        match self.stepper.step(&mut self.sim) {
            Ok(StepOutcome::Evolved) => {}
            Ok(StepOutcome::Cycle) => {
                if self.stop_on_cycle {
                    self.is_running = false;
                    self.status = Some(format!("Cycle detected at generation {}", self.sim.generation()));
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "generation step failed");
                self.is_running = false;
                self.status = Some(e.to_string());
            }
        }
    }

    fn clear_grid(&mut self) {
        self.sim.clear();
        self.status = None;
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            let report = self.sim.load_pattern(pattern);
            self.status = (report.skipped > 0)
                .then(|| format!("{} cells did not fit on the board", report.skipped));
        }
    }

    fn apply_random_pattern(&mut self) {
        self.random_seed = self.random_seed.wrapping_add(1);
        self.sim.randomize(self.random_seed);
        self.status = None;
    }

    fn toggle_cell(&mut self, x: usize, y: usize) {
        if let Err(e) = self.sim.toggle(x, y) {
            tracing::debug!(error = %e, "click outside the board ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::Topology;
    use std::error::Error;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn print_generation_writes_header_and_board() {
        let mut sim = Simulation::new(3, 2, Topology::Clipped).unwrap();
        sim.seed([(1, 0)], (0, 0));
        let mut out = Vec::new();
        print_generation(&mut out, &sim).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "generation 0: 1 alive\n.#.\n...\n\n");
    }

    #[test]
    fn failed_write_is_reported_as_output_error() {
        let sim = Simulation::new(3, 3, Topology::Toroidal).unwrap();
        let err = print_generation(&mut BrokenPipe, &sim).unwrap_err();

        assert!(matches!(err, AppError::Output(_)));
        assert!(err.to_string().starts_with("cannot write generation output:"), "{err}");
        assert!(!err.to_string().contains("runtime"));
        assert!(err.source().is_some());
    }
}
