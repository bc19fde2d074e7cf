// config.rs - Command-line flags and the validated run configuration

use clap::{ArgAction, Parser, ValueEnum};
use conway::Topology;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const SPRITE_SIZES: [u32; 4] = [2, 4, 8, 16];

#[derive(Parser, Debug)]
#[command(name = "conway_coro")]
#[command(version)]
#[command(about = "Conway's Game of Life with hedge, torus and Klein-bottle edges", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Width of the screen in pixels (640, 800, 1024, ...)
    #[arg(short = 'w', long, default_value_t = 400)]
    pub width: u32,

    /// Height of the screen in pixels (480, 600, 768, ...)
    #[arg(short = 'h', long, default_value_t = 400)]
    pub height: u32,

    /// Type of edge: hedge, torus, klein or klein-reflected
    #[arg(short = 'e', long, default_value = "hedge")]
    pub edge: Topology,

    /// Red value of live cells [0, 255]
    #[arg(short = 'r', long, default_value_t = 255)]
    pub red: u8,

    /// Green value of live cells [0, 255]
    #[arg(short = 'g', long, default_value_t = 255)]
    pub green: u8,

    /// Blue value of live cells [0, 255]
    #[arg(short = 'b', long, default_value_t = 255)]
    pub blue: u8,

    /// Size of one cell in pixels: 2, 4, 8 or 16
    #[arg(short = 's', long = "sprite-size", default_value_t = 4)]
    pub sprite_size: u32,

    /// Life pattern in Life 1.06 format
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// x,y grid coordinate of the pattern's origin (no space between x and y)
    #[arg(short = 'o', long, default_value = "50,50")]
    pub origin: Origin,

    /// How each generation is computed
    #[arg(long, value_enum, default_value_t = StepperKind::Sync)]
    pub stepper: StepperKind,

    /// Minimum time between generations in milliseconds (0 = every frame)
    #[arg(long = "interval-ms", default_value_t = 0)]
    pub interval_ms: u64,

    /// Run this many generations without a window, printing each one to stdout
    #[arg(long, value_name = "GENERATIONS")]
    pub headless: Option<u64>,

    /// Pause when a generation repeats one of the last ten
    #[arg(long = "stop-on-cycle")]
    pub stop_on_cycle: bool,

    /// Print help
    #[arg(short = 'H', long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StepperKind {
    /// Whole grid on the UI thread
    Sync,
    /// One tokio coroutine per row
    Coro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub x: i64,
    pub y: i64,
}

impl FromStr for Origin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected x,y but got '{}'", s))?;
        let x = x.trim().parse().map_err(|_| format!("invalid x coordinate '{}'", x))?;
        let y = y.trim().parse().map_err(|_| format!("invalid y coordinate '{}'", y))?;
        Ok(Origin { x, y })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    SpriteSize(u32),
    /// The window is smaller than a single cell on some axis.
    TooSmall { width: u32, height: u32, sprite_size: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SpriteSize(size) => {
                write!(f, "sprite size {} is not one of 2, 4, 8 or 16", size)
            }
            ConfigError::TooSmall { width, height, sprite_size } => write!(
                f,
                "a {}x{} screen holds no {}-pixel cells",
                width, height, sprite_size
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything a run needs, checked once at startup.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub sprite_size: u32,
    pub topology: Topology,
    pub live_rgb: (u8, u8, u8),
    pub pattern_file: Option<PathBuf>,
    pub origin: (i64, i64),
    pub stepper: StepperKind,
    pub update_interval: Duration,
    pub headless: Option<u64>,
    pub stop_on_cycle: bool,
}

impl TryFrom<Cli> for RunConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if !SPRITE_SIZES.contains(&cli.sprite_size) {
            return Err(ConfigError::SpriteSize(cli.sprite_size));
        }
        let grid_width = (cli.width / cli.sprite_size) as usize;
        let grid_height = (cli.height / cli.sprite_size) as usize;
        if grid_width == 0 || grid_height == 0 {
            return Err(ConfigError::TooSmall {
                width: cli.width,
                height: cli.height,
                sprite_size: cli.sprite_size,
            });
        }

        Ok(RunConfig {
            grid_width,
            grid_height,
            sprite_size: cli.sprite_size,
            topology: cli.edge,
            live_rgb: (cli.red, cli.green, cli.blue),
            pattern_file: cli.file,
            origin: (cli.origin.x, cli.origin.y),
            stepper: cli.stepper,
            update_interval: Duration::from_millis(cli.interval_ms),
            headless: cli.headless,
            stop_on_cycle: cli.stop_on_cycle,
        })
    }
}
