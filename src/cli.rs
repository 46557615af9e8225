use clap::{Parser, Subcommand};
use std::path::PathBuf;

use slide_puzzle::{Direction, DisplaySize, GridIndex, SessionSettings};

#[derive(Parser)]
#[command(name = "slide-puzzle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sliding-tile picture puzzle", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print an image's format and dimensions
    Info {
        path: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Print every tile's source rectangle and display position
    Layout {
        path: PathBuf,

        #[command(flatten)]
        grid: GridArgs,

        #[arg(long)]
        json: bool,
    },

    /// Play a shuffled puzzle in the terminal
    Play {
        path: PathBuf,

        #[command(flatten)]
        grid: GridArgs,

        /// Random legal moves used to scramble the board
        #[arg(short, long)]
        shuffle: Option<usize>,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(clap::Args)]
pub struct GridArgs {
    /// JSON settings file; flags given on the command line take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub columns: Option<u32>,

    #[arg(short, long)]
    pub rows: Option<u32>,

    #[arg(long)]
    pub display_width: Option<f64>,

    #[arg(long)]
    pub display_height: Option<f64>,
}

impl GridArgs {
    pub fn apply(&self, mut settings: SessionSettings) -> SessionSettings {
        if let Some(columns) = self.columns {
            settings.columns = columns;
        }
        if let Some(rows) = self.rows {
            settings.rows = rows;
        }
        if self.display_width.is_some() || self.display_height.is_some() {
            settings.display = DisplaySize::new(
                self.display_width.unwrap_or(settings.display.width),
                self.display_height.unwrap_or(settings.display.height),
            );
        }
        settings
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    Quit,
    Slide(Direction),
    Cell(GridIndex),
}

/// Parses `q`, one of `w/a/s/d`, or `column,row`.
pub fn parse_player_input(text: &str) -> Option<PlayerInput> {
    let text = text.trim().to_lowercase();
    match text.as_str() {
        "q" | "quit" => return Some(PlayerInput::Quit),
        "w" => return Some(PlayerInput::Slide(Direction::Up)),
        "a" => return Some(PlayerInput::Slide(Direction::Left)),
        "s" => return Some(PlayerInput::Slide(Direction::Down)),
        "d" => return Some(PlayerInput::Slide(Direction::Right)),
        _ => {}
    }

    let (column, row) = text.split_once(',')?;
    let column = column.trim().parse().ok()?;
    let row = row.trim().parse().ok()?;
    Some(PlayerInput::Cell(GridIndex::new(column, row)))
}
