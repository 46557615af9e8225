mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use dialoguer::{Input, theme::ColorfulTheme};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use tracing::Level;

use cli::{Cli, Commands, GridArgs, PlayerInput, parse_player_input};
use slide_puzzle::formats::png;
use slide_puzzle::{
    GridIndex, ImageFormat, ImageMetadata, PuzzleBoard, PuzzleSession, SessionSettings, TileLayout,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info { path, json } => run_info(&path, json),
        Commands::Layout { path, grid, json } => run_layout(&path, &grid, json),
        Commands::Play {
            path,
            grid,
            shuffle,
            seed,
        } => run_play(&path, &grid, shuffle, seed),
    }
}

fn load_image(path: &Path) -> Result<ImageMetadata> {
    ImageMetadata::from_path(path)
        .with_context(|| format!("Failed to read image header from {}", path.display()))
}

fn load_settings(grid: &GridArgs) -> Result<SessionSettings> {
    let base = match &grid.config {
        Some(config) => SessionSettings::from_json_file(config)
            .with_context(|| format!("Failed to load settings from {}", config.display()))?,
        None => SessionSettings::default(),
    };
    Ok(grid.apply(base))
}

fn run_info(path: &Path, json: bool) -> Result<()> {
    let image = load_image(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&image)?);
        return Ok(());
    }

    println!(
        "{} {} x {}",
        style(image.format()).cyan().bold(),
        image.width(),
        image.height()
    );
    if image.format() == ImageFormat::Png && !png::ihdr_checksum_matches(image.raw_bytes())
    {
        println!("{}", style("IHDR checksum does not match").yellow());
    }
    Ok(())
}

fn run_layout(path: &Path, grid: &GridArgs, json: bool) -> Result<()> {
    let image = load_image(path)?;
    let settings = load_settings(grid)?;
    settings.validate(&image)?;

    let layout = TileLayout::new(settings.grid(), image.size(), settings.display);
    let cells: Vec<_> = settings
        .grid()
        .indices()
        .map(|index| {
            (
                index,
                layout.source_rect_for(index),
                layout.placement_for(index),
            )
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&cells)?);
        return Ok(());
    }

    let (scale_x, scale_y) = layout.display_scale();
    println!("scale {scale_x:.4} x {scale_y:.4}");
    println!(
        "{:<10} {:>28} {:>20}",
        style("CELL").bold(),
        style("SOURCE").bold(),
        style("POSITION").bold()
    );
    for (index, rect, point) in cells {
        println!(
            "{:<10} {:>28} {:>20}",
            index.to_string(),
            format!(
                "{:.1},{:.1} {:.1}x{:.1}",
                rect.x, rect.y, rect.width, rect.height
            ),
            format!("{:.1},{:.1}", point.x, point.y)
        );
    }
    Ok(())
}

fn run_play(path: &Path, grid: &GridArgs, shuffle: Option<usize>, seed: Option<u64>) -> Result<()> {
    let image = load_image(path)?;
    let mut settings = load_settings(grid)?;
    if let Some(moves) = shuffle {
        settings.shuffle_moves = moves;
    }

    let mut session = match seed {
        Some(seed) => PuzzleSession::start_with(image, settings, &mut StdRng::seed_from_u64(seed)),
        None => PuzzleSession::start(image, settings),
    }
    .context("Failed to start puzzle session")?;

    let theme = ColorfulTheme::default();
    let mut moves = 0usize;

    loop {
        println!();
        print_board(session.board());

        if session.is_solved() {
            println!(
                "\n{}",
                style(format!("Solved in {moves} moves!")).green().bold()
            );
            return Ok(());
        }

        let text: String = Input::with_theme(&theme)
            .with_prompt("Move (w/a/s/d, column,row or q)")
            .interact_text()
            .context("Failed to read move")?;

        let moved = match parse_player_input(&text) {
            Some(PlayerInput::Quit) => return Ok(()),
            Some(PlayerInput::Slide(direction)) => session.try_slide(direction),
            Some(PlayerInput::Cell(index)) => session.try_move(index),
            None => {
                println!("{}", style("Unrecognised input").yellow());
                continue;
            }
        };

        if moved {
            moves += 1;
        } else {
            println!("{}", style("That tile cannot move").yellow());
        }
    }
}

/// Prints tile numbers with the highest row on top, matching the on-screen
/// orientation.
fn print_board(board: &PuzzleBoard) {
    let columns = board.width() as i32;
    let width = board.size().cell_count().to_string().len();

    for row in (0..board.height() as i32).rev() {
        let line: Vec<String> = (0..columns)
            .map(|column| {
                match board.tile_at(GridIndex::new(column, row)) {
                    Some(tile) => {
                        let home = tile.correct_index();
                        let number = home.row * columns + home.column + 1;
                        format!("{number:>width$}")
                    }
                    None => " ".repeat(width),
                }
            })
            .collect();
        println!("{:>3} | {}", row, line.join(" "));
    }
}
