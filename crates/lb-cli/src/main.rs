//! Labyrinth maze generator
//!
//! Main entry point: generates a maze, optionally solves it or replays a
//! move string, and prints the result as plain text or JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use lb_core::maze::render;
use lb_core::{
    Coord, Difficulty, GameRng, Grid, MazeConfig, MoveOutcome, Player, generate_with_rng, solve,
};

/// Generate and solve mazes
#[derive(Parser, Debug)]
#[command(name = "labyrinth")]
#[command(author, version, about = "Labyrinth - carve a maze and find the way out", long_about = None)]
struct Args {
    /// Size preset (easy, medium, hard)
    #[arg(short = 'd', long = "difficulty", default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// JSON config file; values override the preset
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Maze width (clamped to at least 7, rounded up to odd)
    #[arg(long = "width")]
    width: Option<usize>,

    /// Maze height (clamped to at least 7, rounded up to odd)
    #[arg(long = "height")]
    height: Option<usize>,

    /// Seed for a reproducible maze
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Number of collectibles to scatter
    #[arg(short = 'n', long = "collectibles")]
    collectibles: Option<usize>,

    /// Print the maze with the solution path overlaid
    #[arg(long = "solve", conflicts_with = "walk")]
    solve: bool,

    /// Walk the maze with a string of w/a/s/d moves and report the score
    #[arg(short = 'w', long = "walk")]
    walk: Option<String>,

    /// Dump the generated grid as JSON instead of text
    #[arg(long = "json")]
    json: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    /// Preset, then config file, then explicit flags
    fn maze_config(&self) -> Result<MazeConfig> {
        let mut config = MazeConfig::from_difficulty(self.difficulty);
        if let Some(path) = &self.config {
            let body = fs::read_to_string(path)
                .with_context(|| format!("could not read config {}", path.display()))?;
            config
                .apply_json_str(&body)
                .with_context(|| format!("could not parse config {}", path.display()))?;
        }

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(collectibles) = self.collectibles {
            config.collectibles = collectibles;
        }
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .init();
}

/// Play a path back from the entrance; true when it ends on the exit
fn replay_reaches_exit(grid: &Grid, path: &[Coord]) -> bool {
    Player::new(grid).follow(grid, path) == grid.exit()
}

fn print_grid(grid: &Grid, player: Option<&Player>, trail: &[Coord]) {
    let rows = render::rows(grid, player.map(|p| p.pos)).with_trail(trail);
    for line in render::to_lines(rows) {
        println!("{}", line);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.maze_config()?;
    let mut rng = GameRng::from_optional_seed(config.seed);
    info!("generating with seed {}", rng.seed());
    let mut grid = generate_with_rng(&config.params(), &mut rng);

    if args.json {
        let body = serde_json::to_string_pretty(&grid).context("could not encode grid")?;
        println!("{}", body);
        return Ok(());
    }

    println!(
        "Labyrinth {}x{} (seed {}, {} collectibles)",
        grid.width(),
        grid.height(),
        rng.seed(),
        grid.collectibles().len()
    );

    if let Some(keys) = &args.walk {
        let mut player = Player::new(&grid);
        let outcomes = player.walk(&mut grid, keys);
        print_grid(&grid, Some(&player), &[]);
        let escaped = outcomes.last() == Some(&MoveOutcome::Escaped);
        println!(
            "Moves: {}  Items: {}  Score: {}{}",
            player.moves,
            player.collected,
            player.score,
            if escaped { "  - escaped!" } else { "" }
        );
        return Ok(());
    }

    if args.solve {
        match solve(&grid) {
            Ok(path) => {
                let reached = replay_reaches_exit(&grid, &path);
                print_grid(&grid, None, &path);
                println!(
                    "Solution: {} steps{}",
                    path.len() - 1,
                    if reached { "" } else { " (exit not reached)" }
                );
            }
            Err(err) if err.is_not_found() => {
                print_grid(&grid, None, &[]);
                println!("No solution found!");
            }
            Err(err) => return Err(anyhow::Error::new(err).context("solver failed")),
        }
        return Ok(());
    }

    print_grid(&grid, None, &[]);
    Ok(())
}
